//! The cover logo, as PostScript path data

/// Width and height of the logo path in its own units
pub const LOGO_SIZE: (f64, f64) = (48.75, 52.931);

/// Path data using the abbreviations `m`, `c`, `l`, `h` and `f`
pub const LOGO_PATH: &str = "\
    36.75 52.931 m 35.656 52.158 35.715 52.255 34.832 51.966 c 32.812 51.306\n\
    30.875 51.669 28.578 51.861 c 27.887 51.939 27.199 51.986 26.531 51.99\n\
    c 23.148 52.013 20.277 51.021 19.734 48.251 c 18.734 47.646 17.812 46.908\n\
    16.898 46.173 c 14.949 44.634 13.48 42.755 12.48 40.49 c 11.113 37.142\n\
    12.348 33.548 12.961 30.158 c 13.105 29.365 13.258 28.607 13.34 28.314 c\n\
    13.453 27.904 13.66 27.509 13.879 27.158 c 13.934 27.15 14.207 27.572 14.27\n\
    27.755 c 14.367 28.029 14.355 28.462 14.25 28.837 c 14.023 29.681 13.805\n\
    30.369 13.785 30.712 c 13.754 31.357 13.879 31.955 14.113 32.248 c 14.199\n\
    32.353 14.391 31.814 14.34 31.615 c 14.281 31.373 14.238 30.959 14.258\n\
    30.767 c 14.309 30.123 14.402 29.431 14.52 28.826 c 14.672 28.044 14.738\n\
    27.544 14.711 27.349 c 14.691 27.209 14.625 27.068 14.371 26.63 c 14.148\n\
    26.248 14.035 25.939 14.016 25.666 c 14 25.4 14.078 24.732 14.152 24.568\n\
    c 14.262 24.314 14.59 24.044 14.879 23.978 c 15.152 23.873 15.289 23.658\n\
    15.43 23.412 c 15.773 22.759 16.039 21.962 16.301 20.763 c 16.43 20.189\n\
    16.535 19.677 16.57 19.408 c 14.453 19.404 11.742 19.404 9.273 19.404 c\n\
    8.441 19.392 6.938 19.783 5.562 19.873 c 5.363 22.025 4.414 24.529 2.797\n\
    24.673 c 1.691 24.775 0.773 24.353 0 22.611 c 0.023 22.517 l 0.48 22.9\n\
    0.961 24.068 2.703 23.986 c 4.039 23.927 4.484 21.396 4.617 19.876 c 3.805\n\
    19.818 3.109 19.564 2.75 18.939 c 2.742 18.939 l 2.742 18.939 2.742 18.939\n\
    2.746 18.935 c 2.742 18.931 2.742 18.931 2.742 18.927 c 2.75 18.927 l 3.121\n\
    18.287 3.84 18.041 4.684 17.99 c 5.246 2.056 20.227 0.001 24.32 0.001 c\n\
    39.59 0.001 44.934 10.376 45.738 14.486 c 46.113 12.736 44.93 10.505 44.648\n\
    8.857 c 47.867 12.584 47.285 16.162 46.699 19.763 c 47.188 19.181 47.852\n\
    18.822 48.75 19.021 c 48.109 19.451 47.238 19.15 46.719 20.955 c 46.492\n\
    21.732 46.293 22.318 46.102 22.81 c 45.68 24.388 45.082 25.9 44.348 27.369\n\
    c 43.727 28.966 44.137 30.001 44.074 31.369 c 45.188 27.693 45.887 26.716\n\
    47.188 26.33 c 43.914 30.275 45.035 36.38 43.184 41.83 c 44.023 41.337\n\
    44.977 41.189 45.992 41.791 c 45.012 42.072 44.027 41.33 42.617 43.404 c\n\
    41.426 45.724 39.699 47.435 37.602 48.947 c 36.48 49.677 35.234 50.169\n\
    33.98 50.626 c 35.258 50.947 36.684 52.084 36.75 52.931 c h\n\
    34.609 40.681 m 36.289 40.072 38.141 37.74 38.121 35.455 c 38.121 35.33\n\
    l 38.074 32.224 36.664 30.556 36.723 28.49 c 36.801 26.056 37.848 25.209\n\
    38.055 24.802 c 37.699 26.302 37.488 28.189 37.961 29.685 c 38.566 31.607\n\
    39.18 33.201 39.137 34.709 c 39.113 35.06 38.965 36.38 38.863 36.966 c\n\
    40.664 34.365 38.473 30.584 39.105 28.107 c 40.199 23.798 45.113 23.251\n\
    43.652 14.568 c 42.363 6.931 33.547 1.138 24.508 1.138 c 17.809 1.138 6.199\n\
    4.845 5.625 18.001 c 6.984 18.099 8.449 18.478 9.273 18.462 c 11.754 18.462\n\
    14.59 18.462 16.727 18.462 c 17.129 16.65 17.43 16.216 18.953 15.009 c\n\
    20.648 13.677 21.043 13.513 23.547 13.49 c 26.055 13.462 26.797 14.001 29.23\n\
    16.302 c 29.754 16.916 29.98 17.724 30.234 18.482 c 32.738 18.505 34.562\n\
    18.548 36.355 18.63 c 38.184 18.716 38.441 18.63 41.383 18.935 c 38.441\n\
    19.24 38.184 19.154 36.355 19.24 c 34.609 19.318 32.84 19.365 30.449 19.384\n\
    c 30.648 20.287 30.934 21.166 31.242 22.037 c 31.43 22.548 31.652 23.048\n\
    31.879 23.548 c 32.125 23.623 l 32.605 23.794 33.027 24.158 33.195 24.65\n\
    c 33.414 25.302 33.258 26.033 32.84 26.568 c 32.695 26.767 32.516 27.021\n\
    32.441 27.134 c 32.219 27.482 32.215 27.677 32.402 28.982 c 32.559 30.072\n\
    32.578 30.646 32.469 31.197 c 32.445 31.513 32.445 32.166 32.434 32.341\n\
    c 32.516 32.294 32.699 31.88 32.883 31.318 c 33.066 30.755 33.098 30.638\n\
    33.137 30.158 c 33.184 29.615 32.98 29.209 32.812 28.396 c 32.73 27.978\n\
    32.656 27.587 32.656 27.537 c 32.656 27.482 32.695 27.361 32.738 27.267\n\
    c 32.836 27.06 33.02 26.771 33.055 26.771 c 33.652 27.431 34.008 28.251\n\
    34.32 29.08 c 34.652 30.021 34.75 31.017 34.98 31.986 c 35.168 32.826 35.383\n\
    33.669 35.453 34.537 c 35.586 36.224 35.508 37.412 35.137 39.169 c 35.047\n\
    39.568 34.789 40.326 34.609 40.681 c h\n\
    28.699 32.373 m 29.344 32.38 29.98 32.302 30.59 32.126 c 31.414 31.81 31.531\n\
    31.072 31.684 30.244 c 31.766 29.712 31.766 29.334 31.668 28.712 c 31.602\n\
    27.81 31.242 27.111 30.461 26.623 c 29.277 26.404 28.016 26.193 27.016\n\
    26.974 c 26.176 28.13 25.668 29.595 25.859 31.021 c 25.984 31.607 26.258\n\
    31.912 26.816 32.095 c 27.418 32.267 28.059 32.361 28.699 32.373 c h\n\
    18.902 32.267 m 19.504 32.271 20.113 32.209 20.449 31.994 c 21.891 31.021\n\
    21.426 29.435 20.859 28.044 c 20.031 26.224 18.238 26.291 16.504 26.306\n\
    c 15.543 26.587 15.453 27.376 15.316 28.216 c 15.195 29.029 14.941 29.9\n\
    15.156 30.716 c 15.699 32.033 17.688 32.185 18.902 32.267 c h\n\
    40.852 32.041 m 40.855 28.541 41.453 26.822 42.656 24.345 c 41.949 25.693\n\
    40.938 26.459 40.562 28.072 c 39.844 31.185 40.617 31.009 40.852 32.041\n\
    c h\n\
    23.414 29.505 m 23.602 29.314 23.691 29.048 23.859 28.837 c 23.984 29.056\n\
    24.113 29.271 24.277 29.466 c 24.363 29.462 24.465 29.294 24.559 28.994\n\
    c 24.961 27.884 25.039 26.666 25.559 25.599 c 26.047 24.826 25.383 24.376\n\
    24.652 24.341 c 24.121 24.341 23.898 24.705 23.586 25.064 c 23.504 24.83\n\
    23.352 24.677 23.168 24.521 c 22.703 24.13 21.793 24.275 21.648 24.888\n\
    c 21.836 26.064 22.438 27.146 22.828 28.271 c 23.023 28.685 23.027 28.998\n\
    23.414 29.505 c h\n\
    16.586 23.568 m 16.82 23.568 17.465 23.13 17.594 22.884 c 17.688 22.72\n\
    17.891 22.08 17.906 21.923 c 17.93 21.74 17.875 21.298 17.816 21.181 c 17.773\n\
    21.095 17.742 21.084 17.691 21.138 c 17.652 21.185 17.113 22.22 16.766\n\
    22.908 c 16.496 23.455 16.469 23.568 16.586 23.568 c h\n\
    30.062 23.224 m 30.07 23.224 30.082 23.22 30.098 23.216 c 30.168 23.189\n\
    30.117 22.927 29.844 21.994 c 29.793 21.709 29.668 21.486 29.484 21.302\n\
    c 29.422 21.302 29.395 21.373 29.301 21.763 c 29.219 22.099 29.211 22.396\n\
    29.266 22.662 c 29.363 22.998 29.758 23.099 30.062 23.224 c h\n\
    28.426 21.181 m 28.449 21.185 28.473 21.173 28.5 21.15 c 28.598 21.08 28.613\n\
    20.896 28.547 20.541 c 28.469 20.08 28.449 20.029 28.332 19.982 c 28.277\n\
    19.959 28.188 19.939 28.125 19.939 c 28.012 19.962 27.984 20.052 28.012\n\
    20.189 c 28.012 20.474 28.094 20.724 28.285 21.017 c 28.355 21.126 28.391\n\
    21.177 28.426 21.181 c h\n\
    18.906 21.162 m 18.984 21.162 19.211 20.994 19.297 20.88 c 19.391 20.759\n\
    19.5 20.037 19.438 19.912 c 19.371 19.755 19.031 19.834 18.938 20.029 c\n\
    18.879 20.146 18.742 20.775 18.742 20.927 c 18.742 21.064 18.809 21.162\n\
    18.906 21.162 c h\n\
    27.609 20.97 m 27.699 20.837 27.727 20.666 27.703 20.294 c 27.688 19.955\n\
    l 27.59 19.857 l 27.531 19.802 27.43 19.74 27.371 19.709 c 27.242 19.65\n\
    27.141 19.642 27.121 19.693 c 27.102 19.759 27.137 20.181 27.18 20.322\n\
    c 27.227 20.47 27.438 20.908 27.508 20.998 c 27.539 21.084 27.578 20.978\n\
    27.609 20.97 c h\n\
    22.07 20.99 m 22.27 20.939 22.359 20.759 22.469 20.595 c 22.543 20.451\n\
    l 22.438 20.091 l 22.383 19.892 22.324 19.712 22.309 19.693 c 22.289 19.669\n\
    22.215 19.658 22.105 19.662 c 21.812 19.669 21.781 19.681 21.703 19.798\n\
    c 21.629 19.908 l 21.691 20.212 l 21.781 20.646 21.824 20.779 21.922 20.892\n\
    c 21.973 20.951 22.027 20.986 22.07 20.99 c h\n\
    20.23 20.677 m 20.395 20.513 l 20.422 20.142 l 20.434 19.939 20.441 19.751\n\
    20.43 19.728 c 20.422 19.693 20.359 19.685 20.176 19.685 c 19.938 19.685\n\
    l 19.809 19.826 19.77 19.998 19.715 20.173 c 19.59 20.705 19.59 20.947\n\
    19.719 20.978 c 19.934 20.962 20.074 20.81 20.23 20.677 c h\n\
    26.625 20.931 m 26.883 20.861 26.832 20.451 26.832 20.154 c 26.812 19.673\n\
    26.793 19.576 26.73 19.513 c 26.625 19.408 26.328 19.466 26.184 19.626\n\
    c 26.133 19.681 26.129 19.701 26.168 19.931 c 26.211 20.216 26.266 20.392\n\
    26.387 20.634 c 26.477 20.81 26.562 20.919 26.625 20.931 c h\n\
    20.75 20.912 m 20.766 20.912 20.789 20.912 20.812 20.908 c 20.977 20.896\n\
    21.129 20.787 21.266 20.587 c 21.379 20.427 l 21.387 20.162 21.379 19.88\n\
    21.332 19.634 c 21.301 19.619 21.184 19.595 21.066 19.587 c 20.863 19.568\n\
    20.844 19.572 20.773 19.634 c 20.676 19.716 20.648 19.873 20.625 20.388\n\
    c 20.609 20.81 20.617 20.904 20.75 20.912 c h\n\
    23.254 20.822 m 23.43 20.783 23.543 20.689 23.594 20.533 c 23.633 20.4\n\
    23.656 19.654 23.617 19.603 c 23.605 19.58 23.52 19.552 23.426 19.541 c\n\
    23.066 19.494 22.754 19.529 22.723 19.615 c 22.684 19.712 22.949 20.673\n\
    23.047 20.791 c 23.09 20.884 23.188 20.814 23.254 20.822 c h\n\
    25.566 20.814 m 25.645 20.822 25.73 20.748 25.812 20.587 c 25.875 20.455\n\
    25.887 20.408 25.887 20.111 c 25.887 19.873 25.871 19.767 25.848 19.748\n\
    c 25.824 19.728 25.734 19.697 25.641 19.673 c 25.477 19.63 25.438 19.626\n\
    25.387 19.642 c 25.141 19.689 l 25.156 19.837 l 25.176 20.029 25.301 20.459\n\
    25.391 20.642 c 25.445 20.751 25.504 20.806 25.566 20.814 c h\n\
    24.488 20.81 m 24.539 20.814 24.566 20.802 24.598 20.767 c 24.676 20.673\n\
    24.773 20.4 24.84 20.107 c 24.922 19.697 24.922 19.697 24.742 19.642 c\n\
    24.664 19.619 24.5 19.595 24.379 19.587 c 23.992 19.568 23.961 19.591 24.008\n\
    19.935 c 24.047 20.24 24.195 20.724 24.262 20.759 c 24.332 20.798 24.414\n\
    20.794 24.488 20.81 c h\n\
    4.648 19.259 m 4.648 19.259 4.656 19.259 4.656 19.259 c 4.664 19.044 4.664\n\
    18.826 4.668 18.611 c 4.125 18.65 3.723 18.783 3.723 18.935 c 3.723 19.087\n\
    4.109 19.216 4.648 19.259 c h\n\
    5.602 19.24 m 6.043 19.185 6.348 19.068 6.344 18.935 c 6.344 18.802 6.047\n\
    18.685 5.609 18.63 c 5.605 18.834 5.605 19.037 5.602 19.24 c h\n\
    26.25 18.65 m 26.289 18.654 26.305 18.658 26.363 18.654 c 26.59 18.63 26.625\n\
    18.615 26.625 18.537 c 26.625 18.435 26.449 18.13 26.332 18.025 c 26.277\n\
    17.974 26.199 17.927 26.176 17.927 c 26.043 17.927 25.965 18.209 26.027\n\
    18.462 c 26.062 18.603 26.133 18.646 26.25 18.65 c h\n\
    25.418 18.56 m 25.52 18.568 25.621 18.541 25.719 18.529 c 25.691 18.24\n\
    25.559 18.001 25.32 17.845 c 25.258 17.845 25.23 17.959 25.23 18.205 c 25.23\n\
    18.501 25.246 18.556 25.418 18.56 c h\n\
    24.504 18.455 m 24.719 18.455 24.906 18.443 24.914 18.431 c 24.953 18.392\n\
    24.84 18.111 24.672 17.822 c 24.527 17.564 24.504 17.544 24.414 17.537\n\
    c 24.066 17.576 24.074 17.99 24.02 18.271 c 24.02 18.439 24.059 18.455 24.504\n\
    18.455 c h\n\
    21.188 18.419 m 21.43 18.416 21.523 18.38 21.523 18.287 c 21.523 18.169\n\
    21.434 17.931 21.383 17.9 c 21.305 17.857 21.297 17.861 21.145 18.021 c\n\
    20.898 18.294 20.871 18.345 21.188 18.419 c h\n\
    22.359 18.408 m 22.363 18.404 22.41 18.318 22.461 18.22 c 22.562 18.017\n\
    22.57 17.931 22.496 17.861 c 22.324 17.763 22.285 17.818 22.129 17.919\n\
    c 21.945 18.091 21.801 18.326 21.848 18.373 c 22.012 18.431 22.191 18.412\n\
    22.359 18.408 c h\n\
    22.824 18.404 m 23.262 18.396 l 23.43 18.396 23.578 18.388 23.586 18.373\n\
    c 23.613 18.349 23.52 17.779 23.469 17.654 c 23.406 17.509 23.199 17.509\n\
    23.09 17.677 c 22.938 17.923 22.836 18.126 22.832 18.267 c h f\n";
