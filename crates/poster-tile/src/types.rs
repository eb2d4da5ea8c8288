use thiserror::Error;

#[derive(Error, Debug)]
pub enum TileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("I don't understand the box specification `{spec}` (expected [multiplier][offset]unit)")]
    InvalidBox { spec: String },
    #[error("Unknown unit in box specification `{spec}`; units are: {available}")]
    UnknownUnit { spec: String, available: String },
    #[error("Unit `{unit}` in box specification `{spec}` is not unique (matches {candidates}), give more chars")]
    AmbiguousUnit {
        spec: String,
        unit: String,
        candidates: String,
    },
    #[error("Box specification `{spec}` leads to negative values")]
    NegativeBox { spec: String },
    #[error("Illegal margin specification `{spec}`")]
    InvalidMargin { spec: String },
    #[error("Margin value `{spec}` out of range ({value} pt, must be below {limit} pt)")]
    MarginOutOfRange { spec: String, value: f64, limit: f64 },
    #[error("Illegal scale value {0}")]
    InvalidScale(f64),
    #[error("Input image should have positive size, got {width} x {height} pt")]
    InvalidImage { width: f64, height: f64 },
    #[error("Poster should have positive size, got {width} x {height} pt")]
    InvalidPoster { width: f64, height: f64 },
    #[error("Invalid media: {0}")]
    InvalidMedia(String),
    #[error("{cols}x{rows} sheets exceeds the limit of {limit}")]
    TooManySheets {
        cols: usize,
        rows: usize,
        limit: usize,
    },
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, TileError>;

/// Orientation of the output sheets relative to the poster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Sheets are laid out as fed, no quarter turn
    #[default]
    Portrait,
    /// Every sheet carries its part of the poster turned by 90 degrees
    Landscape,
}

impl Orientation {
    pub fn from_rotate(rotate: bool) -> Self {
        if rotate {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// Value for the `%%Orientation` header comment
    pub fn dsc_name(self) -> &'static str {
        match self {
            Orientation::Portrait => "Portrait",
            Orientation::Landscape => "Landscape",
        }
    }
}

/// A rectangle in PostScript points, given by its lower-left and
/// upper-right corners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageBox {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl PageBox {
    pub fn new(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    /// A box of the given size anchored at the origin
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Wider than tall
    pub fn is_landscape(&self) -> bool {
        self.height() < self.width()
    }

    /// Same size, axes exchanged, anchored at the swapped origin
    pub fn swapped(&self) -> Self {
        Self::new(self.bottom, self.left, self.top, self.right)
    }
}

/// Horizontal and vertical margin in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margin {
    pub x: f64,
    pub y: f64,
}

impl Margin {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

/// What the user asked the poster to be: a linear scale of the input image,
/// or a target poster size the image is fitted into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeRequest {
    Scale(f64),
    Poster(PageBox),
}

/// Strings printed on the cover sheet besides the localized labels
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Branding {
    /// Large name at the top of the cover
    pub name: String,
    /// Site shown in the bottom-right corner of every sheet
    pub site: String,
    /// Printed in front of the handle on the cover
    pub handle_prefix: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            name: "freesewing".to_string(),
            site: "freesewing.org".to_string(),
            handle_prefix: "freesewing.org/drafts/".to_string(),
        }
    }
}

/// Statistics about the poster layout
#[derive(Debug, Clone, PartialEq)]
pub struct PosterStatistics {
    /// Sheets along the poster's vertical axis
    pub rows: usize,
    /// Sheets along the poster's horizontal axis
    pub cols: usize,
    /// Tile sheets, without the cover
    pub sheets: usize,
    /// Pages in the output document, cover included
    pub output_pages: usize,
    /// Linear magnification of the input image
    pub scale: f64,
    pub orientation: Orientation,
    /// Size of the printed image on the assembled poster
    pub poster_width_mm: f64,
    pub poster_height_mm: f64,
}
