//! Layout data types for poster tiling
//!
//! Two frames are in use. The poster frame is the assembled poster: rows
//! run along its y axis and columns along its x axis, row 1 and column 1 in
//! the lower left corner. The sheet frame is the poster as seen on a sheet
//! held upright, which differs from the poster frame when the sheets carry
//! the poster turned by a quarter.

use crate::types::{Orientation, PageBox};

/// The tiling decision for one run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutPlan {
    /// Sheets along the poster's y axis
    pub rows: usize,
    /// Sheets along the poster's x axis
    pub cols: usize,
    /// Sheets carry the poster turned by 90 degrees
    pub rotate: bool,
    /// Linear magnification of the input image
    pub scale: f64,
    /// Input image box, in input coordinates
    pub image: PageBox,
    /// Scaled image, centered on the area covered by all sheets
    pub poster: PageBox,
    /// Printable part of a sheet, as fed
    pub drawable_width: f64,
    pub drawable_height: f64,
}

impl LayoutPlan {
    pub fn sheets(&self) -> usize {
        self.rows * self.cols
    }

    /// Cover sheet plus one page per tile
    pub fn output_pages(&self) -> usize {
        1 + self.sheets()
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_rotate(self.rotate)
    }

    /// Size of one sheet's drawable area in the poster frame
    pub fn cell_size(&self) -> (f64, f64) {
        if self.rotate {
            (self.drawable_height, self.drawable_width)
        } else {
            (self.drawable_width, self.drawable_height)
        }
    }

    /// Area covered by all sheets together, in the poster frame
    pub fn area_size(&self) -> (f64, f64) {
        let (cell_width, cell_height) = self.cell_size();
        (
            self.cols as f64 * cell_width,
            self.rows as f64 * cell_height,
        )
    }
}

/// One tile, by its 1-based position in the poster frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCell {
    pub row: usize,
    pub col: usize,
}

impl TileCell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// What gets printed on a tile to identify it, in the sheet frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLabel {
    pub page: usize,
    pub row: usize,
    pub col: usize,
    pub rows: usize,
    pub cols: usize,
}

/// Edges of a sheet that border a neighbouring sheet, in the sheet frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SheetEdges {
    pub left: bool,
    pub bottom: bool,
    pub right: bool,
    pub top: bool,
}

/// Placement of the poster preview on the cover sheet, in sheet points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverFit {
    pub scale: f64,
    pub left: f64,
    pub bottom: f64,
}

impl CoverFit {
    /// Map a rectangle in the poster frame onto the cover
    pub fn map(&self, x: f64, y: f64, width: f64, height: f64) -> PageBox {
        let left = self.left + x * self.scale;
        let bottom = self.bottom + y * self.scale;
        PageBox::new(
            left,
            bottom,
            left + width * self.scale,
            bottom + height * self.scale,
        )
    }
}

/// One grid cell drawn on the cover
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverCell {
    pub cell: TileCell,
    pub bounds: PageBox,
    pub label: SheetLabel,
}
