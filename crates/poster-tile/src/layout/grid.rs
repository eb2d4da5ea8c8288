//! Tile order, page numbers and neighbours

use super::{LayoutPlan, SheetEdges, SheetLabel, TileCell};

// =============================================================================
// Tile Order
// =============================================================================

/// All tiles in output order: row by row, columns left to right.
pub fn cells(rows: usize, cols: usize) -> impl Iterator<Item = TileCell> {
    (1..=rows).flat_map(move |row| (1..=cols).map(move |col| TileCell::new(row, col)))
}

// =============================================================================
// Page Numbers
// =============================================================================

/// Page number of a sheet, from its position and the totals in the sheet
/// frame.
///
/// Upright sheets are numbered row by row. Turned sheets are numbered
/// column by column, which in the sheet frame is again the feed order.
pub fn page_number(rows: usize, cols: usize, rotate: bool, row: usize, col: usize) -> usize {
    if rotate {
        (col - 1) * rows + row
    } else {
        (row - 1) * cols + col
    }
}

impl LayoutPlan {
    pub fn cells(&self) -> impl Iterator<Item = TileCell> {
        cells(self.rows, self.cols)
    }

    /// Label of a tile in the sheet frame
    pub fn sheet_label(&self, cell: TileCell) -> SheetLabel {
        let (row, col, rows, cols) = if self.rotate {
            (cell.col, cell.row, self.cols, self.rows)
        } else {
            (cell.row, cell.col, self.rows, self.cols)
        };

        SheetLabel {
            page: page_number(rows, cols, self.rotate, row, col),
            row,
            col,
            rows,
            cols,
        }
    }

    /// Edges of a tile shared with another tile, in the sheet frame.
    ///
    /// On turned sheets the poster's y axis points to the sheet's left, so
    /// the next row is on the left and the next column on top.
    pub fn edges(&self, cell: TileCell) -> SheetEdges {
        let has_prev_row = cell.row > 1;
        let has_next_row = cell.row < self.rows;
        let has_prev_col = cell.col > 1;
        let has_next_col = cell.col < self.cols;

        if self.rotate {
            SheetEdges {
                left: has_next_row,
                bottom: has_prev_col,
                right: has_prev_row,
                top: has_next_col,
            }
        } else {
            SheetEdges {
                left: has_prev_col,
                bottom: has_prev_row,
                right: has_next_col,
                top: has_next_row,
            }
        }
    }
}
