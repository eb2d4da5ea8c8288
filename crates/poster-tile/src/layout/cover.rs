//! Cover sheet geometry
//!
//! The cover shows the whole area covered by the tiles, upright as the
//! assembled poster, scaled into the drawable area below the title block.

use crate::constants::COVER_HEADER_HEIGHT;
use crate::types::Margin;

use super::{CoverCell, CoverFit, LayoutPlan};

/// Fit the poster area below the title block of the cover.
pub fn cover_fit(plan: &LayoutPlan, cut_margin: &Margin) -> CoverFit {
    let (area_width, area_height) = plan.area_size();
    let room_width = plan.drawable_width;
    let room_height = (plan.drawable_height - COVER_HEADER_HEIGHT).max(plan.drawable_height / 2.0);

    let scale = (room_width / area_width).min(room_height / area_height);

    CoverFit {
        scale,
        left: cut_margin.x + (room_width - area_width * scale) / 2.0,
        bottom: cut_margin.y + (room_height - area_height * scale) / 2.0,
    }
}

/// Grid cells for the cover, in output order
pub fn cover_cells(plan: &LayoutPlan, fit: &CoverFit) -> Vec<CoverCell> {
    let (cell_width, cell_height) = plan.cell_size();

    plan.cells()
        .map(|cell| CoverCell {
            cell,
            bounds: fit.map(
                (cell.col - 1) as f64 * cell_width,
                (cell.row - 1) as f64 * cell_height,
                cell_width,
                cell_height,
            ),
            label: plan.sheet_label(cell),
        })
        .collect()
}
