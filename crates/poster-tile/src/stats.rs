use crate::constants::pt_to_mm;
use crate::layout::LayoutPlan;
use crate::types::*;

/// Calculate statistics for a poster plan
pub fn calculate_statistics(plan: &LayoutPlan) -> PosterStatistics {
    PosterStatistics {
        rows: plan.rows,
        cols: plan.cols,
        sheets: plan.sheets(),
        output_pages: plan.output_pages(),
        scale: plan.scale,
        orientation: plan.orientation(),
        poster_width_mm: pt_to_mm(plan.poster.width()),
        poster_height_mm: pt_to_mm(plan.poster.height()),
    }
}
