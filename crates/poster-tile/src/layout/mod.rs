//! Layout calculation for poster tiling
//!
//! This module handles all the geometry of a poster job:
//! - Planning rows, columns, rotation and scale
//! - Tile ordering, page numbers and neighbouring edges
//! - Fitting the poster preview onto the cover sheet

mod cover;
mod grid;
mod planner;
mod types;

pub use cover::*;
pub use grid::*;
pub use planner::*;
pub use types::*;
