//! Shared constants for poster tiling
//!
//! This module centralizes the defaults and magic numbers used by the
//! planner and the PostScript composer.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f64 = 72.0 / 25.4; // ≈ 2.83465

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f64) -> f64 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Output Header
// =============================================================================

/// Value of the `%%Creator` comment
pub const CREATOR: &str = concat!("poster-tile ", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Defaults
// =============================================================================

/// Media printed on when none is given
pub const DEFAULT_MEDIA: &str = "A4";

/// Input image size when the input declares no bounding box
pub const DEFAULT_IMAGE: &str = "A4";

/// Cut margin around every sheet
pub const DEFAULT_CUT_MARGIN: &str = "5%";

/// Extra white margin around the poster
pub const DEFAULT_WHITE_MARGIN: &str = "0";

/// Language of the sheet labels
pub const DEFAULT_LANGUAGE: &str = "en";

// =============================================================================
// Planner Limits
// =============================================================================

/// More sheets than this is considered a mistake
pub const DEFAULT_MAX_SHEETS: usize = 400;

/// Accepted range for a user-given scale factor
pub const MIN_SCALE: f64 = 0.01;
pub const MAX_SCALE: f64 = 1.0e6;

/// Sheet counts for a requested poster size are computed against 95% of the
/// poster, so a few points of overflow do not cost an extra row of slivers.
pub const POSTER_FILL_FACTOR: f64 = 0.95;

/// Media must be larger than this in both directions (points)
pub const MIN_MEDIA_SIZE: f64 = 10.0;

// =============================================================================
// Input Scanning
// =============================================================================

/// Structural comment lines are classified on at most this many bytes
pub const MAX_DSC_LINE: usize = 1024;

/// End-of-transmission byte some spoolers append to PostScript jobs
pub const EOT: u8 = 0x04;

// =============================================================================
// Sheet Decorations
// =============================================================================

/// Distance the clip path and crop ticks extend past the drawable area (points)
pub const CLIP_MARGIN: f64 = 6.0;

/// Font size of the page labels (points)
pub const LABEL_SIZE: f64 = 9.0;

/// Height reserved for the title block at the top of the cover (points)
pub const COVER_HEADER_HEIGHT: f64 = 100.0;
