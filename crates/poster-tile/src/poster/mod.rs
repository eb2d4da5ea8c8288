//! Poster tiling - splitting one page over many sheets
//!
//! This module orchestrates a poster job:
//! 1. Scan the input's structural comments
//! 2. Settle the input image size and plan the tiling
//! 3. Write the header, prolog and setup
//! 4. Write the cover sheet and every tile, embedding the input each time

mod io;

pub use io::{load_source, save_output, tile_poster};

use std::io::Write;

use log::{debug, info};

use crate::constants::DEFAULT_IMAGE;
use crate::dsc::{ScanResult, scan};
use crate::layout::{LayoutPlan, cover_cells, cover_fit, plan};
use crate::options::RunConfig;
use crate::render::{
    PsWriter, write_cover, write_header, write_prolog, write_setup, write_tile, write_trailer,
};
use crate::source::ContentSource;
use crate::types::*;
use crate::units::parse_box;

/// Input image box: the explicit override, else the declared bounding box,
/// else the default image size.
pub fn resolve_image(config: &RunConfig, scan: &ScanResult) -> Result<PageBox> {
    let image = match (config.image, scan.bounding_box()) {
        (Some(image), _) => image,
        (None, Some(bounding_box)) => bounding_box,
        (None, None) => {
            info!("Using default input image of {}", DEFAULT_IMAGE);
            parse_box(DEFAULT_IMAGE)?
        }
    };

    debug!(
        "Input image is: [{},{},{},{}]",
        image.left, image.bottom, image.right, image.top
    );

    if image.width() <= 0.0 || image.height() <= 0.0 {
        return Err(TileError::InvalidImage {
            width: image.width(),
            height: image.height(),
        });
    }
    Ok(image)
}

/// Plan the tiling for a scanned input
pub fn plan_poster(config: &RunConfig, scan: &ScanResult) -> Result<LayoutPlan> {
    let image = resolve_image(config, scan)?;
    plan(
        &image,
        &config.media,
        &config.cut_margin,
        &config.white_margin,
        &config.request,
        config.max_sheets,
    )
}

/// Scan the source once to plan the poster
pub fn scan_and_plan(
    source: &dyn ContentSource,
    config: &RunConfig,
) -> Result<(ScanResult, LayoutPlan)> {
    let scanned = scan(source.open()?)?;
    let plan = plan_poster(config, &scanned)?;
    Ok((scanned, plan))
}

/// Write the complete poster document for an already computed plan.
pub fn write_poster<W: Write>(
    source: &dyn ContentSource,
    config: &RunConfig,
    plan: &LayoutPlan,
    scanned: &ScanResult,
    out: W,
) -> Result<()> {
    let mut w = PsWriter::from(out);
    let fit = cover_fit(plan, &config.cut_margin);

    write_header(&mut w, config, plan, scanned, source.name())?;
    write_prolog(&mut w, config)?;
    write_setup(&mut w, config, plan, &fit)?;

    let mut deferred_eot = write_cover(&mut w, source, &cover_cells(plan, &fit))?.deferred_eot;
    for (index, cell) in plan.cells().enumerate() {
        let outcome = write_tile(&mut w, source, plan, cell, index + 2)?;
        deferred_eot |= outcome.deferred_eot;
    }

    write_trailer(&mut w, deferred_eot)
}

/// Scan, plan and write a poster; nothing is written if planning fails.
pub fn make_poster<W: Write>(
    source: &dyn ContentSource,
    config: &RunConfig,
    out: W,
) -> Result<LayoutPlan> {
    let (scanned, plan) = scan_and_plan(source, config)?;
    write_poster(source, config, &plan, &scanned, out)?;
    Ok(plan)
}
