use std::io::{self, Write};

use crate::constants::CREATOR;
use crate::dsc::ScanResult;
use crate::layout::LayoutPlan;
use crate::options::RunConfig;

use super::writer::PsWriter;

/// Write the structural header, up to and including `%%EndComments`.
///
/// The declared page count comes from the same plan that drives the page
/// loop, so the two cannot disagree.
pub fn write_header<W: Write>(
    w: &mut PsWriter<W>,
    config: &RunConfig,
    plan: &LayoutPlan,
    scan: &ScanResult,
    source_name: &str,
) -> io::Result<()> {
    let media_width = config.media.width() as i64;
    let media_height = config.media.height() as i64;

    w.write_magic()?;
    w.write_meta_field("Creator", CREATOR)?;
    if !config.title.is_empty() {
        w.write_meta_field("Title", config.title.replace(|c: char| c.is_control(), " "))?;
    }
    for line in &scan.passthrough {
        w.write_line(line)?;
    }
    w.write_meta_field("Pages", plan.output_pages())?;
    if config.orientation_comment {
        w.write_meta_field("Orientation", plan.orientation().dsc_name())?;
    }
    w.write_meta_field(
        "DocumentMedia",
        format!(
            "{} {} {} 0 white ()",
            config.media_name, media_width, media_height
        ),
    )?;
    w.write_meta_field("BoundingBox", format!("0 0 {} {}", media_width, media_height))?;
    w.write_meta("EndComments")?;
    w.blank_line()?;
    w.write_comment(&format!(
        "Print poster {} in {}x{} tiles with {:.3} magnification",
        source_name, plan.rows, plan.cols, plan.scale
    ))
}
