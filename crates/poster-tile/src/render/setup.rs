use std::io::{self, Write};

use crate::constants::{CLIP_MARGIN, LABEL_SIZE};
use crate::layout::{CoverFit, LayoutPlan};
use crate::options::RunConfig;

use super::writer::PsWriter;

/// Write the `%%BeginSetup` ... `%%EndSetup` section with the numbers of
/// this run.
pub fn write_setup<W: Write>(
    w: &mut PsWriter<W>,
    config: &RunConfig,
    plan: &LayoutPlan,
    fit: &CoverFit,
) -> io::Result<()> {
    let (area_width, area_height) = plan.area_size();

    w.write_meta("BeginSetup")?;
    w.write_comment("Try to inform the printer about the desired media size:")?;
    w.write_line("/setpagedevice where\t% level-2 page commands available...")?;
    w.write_line("{\tpop\t\t% ignore where found")?;
    w.write_line(&format!(
        "\t3 dict dup /PageSize [ {} {} ] put",
        config.media.width() as i64,
        config.media.height() as i64
    ))?;
    w.write_line("\tdup /Duplex false put")?;
    if config.manual_feed {
        w.write_line("\tdup /ManualFeed true put")?;
    }
    w.write_line("\tsetpagedevice")?;
    w.write_line("} if")?;

    w.write_line(&format!("/sfactor {:.10} def", plan.scale))?;
    w.def_number("leftmargin", config.cut_margin.x)?;
    w.def_number("botmargin", config.cut_margin.y)?;
    w.def_number("pagewidth", plan.drawable_width)?;
    w.def_number("pageheight", plan.drawable_height)?;
    w.def_number("imagexl", plan.image.left)?;
    w.def_number("imageyb", plan.image.bottom)?;
    w.def_number("posterxl", plan.poster.left)?;
    w.def_number("posteryb", plan.poster.bottom)?;
    w.def_bool("do_turn", plan.rotate)?;
    w.def_number("areawidth", area_width)?;
    w.def_number("areaheight", area_height)?;
    w.write_line(&format!("/coverscale {:.10} def", fit.scale))?;
    w.def_number("coverxl", fit.left)?;
    w.def_number("coveryb", fit.bottom)?;
    w.write_line("/strg 10 string def")?;
    w.def_number("clipmargin", CLIP_MARGIN)?;
    w.def_number("labelsize", LABEL_SIZE)?;
    w.write_line("/tiledict 250 dict def")?;
    w.write_line("tiledict begin")?;
    w.write_comment("delay users showpage until cropmark is printed.")?;
    w.write_line("/showpage {} def")?;
    w.write_line("/setpagedevice { pop } def")?;
    w.write_line("end")?;
    w.write_line("/Helvetica findfont labelsize scalefont setfont")?;
    w.def_string("patterntitle", &config.title)?;
    w.def_string("patternhandle", &config.handle)?;
    w.write_meta("EndSetup")
}
