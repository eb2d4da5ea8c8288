use std::io::Write;

use log::info;

use crate::layout::{CoverCell, LayoutPlan, SheetEdges, TileCell};
use crate::relay::{RelayOutcome, relay};
use crate::source::ContentSource;
use crate::types::Result;

use super::writer::{PsWriter, ps_number};

/// Copy the content between `%%BeginDocument` and `%%EndDocument`.
///
/// If the content cannot be opened again, the output is closed as well as
/// possible before the error is returned.
pub fn embed<W: Write>(w: &mut PsWriter<W>, source: &dyn ContentSource) -> Result<RelayOutcome> {
    let reader = match source.open() {
        Ok(reader) => reader,
        Err(e) => {
            w.write_line("/systemdict /showpage get exec")?;
            w.write_meta("EOF")?;
            w.flush()?;
            return Err(e.into());
        }
    };

    w.write_meta_field(
        "BeginDocument",
        source.name().replace(|c: char| c.is_control(), " "),
    )?;
    let outcome = relay(reader, w.inner_mut())?;
    w.blank_line()?;
    w.write_meta("EndDocument")?;
    Ok(outcome)
}

fn page_comment<W: Write>(w: &mut PsWriter<W>, ordinal: usize) -> Result<()> {
    info!("print page {}", ordinal);
    w.blank_line()?;
    w.write_meta_field("Page", format!("{} {}", ordinal, ordinal))?;
    Ok(())
}

fn edges_array(edges: &SheetEdges) -> String {
    format!(
        "[{} {} {} {}]",
        edges.left, edges.bottom, edges.right, edges.top
    )
}

/// Write the cover sheet, the first page of the output.
pub fn write_cover<W: Write>(
    w: &mut PsWriter<W>,
    source: &dyn ContentSource,
    cells: &[CoverCell],
) -> Result<RelayOutcome> {
    page_comment(w, 1)?;
    w.write_line("coverprolog")?;
    let outcome = embed(w, source)?;
    w.write_line("coverepilog")?;

    for cell in cells {
        let bounds = &cell.bounds;
        w.write_line(&format!(
            "{} {} {} {} {} {} {} covergrid",
            ps_number(bounds.left),
            ps_number(bounds.bottom),
            ps_number(bounds.width()),
            ps_number(bounds.height()),
            cell.label.page,
            cell.label.row,
            cell.label.col
        ))?;
    }

    w.write_line("coverfinish")?;
    Ok(outcome)
}

/// Write one tile page; `ordinal` is its position in the output.
pub fn write_tile<W: Write>(
    w: &mut PsWriter<W>,
    source: &dyn ContentSource,
    plan: &LayoutPlan,
    cell: TileCell,
    ordinal: usize,
) -> Result<RelayOutcome> {
    let label = plan.sheet_label(cell);
    let edges = plan.edges(cell);

    page_comment(w, ordinal)?;
    w.write_line(&format!("{} {} tileprolog", cell.row, cell.col))?;
    let outcome = embed(w, source)?;
    w.write_line(&format!(
        "{} {} {} {} tileepilog",
        label.page,
        label.row,
        label.col,
        edges_array(&edges)
    ))?;
    Ok(outcome)
}

/// Close the document; the end-of-transmission byte goes last, once.
pub fn write_trailer<W: Write>(w: &mut PsWriter<W>, deferred_eot: bool) -> Result<()> {
    w.blank_line()?;
    w.write_meta("Trailer")?;
    w.write_meta("EOF")?;
    if deferred_eot {
        w.write_bytes(&[crate::constants::EOT])?;
    }
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;
    use std::io::{self, BufRead};

    struct Vanished;

    impl ContentSource for Vanished {
        fn name(&self) -> &str {
            "vanished.ps"
        }

        fn open(&self) -> io::Result<Box<dyn BufRead + '_>> {
            Err(io::Error::new(io::ErrorKind::NotFound, "gone"))
        }
    }

    #[test]
    fn test_embed_wraps_content() {
        let source = MemorySource::new("in.ps", "%!PS\n0 0 moveto\n");
        let mut w = PsWriter::from(Vec::new());
        embed(&mut w, &source).unwrap();
        let text = String::from_utf8(w.into_inner()).unwrap();
        assert_eq!(
            text,
            "%%BeginDocument: in.ps\n0 0 moveto\n\n%%EndDocument\n"
        );
    }

    #[test]
    fn test_embed_keeps_document_name_on_one_line() {
        let source = MemorySource::new("in\n%%EOF\r.ps", "0 0 moveto\n");
        let mut w = PsWriter::from(Vec::new());
        embed(&mut w, &source).unwrap();
        let text = String::from_utf8(w.into_inner()).unwrap();
        assert!(text.starts_with("%%BeginDocument: in %%EOF .ps\n0 0 moveto\n"));
    }

    #[test]
    fn test_embed_closes_output_when_source_vanishes() {
        let mut w = PsWriter::from(Vec::new());
        assert!(embed(&mut w, &Vanished).is_err());
        let text = String::from_utf8(w.into_inner()).unwrap();
        assert_eq!(text, "/systemdict /showpage get exec\n%%EOF\n");
    }

    #[test]
    fn test_edges_array() {
        let edges = SheetEdges {
            left: true,
            bottom: false,
            right: true,
            top: false,
        };
        assert_eq!(edges_array(&edges), "[true false true false]");
    }
}
