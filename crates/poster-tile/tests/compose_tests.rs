use poster_tile::*;
use std::io::{self, BufRead};

const DRAWING: &str = "%!PS-Adobe-3.0 EPSF-3.0\n\
%%BoundingBox: 0 0 595 842\n\
%%DocumentNeededResources: font Helvetica\n\
%%+ font Courier\n\
%%EndComments\n\
newpath 0 0 moveto 595 842 lineto stroke\n\
% a comment inside the drawing\n\
showpage\n";

fn config_with(options: TileOptions) -> RunConfig {
    options.resolve(&NoTranslation).unwrap()
}

fn scaled(scale: f64) -> RunConfig {
    config_with(TileOptions {
        scale: Some(scale),
        cut_margin: "0".to_string(),
        ..Default::default()
    })
}

fn compose(source: &dyn ContentSource, config: &RunConfig) -> (LayoutPlan, String) {
    let mut out = Vec::new();
    let plan = make_poster(source, config, &mut out).unwrap();
    (plan, String::from_utf8(out).unwrap())
}

fn declared_pages(output: &str) -> usize {
    output
        .lines()
        .find_map(|line| line.strip_prefix("%%Pages: "))
        .and_then(|count| count.parse().ok())
        .unwrap()
}

fn page_sections(output: &str) -> usize {
    output.lines().filter(|line| line.starts_with("%%Page: ")).count()
}

#[test]
fn test_header() {
    let source = MemorySource::new("drawing.ps", DRAWING);
    let config = config_with(TileOptions {
        scale: Some(2.0),
        title: "Aaron".to_string(),
        ..Default::default()
    });
    let (plan, output) = compose(&source, &config);

    let header: Vec<&str> = output.lines().take_while(|l| *l != "%%EndComments").collect();
    assert_eq!(header[0], "%!PS-Adobe-3.0");
    assert!(header[1].starts_with("%%Creator: poster-tile"));
    assert_eq!(header[2], "%%Title: Aaron");
    assert_eq!(header[3], "%%DocumentNeededResources: font Helvetica");
    assert_eq!(header[4], "%%+ font Courier");
    assert_eq!(header[5], format!("%%Pages: {}", plan.output_pages()));
    assert_eq!(header[6], "%%DocumentMedia: A4 595 842 0 white ()");
    assert_eq!(header[7], "%%BoundingBox: 0 0 595 842");
    assert!(!output.contains("%%Orientation"));
}

#[test]
fn test_single_document_media() {
    let drawing = "%!PS-Adobe-3.0\n\
%%BoundingBox: 0 0 612 792\n\
%%DocumentMedia: Letter 612 792 0 () ()\n\
%%EndComments\n\
showpage\n";
    let source = MemorySource::new("letter.ps", drawing);
    let (_, output) = compose(&source, &scaled(1.0));

    let media: Vec<&str> = output
        .lines()
        .filter(|line| line.starts_with("%%DocumentMedia"))
        .collect();
    assert_eq!(media, vec!["%%DocumentMedia: A4 595 842 0 white ()"]);
}

#[test]
fn test_orientation_comment_on_request() {
    let source = MemorySource::new("drawing.ps", DRAWING);
    let config = config_with(TileOptions {
        poster: Some("A2".to_string()),
        image: Some("A4".to_string()),
        orientation_comment: true,
        ..Default::default()
    });
    let (plan, output) = compose(&source, &config);
    assert!(output.contains(&format!(
        "%%Orientation: {}\n",
        plan.orientation().dsc_name()
    )));
}

#[test]
fn test_declared_pages_match_emitted_pages() {
    let source = MemorySource::new("drawing.ps", DRAWING);
    for scale in [0.5, 1.0, 2.0, 3.3] {
        let (plan, output) = compose(&source, &scaled(scale));
        assert_eq!(declared_pages(&output), 1 + plan.rows * plan.cols);
        assert_eq!(page_sections(&output), declared_pages(&output));
    }
}

#[test]
fn test_pages_in_order() {
    let source = MemorySource::new("drawing.ps", DRAWING);
    let (plan, output) = compose(&source, &scaled(2.0));
    assert_eq!((plan.rows, plan.cols), (2, 2));

    let ordinals: Vec<String> = output
        .lines()
        .filter_map(|line| line.strip_prefix("%%Page: "))
        .map(str::to_string)
        .collect();
    assert_eq!(ordinals, vec!["1 1", "2 2", "3 3", "4 4", "5 5"]);

    let tiles: Vec<&str> = output
        .lines()
        .filter(|line| line.ends_with(" tileprolog"))
        .collect();
    assert_eq!(
        tiles,
        vec!["1 1 tileprolog", "1 2 tileprolog", "2 1 tileprolog", "2 2 tileprolog"]
    );

    let epilogs: Vec<&str> = output
        .lines()
        .filter(|line| !line.starts_with('%') && line.ends_with(" tileepilog"))
        .collect();
    assert_eq!(
        epilogs,
        vec![
            "1 1 1 [false false true true] tileepilog",
            "2 1 2 [true false false true] tileepilog",
            "3 2 1 [false true true false] tileepilog",
            "4 2 2 [true true false false] tileepilog",
        ]
    );
}

#[test]
fn test_cover_grid_labels() {
    let source = MemorySource::new("drawing.ps", DRAWING);
    let (plan, output) = compose(&source, &scaled(2.0));

    let grid: Vec<&str> = output
        .lines()
        .filter(|line| line.ends_with(" covergrid"))
        .collect();
    assert_eq!(grid.len(), plan.sheets());
    assert!(grid[3].ends_with(" 4 2 2 covergrid"));

    let cover = output.find("%%Page: 1 1").unwrap();
    let first_tile = output.find("%%Page: 2 2").unwrap();
    let finish = output.find("\ncoverfinish\n").unwrap();
    assert!(cover < finish && finish < first_tile);
}

#[test]
fn test_embeddings_are_balanced() {
    let source = MemorySource::new("drawing.ps", DRAWING);
    let (plan, output) = compose(&source, &scaled(2.0));

    let begins = output.matches("%%BeginDocument: drawing.ps\n").count();
    let ends = output.matches("%%EndDocument\n").count();
    assert_eq!(begins, plan.output_pages());
    assert_eq!(begins, ends);

    // content comments stay out of the embedded copies
    assert!(!output.contains("a comment inside the drawing"));
    assert_eq!(
        output.matches("newpath 0 0 moveto 595 842 lineto stroke\n").count(),
        plan.output_pages()
    );
}

#[test]
fn test_document_ends_once() {
    let source = MemorySource::new("drawing.ps", DRAWING);
    let (_, output) = compose(&source, &scaled(2.0));
    assert!(output.ends_with("%%Trailer\n%%EOF\n"));
    assert_eq!(output.matches("%%EOF").count(), 1);
}

#[test]
fn test_trailing_eot_appears_once_at_the_end() {
    let content = format!("{}\x04", DRAWING);
    let source = MemorySource::new("spooled.ps", content);
    let (plan, output) = compose(&source, &scaled(2.0));

    assert!(plan.sheets() > 1);
    assert_eq!(output.matches('\x04').count(), 1);
    assert!(output.ends_with("%%EOF\n\x04"));
}

#[test]
fn test_rerun_is_byte_identical() {
    let source = MemorySource::new("drawing.ps", DRAWING);
    let config = scaled(1.7);
    let (_, first) = compose(&source, &config);
    let (_, second) = compose(&source, &config);
    assert_eq!(first, second);
}

#[test]
fn test_setup_parameters() {
    let source = MemorySource::new("drawing.ps", DRAWING);
    let config = config_with(TileOptions {
        scale: Some(2.0),
        manual_feed: true,
        title: "Bella (v2)".to_string(),
        ..Default::default()
    });
    let (plan, output) = compose(&source, &config);

    assert!(output.contains("dup /ManualFeed true put\n"));
    assert!(output.contains("/sfactor 2.0000000000 def\n"));
    assert!(output.contains("/leftmargin 29.75 def\n"));
    assert!(output.contains("/botmargin 42.1 def\n"));
    assert!(output.contains("/pagewidth 535.5 def\n"));
    assert!(output.contains(&format!("/do_turn {} def\n", plan.rotate)));
    assert!(output.contains("/patterntitle (Bella \\(v2\\)) def\n"));
}

#[test]
fn test_alignment_marks_only_when_enabled() {
    let source = MemorySource::new("drawing.ps", DRAWING);

    let (_, plain) = compose(&source, &scaled(2.0));
    assert!(!plain.contains("/alignmarks"));
    assert!(!plain.contains("edges aload pop alignmarks"));

    let config = config_with(TileOptions {
        scale: Some(2.0),
        alignment_marks: true,
        ..Default::default()
    });
    let (_, marked) = compose(&source, &config);
    assert!(marked.contains("/alignmarks"));
    assert!(marked.contains("edges aload pop alignmarks"));
}

#[test]
fn test_labels_are_localized() {
    struct Dutch;
    impl Lookup for Dutch {
        fn lookup(&self, key: &str) -> String {
            match key {
                "Page" => "Pagina".to_string(),
                "row" => "rij".to_string(),
                "column" => "kolom".to_string(),
                other => other.to_string(),
            }
        }
    }

    let source = MemorySource::new("drawing.ps", DRAWING);
    let config = TileOptions {
        scale: Some(2.0),
        ..Default::default()
    }
    .resolve(&Dutch)
    .unwrap();
    let (_, output) = compose(&source, &config);

    assert!(output.contains("(Pagina ) show"));
    assert!(output.contains("(: rij ) show"));
    assert!(output.contains("(, kolom ) show"));
    assert!(output.contains("(cover page) show"));
}

#[test]
fn test_input_without_bounding_box_uses_default_image() {
    let source = MemorySource::new("bare.ps", "%!PS\nnewpath\nshowpage\n");
    let (plan, _) = compose(&source, &scaled(1.0));
    assert_eq!(plan.image, parse_box("A4").unwrap());
}

#[test]
fn test_image_override_wins() {
    let source = MemorySource::new("drawing.ps", DRAWING);
    let config = config_with(TileOptions {
        scale: Some(1.0),
        image: Some("100x100p".to_string()),
        ..Default::default()
    });
    let (plan, _) = compose(&source, &config);
    assert_eq!(plan.image, PageBox::from_size(100.0, 100.0));
    assert_eq!(plan.sheets(), 1);
}

#[test]
fn test_planning_errors_write_nothing() {
    let source = MemorySource::new("drawing.ps", DRAWING);
    let config = scaled(50.0);
    let mut out = Vec::new();
    let result = make_poster(&source, &config, &mut out);
    assert!(matches!(result, Err(TileError::TooManySheets { .. })));
    assert!(out.is_empty());
}

/// Readable once for the scan, gone afterwards
struct Vanishing {
    data: &'static str,
    opened: std::cell::Cell<usize>,
}

impl ContentSource for Vanishing {
    fn name(&self) -> &str {
        "vanishing.ps"
    }

    fn open(&self) -> io::Result<Box<dyn BufRead + '_>> {
        let count = self.opened.get();
        self.opened.set(count + 1);
        if count == 0 {
            Ok(Box::new(self.data.as_bytes()))
        } else {
            Err(io::Error::new(io::ErrorKind::NotFound, "input vanished"))
        }
    }
}

#[test]
fn test_vanished_input_closes_output() {
    let source = Vanishing {
        data: DRAWING,
        opened: std::cell::Cell::new(0),
    };
    let mut out = Vec::new();
    let result = make_poster(&source, &scaled(2.0), &mut out);

    assert!(matches!(result, Err(TileError::Io(_))));
    let output = String::from_utf8(out).unwrap();
    assert!(output.starts_with("%!PS-Adobe-3.0\n"));
    assert!(output.ends_with("coverprolog\n/systemdict /showpage get exec\n%%EOF\n"));
}

#[test]
fn test_file_source_matches_memory_source() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DRAWING.as_bytes()).unwrap();
    file.flush().unwrap();

    let file_source = FileSource::new(file.path());
    let memory_source = MemorySource::new(file_source.name(), DRAWING);
    let config = scaled(2.0);

    let (_, from_file) = compose(&file_source, &config);
    let (_, from_memory) = compose(&memory_source, &config);
    assert_eq!(from_file, from_memory);
}
