//! Structural comment scanning
//!
//! Reads the header of the input document (and, if the bounding box is
//! deferred with `(atend)`, the rest of it) to find the declared bounding
//! box and the `%%Document...` comments worth repeating in the output
//! header. Nothing but these comment lines is interpreted.

use std::io::BufRead;

use crate::constants::MAX_DSC_LINE;
use crate::types::{PageBox, Result};
use log::{debug, warn};

/// What the input said about its bounding box
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BoundingBoxDecl {
    Known(PageBox),
    /// `(atend)` was seen but the trailer never supplied a value
    Deferred,
    #[default]
    Absent,
}

/// Result of scanning the input's structural comments
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScanResult {
    pub bounding_box: BoundingBoxDecl,
    /// Header lines to repeat verbatim in the output header
    pub passthrough: Vec<String>,
}

impl ScanResult {
    pub fn bounding_box(&self) -> Option<PageBox> {
        match self.bounding_box {
            BoundingBoxDecl::Known(pagebox) => Some(pagebox),
            BoundingBoxDecl::Deferred | BoundingBoxDecl::Absent => None,
        }
    }
}

/// One input line, classified
#[derive(Debug, Clone, PartialEq)]
pub enum DscLine<'a> {
    /// Anything not starting with `%`
    Content,
    /// `%%+` continuation of the previous comment
    Continuation,
    EndComments,
    BeginNested,
    EndNested,
    Trailer,
    /// `%%BoundingBox:` with its value
    BoundingBox(&'a str),
    /// `%%BoundingBox: (atend)`
    DeferredBoundingBox,
    /// `%%Document...:` property; `deferred` if its value is `(atend)`
    DocumentProperty { deferred: bool },
    /// Any other comment
    Comment,
}

impl<'a> DscLine<'a> {
    pub fn classify(line: &'a str) -> Self {
        if !line.starts_with('%') {
            return DscLine::Content;
        }
        if line.starts_with("%%+") {
            DscLine::Continuation
        } else if line.starts_with("%%EndComments") {
            DscLine::EndComments
        } else if line.starts_with("%%BeginDocument") || line.starts_with("%%BeginData") {
            DscLine::BeginNested
        } else if line.starts_with("%%EndDocument") || line.starts_with("%%EndData") {
            DscLine::EndNested
        } else if line.starts_with("%%Trailer") {
            DscLine::Trailer
        } else if let Some(value) = line.strip_prefix("%%BoundingBox:") {
            let value = value.trim_start_matches([' ', '\t']);
            if value.starts_with("(atend)") {
                DscLine::DeferredBoundingBox
            } else {
                DscLine::BoundingBox(value)
            }
        } else if line.starts_with("%%DocumentMedia") {
            // the output header names its own media
            DscLine::Comment
        } else if let Some(rest) = line.strip_prefix("%%Document") {
            // skip the rest of the keyword, then the blanks before the value
            let value = rest
                .trim_start_matches(|c: char| c != ' ' && c != '\t')
                .trim_start_matches([' ', '\t']);
            DscLine::DocumentProperty {
                deferred: value.starts_with("(atend)"),
            }
        } else {
            DscLine::Comment
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    ScanningHeader,
    /// A value was deferred to the trailer; read on to the end of input
    AwaitingDeferred,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Header,
    Body,
    Trailer,
}

struct Scanner {
    state: ScanState,
    section: Section,
    level: usize,
    /// The previous line was passed through, so `%%+` lines follow it
    continuation: bool,
    bounding_box: BoundingBoxDecl,
    passthrough: Vec<String>,
}

impl Scanner {
    fn new() -> Self {
        Self {
            state: ScanState::ScanningHeader,
            section: Section::Header,
            level: 0,
            continuation: false,
            bounding_box: BoundingBoxDecl::Absent,
            passthrough: Vec::new(),
        }
    }

    /// Header comments only count at the outer level, outside the body
    fn in_scope(&self) -> bool {
        self.section != Section::Body && self.level == 0
    }

    fn end_of_header(&mut self) {
        if self.state == ScanState::ScanningHeader {
            self.state = ScanState::Done;
        }
    }

    fn defer(&mut self) {
        self.state = ScanState::AwaitingDeferred;
    }

    fn feed(&mut self, line: &str) {
        let kind = DscLine::classify(line);

        if kind == DscLine::Content {
            self.continuation = false;
            if self.section == Section::Header {
                self.section = Section::Body;
            }
            self.end_of_header();
            return;
        }

        if kind == DscLine::Continuation && self.continuation {
            self.passthrough.push(line.to_string());
            return;
        }
        self.continuation = false;

        match kind {
            DscLine::EndComments => {
                self.section = Section::Body;
                self.end_of_header();
            }
            DscLine::BeginNested => self.level += 1,
            DscLine::EndNested => {
                if self.level == 0 {
                    warn!("Unbalanced nested document end: {}", line);
                }
                self.level = self.level.saturating_sub(1);
            }
            DscLine::Trailer if self.level == 0 => self.section = Section::Trailer,
            DscLine::DeferredBoundingBox if self.in_scope() => {
                if !matches!(self.bounding_box, BoundingBoxDecl::Known(_)) {
                    self.bounding_box = BoundingBoxDecl::Deferred;
                }
                self.defer();
            }
            DscLine::BoundingBox(value) if self.in_scope() => match parse_bounding_box(value) {
                Some(pagebox) => {
                    debug!("Found bounding box {:?}", pagebox);
                    self.bounding_box = BoundingBoxDecl::Known(pagebox);
                }
                None => warn!("Ignoring unreadable bounding box: {}", line),
            },
            DscLine::DocumentProperty { deferred } if self.in_scope() => {
                if deferred {
                    self.defer();
                } else {
                    self.passthrough.push(line.to_string());
                    self.continuation = true;
                }
            }
            _ => {}
        }
    }

    fn finish(self) -> ScanResult {
        if self.level > 0 {
            warn!("Input ends inside {} nested document(s)", self.level);
        }
        if self.bounding_box == BoundingBoxDecl::Deferred {
            warn!("Bounding box was deferred to the trailer but never given");
        }
        ScanResult {
            bounding_box: self.bounding_box,
            passthrough: self.passthrough,
        }
    }
}

fn parse_bounding_box(value: &str) -> Option<PageBox> {
    let mut numbers = value.split_whitespace().map(str::parse::<f64>);
    let mut next = || numbers.next()?.ok();
    Some(PageBox::new(next()?, next()?, next()?, next()?))
}

/// Scan the structural comments of a document.
///
/// Lines longer than [`MAX_DSC_LINE`] are classified on their first
/// [`MAX_DSC_LINE`] bytes.
pub fn scan<R: BufRead>(mut input: R) -> Result<ScanResult> {
    let mut scanner = Scanner::new();
    let mut buf = Vec::new();

    while scanner.state != ScanState::Done {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let head = &buf[..buf.len().min(MAX_DSC_LINE)];
        let line = String::from_utf8_lossy(head);
        scanner.feed(line.trim_end_matches(['\r', '\n']));
    }

    Ok(scanner.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(DscLine::classify("0 0 moveto"), DscLine::Content);
        assert_eq!(DscLine::classify("%%+ Courier"), DscLine::Continuation);
        assert_eq!(
            DscLine::classify("%%BoundingBox:\t0 0 10 20"),
            DscLine::BoundingBox("0 0 10 20")
        );
        assert_eq!(
            DscLine::classify("%%BoundingBox: (atend)"),
            DscLine::DeferredBoundingBox
        );
        assert_eq!(
            DscLine::classify("%%DocumentFonts: (atend)"),
            DscLine::DocumentProperty { deferred: true }
        );
        assert_eq!(
            DscLine::classify("%%DocumentNeededResources: font Times"),
            DscLine::DocumentProperty { deferred: false }
        );
        assert_eq!(DscLine::classify("%%BeginData: 10"), DscLine::BeginNested);
        assert_eq!(DscLine::classify("%%Title: x"), DscLine::Comment);
        assert_eq!(
            DscLine::classify("%%DocumentMedia: Letter 612 792 0 () ()"),
            DscLine::Comment
        );
    }

    #[test]
    fn test_parse_bounding_box() {
        assert_eq!(
            parse_bounding_box("0 0 595 842"),
            Some(PageBox::new(0.0, 0.0, 595.0, 842.0))
        );
        assert_eq!(parse_bounding_box("0 0 595"), None);
        assert_eq!(parse_bounding_box("a b c d"), None);
    }

    #[test]
    fn test_scanning_stops_at_first_content_line() {
        let input = b"%!PS\nshowpage\n%%BoundingBox: 0 0 1 1\n";
        let result = scan(&input[..]).unwrap();
        assert_eq!(result.bounding_box, BoundingBoxDecl::Absent);
    }
}
