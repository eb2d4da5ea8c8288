//! Copying the input content into an embedding
//!
//! Comment lines are dropped, since stray structural comments inside the
//! embedded copy confuse previewers. A trailing end-of-transmission byte on
//! the last line is cut off and reported, so the composer can emit it once
//! at the very end of the whole output.

use std::io::{self, BufRead, Write};
use std::iter::Peekable;

use crate::constants::EOT;

/// What a relay pass found out about the content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RelayOutcome {
    /// The last line carried an end-of-transmission byte
    pub deferred_eot: bool,
}

/// Raw lines of a reader, newline included
pub struct RawLines<R> {
    reader: R,
}

impl<R: BufRead> RawLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Iterator for RawLines<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => None,
            Ok(_) => Some(Ok(line)),
            Err(e) => Some(Err(e)),
        }
    }
}

fn is_comment(line: &[u8]) -> bool {
    line.first() == Some(&b'%')
}

/// Copy `input` to `output`, dropping comment lines.
pub fn relay<R: BufRead, W: Write + ?Sized>(input: R, output: &mut W) -> io::Result<RelayOutcome> {
    let mut lines: Peekable<RawLines<R>> = RawLines::new(input).peekable();
    let mut outcome = RelayOutcome::default();

    while let Some(line) = lines.next() {
        let mut line = line?;

        if lines.peek().is_some() {
            if !is_comment(&line) {
                output.write_all(&line)?;
            }
            continue;
        }

        if let Some(pos) = line.iter().position(|&b| b == EOT) {
            line.truncate(pos);
            outcome.deferred_eot = true;
        }
        if !line.is_empty() && !is_comment(&line) {
            output.write_all(&line)?;
        }
    }

    Ok(outcome)
}
