//! Re-readable input documents
//!
//! The input is read once to scan its header and once more for every page
//! that embeds it, so every read starts from a fresh reader.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// A document that can be read from the start any number of times
pub trait ContentSource {
    /// Name used in `%%BeginDocument` comments and log messages
    fn name(&self) -> &str;

    /// Open a new reader positioned at the start of the document
    fn open(&self) -> io::Result<Box<dyn BufRead + '_>>;
}

/// A document buffered in memory; works for pipes and stdin
#[derive(Debug, Clone, PartialEq)]
pub struct MemorySource {
    name: String,
    data: Vec<u8>,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl ContentSource for MemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn open(&self) -> io::Result<Box<dyn BufRead + '_>> {
        Ok(Box::new(self.data.as_slice()))
    }
}

/// A document on disk, reopened for every read
#[derive(Debug, Clone, PartialEq)]
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_owned();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl ContentSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn open(&self) -> io::Result<Box<dyn BufRead + '_>> {
        Ok(Box::new(BufReader::new(File::open(&self.path)?)))
    }
}
