//! # Split Sources

use std::{fs::File, io::BufRead, io::BufReader, path::Path};

use crate::{errors::CorpusResult, lines::read_content_lines};

/// Numbered, non-empty lines of a single split.
pub type NumberedLines = Vec<(usize, String)>;

/// The raw content lines of the train/dev/test splits.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SplitLines {
    /// Training lines.
    pub train: NumberedLines,

    /// Development lines, if a dev source was given.
    pub dev: Option<NumberedLines>,

    /// Test lines, if a test source was given.
    pub test: Option<NumberedLines>,
}

impl SplitLines {
    /// Read splits from line readers.
    pub fn from_readers<R: BufRead>(
        train: R,
        dev: Option<R>,
        test: Option<R>,
    ) -> CorpusResult<Self> {
        Ok(Self {
            train: read_content_lines(train)?,
            dev: dev.map(read_content_lines).transpose()?,
            test: test.map(read_content_lines).transpose()?,
        })
    }

    /// Read splits from files.
    pub fn from_paths<P: AsRef<Path>>(
        train: P,
        dev: Option<P>,
        test: Option<P>,
    ) -> CorpusResult<Self> {
        Ok(Self {
            train: read_path(train.as_ref())?,
            dev: dev.map(|p| read_path(p.as_ref())).transpose()?,
            test: test.map(|p| read_path(p.as_ref())).transpose()?,
        })
    }
}

fn read_path(path: &Path) -> CorpusResult<NumberedLines> {
    log::debug!("reading {}", path.display());
    read_content_lines(BufReader::new(File::open(path)?))
}
