//! # Error Types

use crate::{corpus::Split, regex::ErrorWrapper};

/// Errors from wordcorpus operations.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// A label was not present in a frozen label vocabulary.
    #[error("unknown label: {label:?}")]
    UnknownLabel {
        /// The label which failed to resolve.
        label: String,
    },

    /// A vocabulary lacks a reserved token needed by the operation.
    #[error("vocabulary is missing special token {token:?}")]
    MissingSpecialToken {
        /// The missing token string.
        token: String,
    },

    /// An input line could not be split into the expected fields.
    #[error("malformed {split} line {line}: {reason}")]
    MalformedLine {
        /// The split being loaded.
        split: Split,

        /// The 1-based physical line number.
        line: usize,

        /// What was wrong with the line.
        reason: String,
    },

    /// Parallel text and label lists differ in length.
    #[error("{texts} texts but {labels} labels")]
    LengthMismatch {
        /// The number of texts.
        texts: usize,

        /// The number of labels.
        labels: usize,
    },

    /// Two entries of a supplied vocabulary share an id.
    #[error("duplicate vocabulary id: {id}")]
    DuplicateId {
        /// The shared id.
        id: u64,
    },

    /// Vocabulary size exceeds the capacity of the id type.
    #[error("vocab size ({size}) exceeds id type capacity")]
    IdOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Word segmentation regex failure.
    #[error(transparent)]
    Regex(#[from] ErrorWrapper),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for wordcorpus operations.
pub type CorpusResult<T> = core::result::Result<T, CorpusError>;
