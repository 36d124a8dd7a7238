//! # Whitespace Segmenter

use crate::{errors::CorpusResult, segmentation::WordSegmenter};

/// Splits text on Unicode whitespace.
///
/// This is the right engine for text which has already been run through
/// an external morphological analyzer in "wakati" (space separated) mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WhitespaceSegmenter;

impl WordSegmenter for WhitespaceSegmenter {
    fn segment(
        &self,
        text: &str,
    ) -> CorpusResult<Vec<String>> {
        Ok(text.split_whitespace().map(str::to_string).collect())
    }
}
