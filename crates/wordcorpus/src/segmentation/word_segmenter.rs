//! # Word Segmenter Trait

use crate::errors::CorpusResult;

/// A word segmentation engine.
///
/// Implementations split text into an ordered sequence of word tokens;
/// whitespace-only text must segment to an empty sequence.
pub trait WordSegmenter: Send + Sync {
    /// Split `text` into words.
    fn segment(
        &self,
        text: &str,
    ) -> CorpusResult<Vec<String>>;
}

impl<S: WordSegmenter + ?Sized> WordSegmenter for Box<S> {
    fn segment(
        &self,
        text: &str,
    ) -> CorpusResult<Vec<String>> {
        (**self).segment(text)
    }
}

impl<S: WordSegmenter + ?Sized> WordSegmenter for std::sync::Arc<S> {
    fn segment(
        &self,
        text: &str,
    ) -> CorpusResult<Vec<String>> {
        (**self).segment(text)
    }
}
