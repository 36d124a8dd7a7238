//! # Corpus Options

use std::sync::Arc;

use crate::{
    errors::CorpusResult,
    segmentation::{SegmenterOptions, WhitespaceSegmenter, WordSegmenter},
    types::TokenType,
    vocab::{LabelVocab, WordVocab},
};

/// Options for loading a corpus.
///
/// When a vocabulary is supplied, it is used as-is for every split;
/// otherwise one is induced from the training split.
#[derive(Clone)]
pub struct CorpusOptions<T: TokenType> {
    /// The word segmentation engine.
    pub segmenter: Arc<dyn WordSegmenter>,

    /// A supplied word vocabulary.
    pub vocab: Option<WordVocab<T>>,

    /// A supplied label vocabulary; ignored by pair corpora.
    pub labels: Option<LabelVocab<T>>,
}

impl<T: TokenType> core::fmt::Debug for CorpusOptions<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("CorpusOptions")
            .field("vocab", &self.vocab.as_ref().map(WordVocab::len))
            .field("labels", &self.labels.as_ref().map(LabelVocab::len))
            .finish_non_exhaustive()
    }
}

impl<T: TokenType> Default for CorpusOptions<T> {
    fn default() -> Self {
        Self {
            segmenter: Arc::new(WhitespaceSegmenter),
            vocab: None,
            labels: None,
        }
    }
}

impl<T: TokenType> CorpusOptions<T> {
    /// Set the segmentation engine.
    pub fn with_segmenter<S>(
        self,
        segmenter: S,
    ) -> Self
    where
        S: WordSegmenter + 'static,
    {
        Self {
            segmenter: Arc::new(segmenter),
            ..self
        }
    }

    /// Build and set one of the built-in segmentation engines.
    pub fn with_segmenter_options(
        self,
        options: &SegmenterOptions,
    ) -> CorpusResult<Self> {
        Ok(Self {
            segmenter: options.build()?.into(),
            ..self
        })
    }

    /// Supply a frozen word vocabulary.
    pub fn with_vocab(
        self,
        vocab: WordVocab<T>,
    ) -> Self {
        Self {
            vocab: Some(vocab),
            ..self
        }
    }

    /// Supply a frozen label vocabulary.
    pub fn with_labels(
        self,
        labels: LabelVocab<T>,
    ) -> Self {
        Self {
            labels: Some(labels),
            ..self
        }
    }
}
