//! # Records
//!
//! A [`Record`] is one labeled (or unlabeled) text unit; it carries the raw
//! text, its segmented words, and (once resolved against vocabularies) the
//! word id sequence and label id.

use crate::{
    errors::CorpusResult,
    segmentation::WordSegmenter,
    types::TokenType,
    vocab::{Framing, LabelVocab, WordVocab},
};

/// One text unit of a corpus.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Record<T: TokenType> {
    text: String,
    words: Vec<String>,
    label: Option<String>,
    word_ids: Vec<T>,
    label_id: Option<T>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    features: Option<Vec<f32>>,
}

impl<T: TokenType> Record<T> {
    /// Segment `text` into a new, unresolved record.
    ///
    /// ## Arguments
    /// * `text` - the raw text.
    /// * `label` - the optional class label.
    /// * `segmenter` - the word segmentation engine.
    pub fn new<S>(
        text: impl Into<String>,
        label: Option<String>,
        segmenter: &S,
    ) -> CorpusResult<Self>
    where
        S: WordSegmenter + ?Sized,
    {
        let text = text.into();
        let words = segmenter.segment(&text)?;
        Ok(Self {
            text,
            words,
            label,
            word_ids: Vec::new(),
            label_id: None,
            features: None,
        })
    }

    /// Build a text-less record around a fixed id sequence.
    pub fn from_ids(ids: Vec<T>) -> Self {
        Self {
            text: String::new(),
            words: Vec::new(),
            label: None,
            word_ids: ids,
            label_id: None,
            features: None,
        }
    }

    /// A single-id record; used to seed sequence generation with ``<sos>``.
    pub fn seed(tag_id: T) -> Self {
        Self::from_ids(vec![tag_id])
    }

    /// The raw text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The segmented words.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The class label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The resolved word ids; empty until [`Self::resolve_word_ids`].
    pub fn word_ids(&self) -> &[T] {
        &self.word_ids
    }

    /// The resolved label id; `None` until resolved, or if unlabeled.
    pub fn label_id(&self) -> Option<T> {
        self.label_id
    }

    /// The auxiliary feature vector, if one was attached.
    pub fn features(&self) -> Option<&[f32]> {
        self.features.as_deref()
    }

    /// Attach an auxiliary feature vector.
    pub fn set_features(
        &mut self,
        features: Vec<f32>,
    ) {
        self.features = Some(features);
    }

    /// Return this record with an auxiliary feature vector attached.
    pub fn with_features(
        mut self,
        features: Vec<f32>,
    ) -> Self {
        self.set_features(features);
        self
    }

    /// Resolve the words against a vocabulary, replacing any prior ids.
    pub fn resolve_word_ids(
        &mut self,
        vocab: &WordVocab<T>,
        framing: Framing,
    ) -> CorpusResult<()> {
        self.word_ids = vocab.encode(&self.words, framing)?;
        Ok(())
    }

    /// Resolve the label against a label vocabulary.
    ///
    /// Unlabeled records resolve to `None`; an unseen label is an error
    /// and leaves the record unchanged.
    pub fn resolve_label_id(
        &mut self,
        labels: &LabelVocab<T>,
    ) -> CorpusResult<()> {
        self.label_id = match &self.label {
            Some(label) => Some(labels.try_id(label)?),
            None => None,
        };
        Ok(())
    }

    /// The length of the id sequence.
    pub fn len(&self) -> usize {
        self.word_ids.len()
    }

    /// Is the id sequence empty?
    pub fn is_empty(&self) -> bool {
        self.word_ids.is_empty()
    }
}
