//! # In-Memory Text Dataset

use crate::{
    corpus::CorpusOptions,
    errors::{CorpusError, CorpusResult},
    record::Record,
    types::TokenType,
    vocab::{Framing, LabelVocab, SpecialTokens, WordVocab, WordVocabBuilder},
};

/// Records built from in-memory texts; typically inference inputs.
///
/// Induced vocabularies reserve only ``<pad>`` and ``<unk>``.
#[derive(Debug, Clone)]
pub struct TextDataset<T: TokenType> {
    vocab: WordVocab<T>,
    labels: Option<LabelVocab<T>>,
    records: Vec<Record<T>>,
}

impl<T: TokenType> TextDataset<T> {
    /// Reserved tokens of induced word vocabularies.
    pub const SPECIALS: SpecialTokens = SpecialTokens::Plain;

    /// Build an unlabeled dataset.
    ///
    /// A supplied label vocabulary is kept, but nothing resolves against it.
    pub fn from_texts<I, S>(
        options: CorpusOptions<T>,
        texts: I,
    ) -> CorpusResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let texts: Vec<String> = texts.into_iter().map(Into::into).collect();
        Self::build(options, texts, None)
    }

    /// Build a labeled dataset from parallel text and label lists.
    ///
    /// ## Returns
    /// `CorpusError::LengthMismatch` if the lists differ in length;
    /// `CorpusError::UnknownLabel` if a supplied label vocabulary lacks a label.
    pub fn from_labeled_texts<I, S, L, K>(
        options: CorpusOptions<T>,
        texts: I,
        labels: L,
    ) -> CorpusResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        L: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let texts: Vec<String> = texts.into_iter().map(Into::into).collect();
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if texts.len() != labels.len() {
            return Err(CorpusError::LengthMismatch {
                texts: texts.len(),
                labels: labels.len(),
            });
        }
        Self::build(options, texts, Some(labels))
    }

    fn build(
        options: CorpusOptions<T>,
        texts: Vec<String>,
        labels: Option<Vec<String>>,
    ) -> CorpusResult<Self> {
        let segmenter = options.segmenter.as_ref();

        let mut records = match labels {
            Some(labels) => texts
                .into_iter()
                .zip(labels)
                .map(|(text, label)| Record::new(text, Some(label), segmenter))
                .collect::<CorpusResult<Vec<_>>>()?,
            None => texts
                .into_iter()
                .map(|text| Record::new(text, None, segmenter))
                .collect::<CorpusResult<Vec<_>>>()?,
        };
        let labeled = records.iter().any(|r| r.label().is_some());

        let vocab = match options.vocab {
            Some(vocab) => vocab,
            None => {
                let mut builder = WordVocabBuilder::new(Self::SPECIALS);
                builder.observe_records(&records);
                builder.build()?
            }
        };

        let labels = match options.labels {
            Some(labels) => Some(labels),
            None if labeled => Some(LabelVocab::from_labels(
                records.iter().filter_map(Record::label),
            )?),
            None => None,
        };

        for record in records.iter_mut() {
            record.resolve_word_ids(&vocab, Framing::Plain)?;
            if let Some(labels) = &labels {
                record.resolve_label_id(labels)?;
            }
        }

        log::debug!(
            "text dataset: {} records, vocab size {}",
            records.len(),
            vocab.len()
        );

        Ok(Self {
            vocab,
            labels,
            records,
        })
    }

    /// The word vocabulary.
    pub fn vocab(&self) -> &WordVocab<T> {
        &self.vocab
    }

    /// The label vocabulary, if the dataset is labeled or one was supplied.
    pub fn labels(&self) -> Option<&LabelVocab<T>> {
        self.labels.as_ref()
    }

    /// The records, in input order.
    pub fn records(&self) -> &[Record<T>] {
        &self.records
    }

    /// Consume the dataset, returning its records.
    pub fn into_records(self) -> Vec<Record<T>> {
        self.records
    }

    /// The number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Is the dataset empty?
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_vocab() {
        let dataset: TextDataset<u32> =
            TextDataset::from_texts(CorpusOptions::default(), ["x y", "y z"]).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.vocab().lookup_id("x"), Some(2));
        assert_eq!(dataset.vocab().lookup_id("<sos>"), None);
        assert_eq!(dataset.records()[1].word_ids(), &[3, 4]);
        assert!(dataset.labels().is_none());
    }

    #[test]
    fn test_labeled() {
        let dataset: TextDataset<u32> = TextDataset::from_labeled_texts(
            CorpusOptions::default(),
            ["a", "b", "c"],
            ["spam", "ham", "spam"],
        )
        .unwrap();

        let labels = dataset.labels().unwrap();
        assert_eq!(labels.try_id("spam").unwrap(), 0);
        assert_eq!(labels.try_id("ham").unwrap(), 1);
        assert_eq!(
            dataset
                .records()
                .iter()
                .map(|r| r.label_id())
                .collect::<Vec<_>>(),
            vec![Some(0), Some(1), Some(0)]
        );
    }

    #[test]
    fn test_given_vocab() {
        let corpus_vocab: WordVocab<u32> =
            WordVocab::from_sequences(SpecialTokens::Tagged, [["known"]]).unwrap();

        let dataset = TextDataset::from_texts(
            CorpusOptions::default().with_vocab(corpus_vocab),
            vec!["known unknown".to_string()],
        )
        .unwrap();
        assert_eq!(dataset.into_records()[0].word_ids(), &[4, 1]);
    }

    #[test]
    fn test_length_mismatch() {
        let err = TextDataset::<u32>::from_labeled_texts(
            CorpusOptions::default(),
            ["a", "b"],
            ["x"],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CorpusError::LengthMismatch {
                texts: 2,
                labels: 1
            }
        ));
    }

    #[test]
    fn test_empty() {
        let dataset =
            TextDataset::<u32>::from_texts(CorpusOptions::default(), Vec::<String>::new())
                .unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.vocab().len(), 2);
    }
}
