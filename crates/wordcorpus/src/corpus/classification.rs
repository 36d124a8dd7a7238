//! # Text Classification Corpus

use std::{io::BufRead, path::Path};

use crate::{
    corpus::{CorpusOptions, CorpusStats, Split, SplitLines, split_lines::NumberedLines},
    errors::{CorpusError, CorpusResult},
    lines::split_labeled,
    record::Record,
    segmentation::WordSegmenter,
    types::TokenType,
    vocab::{Framing, LabelVocab, SpecialTokens, WordVocab, WordVocabBuilder},
};

/// Train/dev/test records of ``{LABEL}\t{TEXT}`` files.
///
/// The word and label vocabularies come from the training split
/// (unless supplied), and are frozen before dev/test are resolved.
#[derive(Debug, Clone)]
pub struct ClassificationCorpus<T: TokenType> {
    vocab: WordVocab<T>,
    labels: LabelVocab<T>,
    train: Vec<Record<T>>,
    dev: Vec<Record<T>>,
    test: Vec<Record<T>>,
}

impl<T: TokenType> ClassificationCorpus<T> {
    /// Reserved tokens of induced word vocabularies.
    pub const SPECIALS: SpecialTokens = SpecialTokens::Tagged;

    /// Framing of resolved word id sequences.
    pub const FRAMING: Framing = Framing::Plain;

    /// Load a corpus from files.
    ///
    /// ## Arguments
    /// * `options` - segmenter, and optional frozen vocabularies.
    /// * `train` - the training file.
    /// * `dev` - the optional dev file.
    /// * `test` - the optional test file.
    pub fn load_from_paths<P: AsRef<Path>>(
        options: CorpusOptions<T>,
        train: P,
        dev: Option<P>,
        test: Option<P>,
    ) -> CorpusResult<Self> {
        Self::from_lines(options, SplitLines::from_paths(train, dev, test)?)
    }

    /// Load a corpus from line readers.
    pub fn load_from_readers<R: BufRead>(
        options: CorpusOptions<T>,
        train: R,
        dev: Option<R>,
        test: Option<R>,
    ) -> CorpusResult<Self> {
        Self::from_lines(options, SplitLines::from_readers(train, dev, test)?)
    }

    /// Build a corpus from already-read split lines.
    pub fn from_lines(
        options: CorpusOptions<T>,
        lines: SplitLines,
    ) -> CorpusResult<Self> {
        let CorpusOptions {
            segmenter,
            vocab,
            labels,
        } = options;
        let segmenter = segmenter.as_ref();

        let mut train = parse_labeled(Split::Train, &lines.train, segmenter)?;

        let vocab = match vocab {
            Some(vocab) => vocab,
            None => {
                let mut builder = WordVocabBuilder::new(Self::SPECIALS);
                builder.observe_records(&train);
                builder.build()?
            }
        };
        let labels = match labels {
            Some(labels) => labels,
            None => LabelVocab::from_labels(train.iter().filter_map(Record::label))?,
        };
        log::debug!(
            "vocab size: {}, label count: {}",
            vocab.len(),
            labels.len()
        );

        for record in train.iter_mut() {
            record.resolve_word_ids(&vocab, Self::FRAMING)?;
            record.resolve_label_id(&labels)?;
        }

        let mut dev = match &lines.dev {
            Some(dev_lines) => parse_labeled(Split::Dev, dev_lines, segmenter)?,
            None => Vec::new(),
        };
        for record in dev.iter_mut() {
            record.resolve_word_ids(&vocab, Self::FRAMING)?;
            record.resolve_label_id(&labels)?;
        }

        let mut test = Vec::new();
        if let Some(test_lines) = &lines.test {
            for (line_no, line) in test_lines {
                let mut record = match split_labeled(line) {
                    Some((label, text)) if labels.lookup_id(label).is_some() => {
                        let mut record = Record::new(text, Some(label.to_string()), segmenter)?;
                        record.resolve_label_id(&labels)?;
                        record
                    }
                    _ => {
                        log::warn!("test line {line_no}: no known label; treating as unlabeled text");
                        Record::new(line.as_str(), None, segmenter)?
                    }
                };
                record.resolve_word_ids(&vocab, Self::FRAMING)?;
                test.push(record);
            }
        }

        let corpus = Self {
            vocab,
            labels,
            train,
            dev,
            test,
        };
        if log::log_enabled!(log::Level::Info) {
            log::info!("loaded classification corpus: {}", corpus.stats());
        }
        Ok(corpus)
    }

    /// The frozen word vocabulary.
    pub fn vocab(&self) -> &WordVocab<T> {
        &self.vocab
    }

    /// The frozen label vocabulary.
    pub fn labels(&self) -> &LabelVocab<T> {
        &self.labels
    }

    /// Training records.
    pub fn train(&self) -> &[Record<T>] {
        &self.train
    }

    /// Dev records; empty if no dev source was given.
    pub fn dev(&self) -> &[Record<T>] {
        &self.dev
    }

    /// Test records; empty if no test source was given.
    pub fn test(&self) -> &[Record<T>] {
        &self.test
    }

    /// Records of the given split.
    pub fn split(
        &self,
        split: Split,
    ) -> &[Record<T>] {
        match split {
            Split::Train => self.train(),
            Split::Dev => self.dev(),
            Split::Test => self.test(),
        }
    }

    /// Summary counts.
    pub fn stats(&self) -> CorpusStats {
        let mut stats = CorpusStats {
            train: self.train.len(),
            dev: self.dev.len(),
            test: self.test.len(),
            unlabeled_test: self.test.iter().filter(|r| r.label().is_none()).count(),
            vocab_size: self.vocab.len(),
            label_count: self.labels.len(),
            ..Default::default()
        };
        stats.count_eval_tokens(
            self.dev.iter().chain(&self.test),
            self.vocab.unk_id(),
            Self::FRAMING,
        );
        stats
    }
}

fn parse_labeled<T: TokenType>(
    split: Split,
    lines: &NumberedLines,
    segmenter: &dyn WordSegmenter,
) -> CorpusResult<Vec<Record<T>>> {
    lines
        .iter()
        .map(|(line_no, line)| {
            let (label, text) = split_labeled(line).ok_or_else(|| CorpusError::MalformedLine {
                split,
                line: *line_no,
                reason: "expected LABEL<TAB>TEXT".to_string(),
            })?;
            Record::new(text, Some(label.to_string()), segmenter)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmentation::{RegexSegmenter, WhitespaceSegmenter};

    const TRAIN: &str = "pos\tgood fun movie\nneg\tbad boring movie\n\npos\tfun fun\n";
    const DEV: &str = "neg\tboring plot\npos\tgood acting\n";
    const TEST: &str = "pos\tgreat fun\nno tab at all\nmeh\tunseen label\n";

    fn load(
        dev: Option<&str>,
        test: Option<&str>,
    ) -> CorpusResult<ClassificationCorpus<u32>> {
        ClassificationCorpus::load_from_readers(
            CorpusOptions::default(),
            TRAIN.as_bytes(),
            dev.map(str::as_bytes),
            test.map(str::as_bytes),
        )
    }

    #[test]
    fn test_train_vocab_and_labels() {
        let corpus = load(None, None).unwrap();

        assert_eq!(
            corpus.vocab().iter().skip(4).collect::<Vec<_>>(),
            vec![(4, "good"), (5, "fun"), (6, "movie"), (7, "bad"), (8, "boring")]
        );
        assert_eq!(
            corpus.labels().iter().collect::<Vec<_>>(),
            vec![(0, "pos"), (1, "neg")]
        );

        let train = corpus.train();
        assert_eq!(train.len(), 3);
        assert_eq!(train[0].word_ids(), &[4, 5, 6]);
        assert_eq!(train[0].label_id(), Some(0));
        assert_eq!(train[1].word_ids(), &[7, 8, 6]);
        assert_eq!(train[1].label_id(), Some(1));
        assert_eq!(train[2].word_ids(), &[5, 5]);

        assert!(corpus.dev().is_empty());
        assert!(corpus.split(Split::Test).is_empty());
    }

    #[test]
    fn test_dev_uses_frozen_vocab() {
        let corpus = load(Some(DEV), None).unwrap();
        let dev = corpus.dev();
        assert_eq!(dev.len(), 2);

        // "plot" and "acting" are unseen in train.
        assert_eq!(dev[0].word_ids(), &[8, 1]);
        assert_eq!(dev[0].label_id(), Some(1));
        assert_eq!(dev[1].word_ids(), &[4, 1]);
        assert_eq!(corpus.vocab().len(), 9);
        assert!(!corpus.vocab().contains("plot"));

        let stats = corpus.stats();
        assert_eq!(stats.dev, 2);
        assert_eq!(stats.eval_tokens, 4);
        assert_eq!(stats.unknown_tokens, 2);
    }

    #[test]
    fn test_dev_unknown_label_fails() {
        let err = load(Some("neutral\tgood\n"), None).unwrap_err();
        assert!(matches!(err, CorpusError::UnknownLabel { label } if label == "neutral"));
    }

    #[test]
    fn test_malformed_train_line_fails() {
        let err = ClassificationCorpus::<u32>::load_from_readers(
            CorpusOptions::default(),
            "pos\tok\n\nmissing tab\n".as_bytes(),
            None,
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CorpusError::MalformedLine {
                split: Split::Train,
                line: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_test_split_degrades() {
        let corpus = load(None, Some(TEST)).unwrap();
        let test = corpus.test();
        assert_eq!(test.len(), 3);

        assert_eq!(test[0].label(), Some("pos"));
        assert_eq!(test[0].label_id(), Some(0));
        assert_eq!(test[0].text(), "great fun");
        assert_eq!(test[0].word_ids(), &[1, 5]);

        assert_eq!(test[1].label(), None);
        assert_eq!(test[1].label_id(), None);
        assert_eq!(test[1].text(), "no tab at all");
        assert_eq!(test[1].word_ids(), &[1, 1, 1, 1]);

        // unknown label: the whole line becomes the text.
        assert_eq!(test[2].label(), None);
        assert_eq!(test[2].text(), "meh\tunseen label");
        assert_eq!(test[2].words(), &["meh", "unseen", "label"]);

        let stats = corpus.stats();
        assert_eq!(stats.test, 3);
        assert_eq!(stats.unlabeled_test, 2);
    }

    #[test]
    fn test_given_vocab_and_labels() {
        let vocab: WordVocab<u32> =
            WordVocab::from_map([("<pad>", 0), ("<unk>", 1), ("fun", 2)]).unwrap();
        let labels: LabelVocab<u32> = LabelVocab::from_map([("neg", 0), ("pos", 1)]).unwrap();

        let corpus = ClassificationCorpus::load_from_readers(
            CorpusOptions::default()
                .with_vocab(vocab.clone())
                .with_labels(labels.clone()),
            TRAIN.as_bytes(),
            None,
            None,
        )
        .unwrap();

        assert_eq!(corpus.vocab(), &vocab);
        assert_eq!(corpus.labels(), &labels);
        assert_eq!(corpus.train()[0].word_ids(), &[1, 2, 1]);
        assert_eq!(corpus.train()[0].label_id(), Some(1));
    }

    #[test]
    fn test_given_labels_reject_unknown_train_label() {
        let labels: LabelVocab<u32> = LabelVocab::from_labels(["pos"]).unwrap();
        let err = ClassificationCorpus::<u32>::load_from_readers(
            CorpusOptions::default().with_labels(labels),
            TRAIN.as_bytes(),
            None,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, CorpusError::UnknownLabel { .. }));
    }

    #[test]
    fn test_label_text_with_tabs() {
        let corpus = ClassificationCorpus::<u32>::load_from_readers(
            CorpusOptions::default().with_segmenter(RegexSegmenter::default()),
            "q\tA, B\tC\n".as_bytes(),
            None,
            None,
        )
        .unwrap();
        let record = &corpus.train()[0];
        assert_eq!(record.text(), "A, B\tC");
        assert_eq!(record.words(), &["A", ",", "B", "C"]);
        assert_eq!(record.word_ids(), &[4, 5, 6, 7]);
    }

    #[test]
    fn test_label_with_empty_text() {
        let corpus = ClassificationCorpus::<u32>::load_from_readers(
            CorpusOptions::default(),
            "pos\tgood\nneg\t\n".as_bytes(),
            Some("neg\t \n".as_bytes()),
            Some("pos\t  \n".as_bytes()),
        )
        .unwrap();

        let train = &corpus.train()[1];
        assert_eq!(train.label(), Some("neg"));
        assert_eq!(train.label_id(), Some(1));
        assert_eq!(train.text(), "");
        assert!(train.word_ids().is_empty());

        assert_eq!(corpus.dev()[0].label_id(), Some(1));

        let test = &corpus.test()[0];
        assert_eq!(test.label(), Some("pos"));
        assert_eq!(test.label_id(), Some(0));
        assert!(test.word_ids().is_empty());
        assert_eq!(corpus.stats().unlabeled_test, 0);
    }

    #[test]
    fn test_segmenter_is_used_for_every_split() {
        let corpus = ClassificationCorpus::<u16>::load_from_readers(
            CorpusOptions::default().with_segmenter(WhitespaceSegmenter),
            "x\ta b".as_bytes(),
            Some("x\tb a".as_bytes()),
            Some("b".as_bytes()),
        )
        .unwrap();
        assert_eq!(corpus.dev()[0].word_ids(), &[5, 4]);
        assert_eq!(corpus.test()[0].word_ids(), &[5]);
    }
}
