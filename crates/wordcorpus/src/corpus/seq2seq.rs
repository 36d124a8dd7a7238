//! # Sequence-to-Sequence Corpus

use std::{io::BufRead, path::Path};

use crate::{
    corpus::{CorpusOptions, CorpusStats, Split, SplitLines, split_lines::NumberedLines},
    errors::{CorpusError, CorpusResult},
    lines::split_pair,
    record::Record,
    segmentation::WordSegmenter,
    types::TokenType,
    vocab::{Framing, SOS, SpecialTokens, WordVocab, WordVocabBuilder},
};

/// A source record, and its target record when one is known.
pub type RecordPair<T> = (Record<T>, Option<Record<T>>);

/// Train/dev/test record pairs of ``{SOURCE}\t{TARGET}`` files.
///
/// Source and target share one word vocabulary, induced from both sides
/// of the training split (unless supplied). Every sequence is framed
/// ``<sos> ... <eos>``.
#[derive(Debug, Clone)]
pub struct Seq2SeqCorpus<T: TokenType> {
    vocab: WordVocab<T>,
    train: Vec<RecordPair<T>>,
    dev: Vec<RecordPair<T>>,
    test: Vec<RecordPair<T>>,
}

impl<T: TokenType> Seq2SeqCorpus<T> {
    /// Reserved tokens of induced word vocabularies.
    pub const SPECIALS: SpecialTokens = SpecialTokens::Tagged;

    /// Framing of resolved word id sequences.
    pub const FRAMING: Framing = Framing::Tagged;

    /// Load a corpus from files.
    ///
    /// ## Arguments
    /// * `options` - segmenter, and optional frozen vocabulary.
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
    ///
    /// A supplied label vocabulary is ignored.
    pub fn from_lines(
        options: CorpusOptions<T>,
        lines: SplitLines,
    ) -> CorpusResult<Self> {
        let segmenter = options.segmenter.as_ref();

        let mut train = parse_pairs(Split::Train, &lines.train, segmenter)?;

        let vocab = match options.vocab {
            Some(vocab) => vocab,
            None => {
                let mut builder = WordVocabBuilder::new(Self::SPECIALS);
                for (source, target) in &train {
                    builder.observe(source.words());
                    if let Some(target) = target {
                        builder.observe(target.words());
                    }
                }
                builder.build()?
            }
        };
        log::debug!("vocab size: {}", vocab.len());

        resolve_pairs(&mut train, &vocab)?;

        let mut dev = match &lines.dev {
            Some(dev_lines) => parse_pairs(Split::Dev, dev_lines, segmenter)?,
            None => Vec::new(),
        };
        resolve_pairs(&mut dev, &vocab)?;

        let mut test = Vec::new();
        if let Some(test_lines) = &lines.test {
            for (line_no, line) in test_lines {
                let pair = match split_pair(line) {
                    Some((source, target)) => (
                        Record::new(source, None, segmenter)?,
                        Some(Record::new(target, None, segmenter)?),
                    ),
                    None => {
                        log::warn!("test line {line_no}: not a text pair; treating as source only");
                        (Record::new(line.as_str(), None, segmenter)?, None)
                    }
                };
                test.push(pair);
            }
        }
        resolve_pairs(&mut test, &vocab)?;

        let corpus = Self {
            vocab,
            train,
            dev,
            test,
        };
        if log::log_enabled!(log::Level::Info) {
            log::info!("loaded seq2seq corpus: {}", corpus.stats());
        }
        Ok(corpus)
    }

    /// The frozen word vocabulary.
    pub fn vocab(&self) -> &WordVocab<T> {
        &self.vocab
    }

    /// Training pairs.
    pub fn train(&self) -> &[RecordPair<T>] {
        &self.train
    }

    /// Dev pairs; empty if no dev source was given.
    pub fn dev(&self) -> &[RecordPair<T>] {
        &self.dev
    }

    /// Test pairs; targets are `None` for lines which were not pairs.
    pub fn test(&self) -> &[RecordPair<T>] {
        &self.test
    }

    /// Pairs of the given split.
    pub fn split(
        &self,
        split: Split,
    ) -> &[RecordPair<T>] {
        match split {
            Split::Train => self.train(),
            Split::Dev => self.dev(),
            Split::Test => self.test(),
        }
    }

    /// A ``[<sos>]`` record to seed decoding.
    pub fn decoder_seed(&self) -> CorpusResult<Record<T>> {
        Ok(Record::seed(self.vocab.special_id(SOS)?))
    }

    /// Summary counts.
    pub fn stats(&self) -> CorpusStats {
        let mut stats = CorpusStats {
            train: self.train.len(),
            dev: self.dev.len(),
            test: self.test.len(),
            unlabeled_test: self.test.iter().filter(|(_, t)| t.is_none()).count(),
            vocab_size: self.vocab.len(),
            ..Default::default()
        };
        let held_out = self.dev.iter().chain(&self.test);
        stats.count_eval_tokens(
            held_out.flat_map(|(s, t)| core::iter::once(s).chain(t.as_ref())),
            self.vocab.unk_id(),
            Self::FRAMING,
        );
        stats
    }
}

fn parse_pairs<T: TokenType>(
    split: Split,
    lines: &NumberedLines,
    segmenter: &dyn WordSegmenter,
) -> CorpusResult<Vec<RecordPair<T>>> {
    lines
        .iter()
        .map(|(line_no, line)| {
            let (source, target) = split_pair(line).ok_or_else(|| CorpusError::MalformedLine {
                split,
                line: *line_no,
                reason: "expected exactly SOURCE<TAB>TARGET".to_string(),
            })?;
            Ok((
                Record::new(source, None, segmenter)?,
                Some(Record::new(target, None, segmenter)?),
            ))
        })
        .collect()
}

fn resolve_pairs<T: TokenType>(
    pairs: &mut [RecordPair<T>],
    vocab: &WordVocab<T>,
) -> CorpusResult<()> {
    for (source, target) in pairs.iter_mut() {
        source.resolve_word_ids(vocab, Seq2SeqCorpus::<T>::FRAMING)?;
        if let Some(target) = target {
            target.resolve_word_ids(vocab, Seq2SeqCorpus::<T>::FRAMING)?;
        }
    }
    Ok(())
}
