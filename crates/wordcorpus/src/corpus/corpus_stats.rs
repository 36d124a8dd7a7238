//! # Corpus Statistics

use crate::{record::Record, types::TokenType, vocab::Framing};

/// Summary counts for a loaded corpus.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CorpusStats {
    /// Number of training records.
    pub train: usize,

    /// Number of dev records.
    pub dev: usize,

    /// Number of test records.
    pub test: usize,

    /// Number of test records which degraded to unlabeled text.
    pub unlabeled_test: usize,

    /// Word vocabulary size, reserved tokens included.
    pub vocab_size: usize,

    /// Label vocabulary size.
    pub label_count: usize,

    /// Word ids across dev and test records, framing ids excluded.
    pub eval_tokens: usize,

    /// ``<unk>`` ids across dev and test records.
    pub unknown_tokens: usize,
}

impl CorpusStats {
    /// Fraction of dev/test word ids which are ``<unk>``.
    pub fn unknown_rate(&self) -> f64 {
        if self.eval_tokens == 0 {
            0.0
        } else {
            self.unknown_tokens as f64 / self.eval_tokens as f64
        }
    }

    /// Accumulate token counts for held-out records.
    ///
    /// ## Arguments
    /// * `records` - resolved held-out records.
    /// * `unk` - the ``<unk>`` id.
    /// * `framing` - the framing the records were resolved with;
    ///   ``<sos>``/``<eos>`` ids are not counted.
    pub fn count_eval_tokens<'a, T, I>(
        &mut self,
        records: I,
        unk: T,
        framing: Framing,
    ) where
        T: TokenType,
        I: IntoIterator<Item = &'a Record<T>>,
    {
        let frame = match framing {
            Framing::Plain => 0,
            Framing::Tagged => 1,
        };
        for record in records {
            let ids = record.word_ids();
            let words = ids
                .get(frame..ids.len().saturating_sub(frame))
                .unwrap_or_default();
            self.eval_tokens += words.len();
            self.unknown_tokens += words.iter().filter(|&&id| id == unk).count();
        }
    }
}

impl core::fmt::Display for CorpusStats {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        write!(
            f,
            "train={} dev={} test={} (unlabeled={}) vocab={} labels={} unk={}/{} ({:.2}%)",
            self.train,
            self.dev,
            self.test,
            self.unlabeled_test,
            self.vocab_size,
            self.label_count,
            self.unknown_tokens,
            self.eval_tokens,
            100.0 * self.unknown_rate(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_eval_tokens() {
        let records: Vec<Record<u32>> = vec![
            Record::from_ids(vec![4, 1, 5]),
            Record::from_ids(vec![1]),
            Record::from_ids(vec![]),
        ];

        let mut stats = CorpusStats::default();
        assert_eq!(stats.unknown_rate(), 0.0);

        stats.count_eval_tokens(&records, 1, Framing::Plain);
        assert_eq!(stats.eval_tokens, 4);
        assert_eq!(stats.unknown_tokens, 2);
        assert_eq!(stats.unknown_rate(), 0.5);
        assert!(stats.to_string().ends_with("unk=2/4 (50.00%)"));
    }

    #[test]
    fn test_count_eval_tokens_skips_framing() {
        let records: Vec<Record<u32>> = vec![
            Record::from_ids(vec![2, 1, 3]),
            Record::from_ids(vec![2, 4, 5, 1, 3]),
            Record::from_ids(vec![2, 3]),
        ];

        let mut stats = CorpusStats::default();
        stats.count_eval_tokens(&records, 1, Framing::Tagged);
        assert_eq!(stats.eval_tokens, 4);
        assert_eq!(stats.unknown_tokens, 2);
        assert_eq!(stats.unknown_rate(), 0.5);
    }
}
