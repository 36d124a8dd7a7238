//! # Regex Segmenter

use crate::{
    errors::CorpusResult,
    regex::{RegexPattern, RegexWrapper},
    segmentation::WordSegmenter,
};

/// The default word pattern: runs of word characters, or runs of punctuation.
pub const DEFAULT_WORD_PATTERN: &str = r"\w+|[^\w\s]+";

/// Word segmenter which emits every match of a word pattern.
///
/// Text between matches is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct RegexSegmenter {
    regex: RegexWrapper,
}

impl Default for RegexSegmenter {
    fn default() -> Self {
        Self {
            regex: regex::Regex::new(DEFAULT_WORD_PATTERN)
                .expect("default word pattern compiles")
                .into(),
        }
    }
}

impl From<RegexWrapper> for RegexSegmenter {
    fn from(regex: RegexWrapper) -> Self {
        Self { regex }
    }
}

impl RegexSegmenter {
    /// Compile a new segmenter from a pattern.
    ///
    /// ## Arguments
    /// * `pattern` - the word pattern; plain strings are compiled adaptively.
    pub fn new<P: Into<RegexPattern>>(pattern: P) -> CorpusResult<Self> {
        Ok(Self {
            regex: pattern.into().compile()?,
        })
    }

    /// Get the compiled word regex.
    pub fn regex(&self) -> &RegexWrapper {
        &self.regex
    }
}

impl WordSegmenter for RegexSegmenter {
    fn segment(
        &self,
        text: &str,
    ) -> CorpusResult<Vec<String>> {
        let mut words = Vec::new();
        for m in self.regex.find_iter(text) {
            words.push(m?.to_string());
        }
        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pattern() {
        let seg = RegexSegmenter::default();
        assert!(seg.regex().is_basic());
        assert_eq!(
            seg.segment("Hello, world!! It's 42.").unwrap(),
            vec!["Hello", ",", "world", "!!", "It", "'", "s", "42", "."]
        );
        assert!(seg.segment("   ").unwrap().is_empty());
    }

    #[test]
    fn test_custom_pattern() {
        let seg = RegexSegmenter::new(r"[a-z]+").unwrap();
        assert_eq!(seg.segment("abc DEF ghi").unwrap(), vec!["abc", "ghi"]);

        let seg = RegexSegmenter::new(r"\w+(?=!)").unwrap();
        assert!(seg.regex().is_fancy());
        assert_eq!(seg.segment("stop! go now!").unwrap(), vec!["stop", "now"]);
    }

    #[test]
    fn test_bad_pattern() {
        assert!(RegexSegmenter::new("(").is_err());
    }
}
