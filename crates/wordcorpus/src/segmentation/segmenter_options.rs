//! # Segmenter Options

use crate::{
    errors::CorpusResult,
    regex::RegexPattern,
    segmentation::{DEFAULT_WORD_PATTERN, RegexSegmenter, WhitespaceSegmenter, WordSegmenter},
};

/// Names of the built-in segmentation engines.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SegmenterKind {
    /// Split pre-segmented text on whitespace.
    #[default]
    Whitespace,

    /// Split text with a word regex.
    Regex,
}

/// Options for building a built-in [`WordSegmenter`].
#[derive(Debug, Clone, PartialEq)]
pub struct SegmenterOptions {
    /// Which engine to build.
    pub kind: SegmenterKind,

    /// The word pattern; only used by [`SegmenterKind::Regex`].
    pub pattern: RegexPattern,
}

impl Default for SegmenterOptions {
    fn default() -> Self {
        Self {
            kind: SegmenterKind::default(),
            pattern: DEFAULT_WORD_PATTERN.into(),
        }
    }
}

impl SegmenterOptions {
    /// Set the engine kind.
    pub fn with_kind(
        self,
        kind: SegmenterKind,
    ) -> Self {
        Self { kind, ..self }
    }

    /// Set the word pattern.
    pub fn with_pattern<P: Into<RegexPattern>>(
        self,
        pattern: P,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            ..self
        }
    }

    /// Build the configured segmenter.
    pub fn build(&self) -> CorpusResult<Box<dyn WordSegmenter>> {
        Ok(match self.kind {
            SegmenterKind::Whitespace => Box::new(WhitespaceSegmenter),
            SegmenterKind::Regex => Box::new(RegexSegmenter::new(self.pattern.clone())?),
        })
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_kind_names() {
        for kind in SegmenterKind::iter() {
            let name: &'static str = kind.into();
            assert_eq!(SegmenterKind::from_str(name).unwrap(), kind);
            assert_eq!(kind.to_string(), name);
        }
        assert_eq!(
            SegmenterKind::from_str("REGEX").unwrap(),
            SegmenterKind::Regex
        );
        assert!(SegmenterKind::from_str("mecab").is_err());
    }

    #[test]
    fn test_build() {
        let text = "a,b c";

        let seg = SegmenterOptions::default().build().unwrap();
        assert_eq!(seg.segment(text).unwrap(), vec!["a,b", "c"]);

        let seg = SegmenterOptions::default()
            .with_kind(SegmenterKind::Regex)
            .build()
            .unwrap();
        assert_eq!(seg.segment(text).unwrap(), vec!["a", ",", "b", "c"]);

        let seg = SegmenterOptions::default()
            .with_kind(SegmenterKind::Regex)
            .with_pattern(r"[^,\s]+")
            .build()
            .unwrap();
        assert_eq!(seg.segment(text).unwrap(), vec!["a", "b", "c"]);

        assert!(
            SegmenterOptions::default()
                .with_kind(SegmenterKind::Regex)
                .with_pattern("[")
                .build()
                .is_err()
        );
    }
}
