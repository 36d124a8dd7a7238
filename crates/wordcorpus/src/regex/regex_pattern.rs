//! # Regex Pattern Labeled Wrapper

use crate::regex::{ErrorWrapper, RegexWrapper};

/// Labeled wrapper for regex patterns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RegexPattern {
    /// This is a basic regex pattern, without extensions.
    Basic(String),

    /// This is a regex pattern that requires regex extensions.
    Fancy(String),

    /// The requirements of this pattern are unknown, and may require regex extensions.
    Adaptive(String),
}

impl<S: AsRef<str>> From<S> for RegexPattern {
    fn from(pattern: S) -> Self {
        Self::Adaptive(pattern.as_ref().to_string())
    }
}

impl RegexPattern {
    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
            Self::Adaptive(pattern) => pattern,
        }
    }

    /// Compile the regex pattern into a `RegexWrapper`.
    ///
    /// `Adaptive` patterns are compiled with `regex` first;
    /// and only compiled with `fancy_regex` if that fails.
    pub fn compile(&self) -> Result<RegexWrapper, ErrorWrapper> {
        match self {
            Self::Basic(pattern) => regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .map_err(ErrorWrapper::from),
            Self::Fancy(pattern) => fancy_regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .map_err(ErrorWrapper::from),
            Self::Adaptive(pattern) => {
                regex::Regex::new(pattern)
                    .map(RegexWrapper::from)
                    .or_else(|_| {
                        fancy_regex::Regex::new(pattern)
                            .map(RegexWrapper::from)
                            .map_err(ErrorWrapper::from)
                    })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adaptive_falls_up() {
        let basic: RegexPattern = r"\w+".into();
        assert_eq!(basic.as_str(), r"\w+");
        assert!(basic.compile().unwrap().is_basic());

        // look-ahead is not supported by `regex`.
        let fancy: RegexPattern = r"\w+(?=\s)".into();
        assert!(fancy.compile().unwrap().is_fancy());
    }

    #[test]
    fn test_bad_pattern() {
        let pattern = RegexPattern::Basic("(unclosed".to_string());
        assert!(pattern.compile().is_err());

        let pattern: RegexPattern = "(unclosed".into();
        assert!(pattern.compile().is_err());
    }
}
