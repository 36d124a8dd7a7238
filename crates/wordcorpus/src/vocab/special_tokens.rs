//! # Special Tokens
//!
//! Reserved words which occupy the lowest ids of every induced vocabulary.

/// Padding token; always id 0.
pub const PAD: &str = "<pad>";

/// Unknown-word token; always id 1.
pub const UNK: &str = "<unk>";

/// Start-of-sequence token; id 2 in [`SpecialTokens::Tagged`] vocabularies.
pub const SOS: &str = "<sos>";

/// End-of-sequence token; id 3 in [`SpecialTokens::Tagged`] vocabularies.
pub const EOS: &str = "<eos>";

/// Which reserved tokens seed a vocabulary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialTokens {
    /// ``<pad>=0, <unk>=1``.
    Plain,

    /// ``<pad>=0, <unk>=1, <sos>=2, <eos>=3``.
    #[default]
    Tagged,
}

impl SpecialTokens {
    /// The reserved words, in id order.
    pub fn words(&self) -> &'static [&'static str] {
        match self {
            Self::Plain => &[PAD, UNK],
            Self::Tagged => &[PAD, UNK, SOS, EOS],
        }
    }

    /// The number of reserved ids.
    pub fn len(&self) -> usize {
        self.words().len()
    }

    /// Always false; every reservation holds at least ``<pad>`` and ``<unk>``.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Whether resolved word id sequences are framed by ``<sos>`` / ``<eos>``.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framing {
    /// Ids only.
    #[default]
    Plain,

    /// ``<sos> ids... <eos>``.
    Tagged,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_order() {
        assert_eq!(SpecialTokens::Plain.words(), &["<pad>", "<unk>"]);
        assert_eq!(
            SpecialTokens::Tagged.words(),
            &["<pad>", "<unk>", "<sos>", "<eos>"]
        );
        assert_eq!(SpecialTokens::Plain.len(), 2);
        assert_eq!(SpecialTokens::Tagged.len(), 4);
    }
}
