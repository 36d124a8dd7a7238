//! # Vocabulary
//!
//! Word and label vocabularies.
//!
//! * [`WordVocab`] - ``{ word <-> id }``; seeded with reserved [`SpecialTokens`],
//!   unknown words resolve to ``<unk>``.
//! * [`WordVocabBuilder`] - induces a [`WordVocab`] in first-occurrence order.
//! * [`LabelVocab`] - ``{ label <-> id }``; no reserved labels, no fallback.

pub mod label_vocab;
pub mod special_tokens;
pub mod word_vocab;

#[doc(inline)]
pub use label_vocab::LabelVocab;
#[doc(inline)]
pub use special_tokens::{EOS, Framing, PAD, SOS, SpecialTokens, UNK};
#[doc(inline)]
pub use word_vocab::{WordVocab, WordVocabBuilder};
