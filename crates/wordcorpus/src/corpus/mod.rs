//! # Corpus Loaders
//!
//! Loaders read train/dev/test sources, construct [`crate::record::Record`]s,
//! build (or reuse) vocabularies, and resolve every record against them.
//!
//! Vocabularies are derived exclusively from the training split (or supplied
//! via [`CorpusOptions`]), and are frozen before dev/test are resolved.
//!
//! * [`ClassificationCorpus`] - ``{LABEL}\t{TEXT}`` files.
//! * [`Seq2SeqCorpus`] - ``{SOURCE}\t{TARGET}`` files.
//! * [`TextDataset`] - in-memory texts and labels.

mod classification;
mod corpus_options;
mod corpus_stats;
mod seq2seq;
mod split;
mod split_lines;
mod text_dataset;

#[doc(inline)]
pub use classification::ClassificationCorpus;
#[doc(inline)]
pub use corpus_options::CorpusOptions;
#[doc(inline)]
pub use corpus_stats::CorpusStats;
#[doc(inline)]
pub use seq2seq::{RecordPair, Seq2SeqCorpus};
#[doc(inline)]
pub use split::Split;
#[doc(inline)]
pub use split_lines::{NumberedLines, SplitLines};
#[doc(inline)]
pub use text_dataset::TextDataset;
