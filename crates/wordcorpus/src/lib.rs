//! # `wordcorpus` Vocabulary-Indexed Text Corpora
//!
//! `wordcorpus` turns tab-separated text files into integer id sequences
//! for text classification and sequence-to-sequence model training.
//!
//! See:
//! * [`segmentation`] to split text into words.
//! * [`vocab`] for word / label vocabularies and reserved tokens.
//! * [`corpus`] to load train/dev/test splits.
//!
//! Vocabularies are induced from the training split in first-occurrence
//! order, after the reserved tokens:
//!
//! | id | [`vocab::SpecialTokens::Plain`] | [`vocab::SpecialTokens::Tagged`] |
//! |----|-------------------------|--------------------------|
//! | 0  | ``<pad>``               | ``<pad>``                |
//! | 1  | ``<unk>``               | ``<unk>``                |
//! | 2  | first corpus word       | ``<sos>``                |
//! | 3  | ...                     | ``<eos>``                |
//!
//! Dev/test words missing from the vocabulary resolve to ``<unk>``;
//! labels have no such fallback.
//!
//! ## Loading a Classification Corpus
//!
//! ```rust,no_run
//! use wordcorpus::{
//!     corpus::{ClassificationCorpus, CorpusOptions},
//!     segmentation::{SegmenterKind, SegmenterOptions},
//! };
//!
//! # fn main() -> wordcorpus::errors::CorpusResult<()> {
//! let options = CorpusOptions::<u32>::default()
//!     .with_segmenter_options(&SegmenterOptions::default().with_kind(SegmenterKind::Regex))?;
//!
//! let corpus = ClassificationCorpus::load_from_paths(
//!     options,
//!     "data/train.tsv",
//!     Some("data/dev.tsv"),
//!     Some("data/test.tsv"),
//! )?;
//!
//! for record in corpus.train() {
//!     println!("{:?} {:?}", record.label_id(), record.word_ids());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

pub mod corpus;
pub mod errors;
pub mod lines;
pub mod record;
pub mod regex;
pub mod segmentation;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use corpus::{ClassificationCorpus, CorpusOptions, Seq2SeqCorpus, Split, TextDataset};
#[doc(inline)]
pub use errors::{CorpusError, CorpusResult};
#[doc(inline)]
pub use record::Record;
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{LabelVocab, WordVocab};
