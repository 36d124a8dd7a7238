//! # Word Segmentation
//!
//! Adapters which turn raw text into an ordered sequence of word tokens.
//!
//! Segmentation engines are external collaborators; this module only
//! defines the seam ([`WordSegmenter`]) and a couple of built-in engines:
//! * [`WhitespaceSegmenter`] - for pre-segmented ("wakati") text.
//! * [`RegexSegmenter`] - word split by a regex pattern.
//!
//! [`SegmenterOptions`] selects and builds one of the built-in engines by name.

mod regex_segmenter;
mod segmenter_options;
mod whitespace_segmenter;
mod word_segmenter;

#[doc(inline)]
pub use regex_segmenter::{DEFAULT_WORD_PATTERN, RegexSegmenter};
#[doc(inline)]
pub use segmenter_options::{SegmenterKind, SegmenterOptions};
#[doc(inline)]
pub use whitespace_segmenter::WhitespaceSegmenter;
#[doc(inline)]
pub use word_segmenter::WordSegmenter;
