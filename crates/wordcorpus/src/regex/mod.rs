//! # Regex Utilities
//!
//! Word split patterns are frequently written with extended regex machinery
//! (look-around, possessive quantifiers) provided by the [`fancy_regex`] crate;
//! but naturally, this has performance costs. We'd prefer to avoid using the
//! [`fancy_regex`] crate when possible, falling back on the standard [`regex`]
//! crate when patterns permit this.
//!
//! * Labeling Patterns - [`RegexPattern`]
//!   * [`RegexPattern::Basic`] - a pattern which was written for basic regular expressions.
//!   * [`RegexPattern::Fancy`] - a pattern which was written for regex extensions.
//!   * [`RegexPattern::Adaptive`] - unknown target, try basic; then fall-up to fancy.
//! * Wrapping Compiled Regex - [`RegexWrapper`]
//!
//! The [`RegexWrapper`] type supports only one operation, ``find_iter()``.

mod regex_pattern;
mod regex_wrapper;

#[doc(inline)]
pub use regex_pattern::*;
#[doc(inline)]
pub use regex_wrapper::*;
