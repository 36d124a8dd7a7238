//! # Tab-Separated Line Parsing
//!
//! Corpus files hold one record per line:
//! * classification: ``{LABEL}\t{TEXT}``; the text may itself contain tabs.
//! * seq2seq: ``{SOURCE}\t{TARGET}``; exactly two fields.

use std::io::BufRead;

use crate::errors::CorpusResult;

/// Split a ``{LABEL}\t{TEXT}`` line at the first tab.
///
/// ## Returns
/// `None` if the line has no tab.
pub fn split_labeled(line: &str) -> Option<(&str, &str)> {
    line.split_once('\t')
}

/// Split a ``{SOURCE}\t{TARGET}`` line.
///
/// ## Returns
/// `None` unless the line has exactly two tab-separated fields.
pub fn split_pair(line: &str) -> Option<(&str, &str)> {
    let (source, target) = line.split_once('\t')?;
    if target.contains('\t') {
        None
    } else {
        Some((source, target))
    }
}

/// Read the non-blank lines of a reader.
///
/// Surrounding whitespace is trimmed, except tabs, which are field
/// separators: ``"neg\t"`` keeps its empty text field.
///
/// ## Returns
/// ``(line_number, line)`` pairs; line numbers are 1-based physical lines,
/// so they stay meaningful in error messages when blank lines are skipped.
pub fn read_content_lines<R: BufRead>(reader: R) -> CorpusResult<Vec<(usize, String)>> {
    let mut lines = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let trimmed = line.trim_matches(|c: char| c != '\t' && c.is_whitespace());
        lines.push((idx + 1, trimmed.to_string()));
    }
    Ok(lines)
}
