//! Row splitting for raw CSV text
//!
//! Rows are newline-delimited. Each row is trimmed, which also strips the
//! carriage return left behind by CRLF exports, and blank rows are dropped.
//! The field delimiter is never trimmed, so an empty last column survives in
//! tab-separated exports.

/// One non-blank row of the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow<'a> {
    /// 1-based physical line number in the source text
    pub line_number: usize,

    /// Row content with surrounding whitespace removed
    pub text: &'a str,
}

/// Split raw text into ordered, non-blank rows (header included)
pub fn split_rows(text: &str, delimiter: char) -> Vec<RawRow<'_>> {
    text.split('\n')
        .enumerate()
        .filter_map(|(index, line)| {
            if line.trim().is_empty() {
                return None;
            }

            Some(RawRow {
                line_number: index + 1,
                text: line.trim_matches(|c: char| c.is_whitespace() && c != delimiter),
            })
        })
        .collect()
}
