//! Quote-aware field splitting
//!
//! Fields may be wrapped in double quotes so they can carry the delimiter. Inside
//! a quoted field a doubled quote (`""`) stands for one literal quote. The
//! scanner never fails: an unterminated quote simply runs to the end of the row.

use crate::constants::QUOTE_CHAR;

/// Split one row into unquoted field values
pub fn split_fields(row: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut inside_quotes = false;
    let mut chars = row.chars().peekable();

    while let Some(c) = chars.next() {
        if c == QUOTE_CHAR {
            if inside_quotes && chars.peek() == Some(&QUOTE_CHAR) {
                current.push(QUOTE_CHAR);
                chars.next();
            } else {
                inside_quotes = !inside_quotes;
            }
        } else if c == delimiter && !inside_quotes {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    fields.push(current);
    fields
}
