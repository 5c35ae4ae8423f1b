//! Record-line tokenisation for index data files.
//!
//! A line only qualifies as a data record when it starts with the field
//! delimiter. The remainder is split on that delimiter into one token per
//! declared field; tokens that are empty after trimming become absent
//! cells, and a token count that disagrees with the declared field count
//! fails the whole parse.

use crate::{Error, Result};

/// Whether a line qualifies as a data record
pub fn is_record_line(line: &str, delimiter: char) -> bool {
    line.starts_with(delimiter)
}

/// Split a record line into one raw token per declared field.
///
/// The leading delimiter is stripped, the body trimmed, and one trailing
/// delimiter removed so the conventional closing `|` does not read as an
/// extra empty token. Present tokens are trimmed; empty tokens become
/// `None`.
pub fn parse_record_line(
    line: &str,
    delimiter: char,
    expected: usize,
) -> Result<Vec<Option<String>>> {
    let body = line.strip_prefix(delimiter).unwrap_or(line).trim();
    let body = body.strip_suffix(delimiter).unwrap_or(body);

    let tokens: Vec<Option<String>> = body
        .split(delimiter)
        .map(|token| {
            let trimmed = token.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect();

    if tokens.len() != expected {
        return Err(Error::record_layout(expected, tokens.len(), line.trim()));
    }

    Ok(tokens)
}
