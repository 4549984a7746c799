//! Splitting a line into fields.
//!
//! Both delimiter modes collapse runs of consecutive separators into a single
//! split point, so a field sequence never contains an empty string.

use crate::limit::Limit;

const MIN_RESULT_SIZE: usize = 30;

/// Classifies a character as a separator.
pub type Predicate = fn(char) -> bool;

/// How a line is broken into fields. Chosen once from configuration.
#[derive(Debug, Clone)]
pub enum Delimiter {
    /// Split on runs of an exact substring.
    Literal(String),
    /// Split on runs of characters matching the predicate.
    Predicate(Predicate),
}

impl Default for Delimiter {
    fn default() -> Self {
        Self::Predicate(char::is_whitespace)
    }
}

impl From<Option<String>> for Delimiter {
    fn from(literal: Option<String>) -> Self {
        literal.map_or_else(Self::default, Self::Literal)
    }
}

/// Splits `line` into fields.
///
/// With `Limit::Fields(n)` at most `n` fields are produced; the last one holds
/// the rest of the line verbatim, separators included. An empty line or an
/// empty literal delimiter produces no fields.
///
/// # Examples
///
/// ```
/// use field_core::limit::Limit;
/// use field_core::split::{split, Delimiter};
///
/// let fields = split(b"a v c d     c", &Delimiter::Literal(" ".into()), Limit::from_count(4));
/// assert_eq!(fields, vec!["a", "v", "c", "d     c"]);
/// ```
#[must_use]
pub fn split(line: &[u8], delimiter: &Delimiter, limit: Limit) -> Vec<String> {
    match delimiter {
        Delimiter::Literal(literal) => split_literal(line, literal.as_bytes(), limit),
        Delimiter::Predicate(is_separator) => split_predicate(line, *is_separator, limit),
    }
}

fn split_literal(line: &[u8], delimiter: &[u8], limit: Limit) -> Vec<String> {
    if line.is_empty() || delimiter.is_empty() {
        return Vec::new();
    }
    if limit.is_single() {
        return vec![to_field(line)];
    }

    let d = delimiter.len();
    let mut fields = Vec::with_capacity(MIN_RESULT_SIZE);
    let mut start = 0;
    let mut i = 0;

    while i + d <= line.len() {
        if !line[i..].starts_with(delimiter) {
            i += 1;
            continue;
        }

        if start < i {
            fields.push(to_field(&line[start..i]));
        }
        i += d;
        while line[i..].starts_with(delimiter) {
            i += d;
        }

        if limit.reached(fields.len()) {
            push_remainder(&mut fields, &line[i..]);
            return fields;
        }
        start = i;
    }

    push_remainder(&mut fields, &line[start..]);
    fields
}

fn split_predicate(line: &[u8], is_separator: Predicate, limit: Limit) -> Vec<String> {
    if line.is_empty() {
        return Vec::new();
    }
    if limit.is_single() {
        return vec![to_field(line)];
    }

    let mut fields = Vec::with_capacity(MIN_RESULT_SIZE);
    let mut start = 0;
    let mut i = 0;

    while i < line.len() {
        let (c, width) = decode_char(&line[i..]);
        if !is_separator(c) {
            i += width;
            continue;
        }

        if start < i {
            fields.push(to_field(&line[start..i]));
        }
        i += width;
        while i < line.len() {
            let (c, width) = decode_char(&line[i..]);
            if !is_separator(c) {
                break;
            }
            i += width;
        }

        if limit.reached(fields.len()) {
            push_remainder(&mut fields, &line[i..]);
            return fields;
        }
        start = i;
    }

    push_remainder(&mut fields, &line[start..]);
    fields
}

// The remainder is only a field when it has content.
fn push_remainder(fields: &mut Vec<String>, remainder: &[u8]) {
    if !remainder.is_empty() {
        fields.push(to_field(remainder));
    }
}

fn to_field(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Decodes the first character of `bytes`. Anything that is not a valid
/// UTF-8 sequence is reported as one replacement character of width 1.
fn decode_char(bytes: &[u8]) -> (char, usize) {
    let window = &bytes[..bytes.len().min(4)];
    let valid = match std::str::from_utf8(window) {
        Ok(valid) => valid,
        Err(e) => std::str::from_utf8(&window[..e.valid_up_to()]).unwrap_or_default(),
    };

    match valid.chars().next() {
        Some(c) => (c, c.len_utf8()),
        None => (char::REPLACEMENT_CHARACTER, 1),
    }
}
