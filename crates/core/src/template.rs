//! Output format templates such as `{2}:{11}` or `{1} -> {3:-1}`.
//!
//! Every placeholder key is a range expression. Its fields are joined with a
//! single space when rendered.

use std::borrow::Cow;
use std::collections::HashMap;

use leon::{Template, Values};
use log::{debug, warn};

use crate::error::{Error, InvalidRangeReason, Result};
use crate::range::{parse_selection, Range};

/// A parsed format template with its placeholder ranges cached by expression
/// text.
///
/// Placeholders that do not parse as ranges are remembered, and fail each
/// render with the same error a fresh parse would give.
pub struct FieldTemplate<'s> {
    /// Absent when the format has an empty placeholder, which `leon` cannot
    /// represent; `invalid` is always set in that case.
    template: Option<Template<'s>>,
    ranges: HashMap<String, Range>,
    invalid: Option<(String, InvalidRangeReason)>,
}

impl<'s> FieldTemplate<'s> {
    /// Parses `format` and every placeholder it contains.
    ///
    /// Placeholder text is taken verbatim, so `{ 1 }` is as invalid as the
    /// range expression ` 1 `.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the template itself is malformed, for
    /// example an unclosed `{`.
    pub fn parse(format: &'s str, reversed: bool) -> Result<Self> {
        let placeholders = find_placeholders(format);
        let mut ranges = HashMap::new();
        let mut invalid = None;

        for &(open, close) in &placeholders {
            let key = &format[open + 1..close - 1];
            match parse_selection(key) {
                Ok(selection) => {
                    ranges.insert(
                        key.to_string(),
                        Range {
                            selection,
                            reversed,
                        },
                    );
                }
                Err(reason) => {
                    warn!("Format placeholder `{{{key}}}` is not a valid range: {reason}");
                    invalid.get_or_insert_with(|| (key.to_string(), reason));
                }
            }
        }

        let template = if placeholders
            .iter()
            .any(|&(open, close)| format[open + 1..close - 1].trim().is_empty())
        {
            validate_around_empty_placeholders(format, &placeholders)?;
            None
        } else {
            Some(Template::parse(format)?)
        };

        debug!("Parsed format template with {} range(s)", ranges.len());
        Ok(Self {
            template,
            ranges,
            invalid,
        })
    }

    /// Renders the template against one line's fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if any placeholder is not a valid
    /// range. The caller may skip the line and carry on.
    pub fn render<S: AsRef<str>>(&self, fields: &[S]) -> Result<String> {
        if let Some((expression, reason)) = &self.invalid {
            return Err(Error::invalid_range(expression, reason.clone()));
        }

        let values = SelectedFields {
            ranges: &self.ranges,
            fields,
        };
        match &self.template {
            Some(template) => Ok(template.render(&values)?),
            None => Err(Error::invalid_range("", InvalidRangeReason::Empty)),
        }
    }
}

/// Byte spans of every `{...}` placeholder, braces included. A backslash
/// escapes the next character, as in `leon`.
fn find_placeholders(format: &str) -> Vec<(usize, usize)> {
    let bytes = format.as_bytes();
    let mut placeholders = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'{' => {
                let next = bytes[i + 1..]
                    .iter()
                    .position(|&b| b == b'{' || b == b'}')
                    .map(|offset| i + 1 + offset);
                match next {
                    Some(close) if bytes[close] == b'}' => {
                        placeholders.push((i, close + 1));
                        i = close + 1;
                    }
                    _ => i += 1,
                }
            }
            _ => i += 1,
        }
    }

    placeholders
}

/// Checks the text between empty placeholders for syntax errors, so a
/// malformed template is still rejected up front.
fn validate_around_empty_placeholders(
    format: &str,
    placeholders: &[(usize, usize)],
) -> Result<()> {
    let mut start = 0;
    for &(open, close) in placeholders {
        if format[open + 1..close - 1].trim().is_empty() {
            Template::parse(&format[start..open])?;
            start = close;
        }
    }
    Template::parse(&format[start..])?;
    Ok(())
}

struct SelectedFields<'t, 'f, S> {
    ranges: &'t HashMap<String, Range>,
    fields: &'f [S],
}

impl<S: AsRef<str>> Values for SelectedFields<'_, '_, S> {
    fn get_value(&self, key: &str) -> Option<Cow<'_, str>> {
        let range = self.ranges.get(key)?;

        match range.select(self.fields).as_slice() {
            [field] => Some(Cow::Borrowed(*field)),
            selected => Some(Cow::Owned(selected.join(" "))),
        }
    }
}
