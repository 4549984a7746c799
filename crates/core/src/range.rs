//! Field range expressions.
//!
//! A range is either an exact index (`3`, `-1`) or an inclusive span
//! (`2:4`, `2:-1`, `:3`, `3:`, `:`). Indexes are 1-based and negative values
//! count from the end, so `-1` is the last field. `0` is accepted as an alias
//! for the first field.

use std::str::FromStr;

use crate::error::{Error, InvalidRangeReason, Result};

const OPEN_START: isize = 0;
const OPEN_END: isize = isize::MAX;

/// What part of a field sequence a [`Range`] picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Exact(isize),
    Bounded { start: isize, end: isize },
}

/// A parsed range expression. Immutable once parsed and applied by reference
/// to as many field sequences as needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub selection: Selection,
    /// Emit the selected fields last to first.
    pub reversed: bool,
}

impl Range {
    /// Parses a range expression.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if the expression is empty, contains
    /// more than one `:`, or has a bound that is not an integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_core::range::Range;
    ///
    /// let range = Range::parse("2:-1", false)?;
    /// assert_eq!(range.select(&["a", "b", "c"]), vec!["b", "c"]);
    /// # Ok::<(), field_core::error::Error>(())
    /// ```
    pub fn parse(expression: &str, reversed: bool) -> Result<Self> {
        parse_selection(expression)
            .map(|selection| Self {
                selection,
                reversed,
            })
            .map_err(|reason| Error::invalid_range(expression, reason))
    }

    /// Picks the fields this range covers.
    ///
    /// Never fails: indexes past either end, an empty input, or a span whose
    /// start lies after its end all give an empty result. Span bounds that
    /// overshoot are clamped to the available fields.
    #[must_use]
    pub fn select<'a, S: AsRef<str>>(&self, fields: &'a [S]) -> Vec<&'a str> {
        let len = isize::try_from(fields.len()).unwrap_or(isize::MAX);
        if len == 0 {
            return Vec::new();
        }

        match self.selection {
            Selection::Exact(index) => {
                let index = normalize(index, len);
                if index < 0 || index >= len {
                    return Vec::new();
                }
                vec![fields[index.unsigned_abs()].as_ref()]
            }
            Selection::Bounded { start, end } => {
                let start = normalize(start, len);
                let end = normalize(end, len);
                if start > end || start >= len {
                    return Vec::new();
                }

                let start = start.clamp(0, len - 1).unsigned_abs();
                let end = end.clamp(0, len - 1).unsigned_abs();
                let selected = fields[start..=end].iter().map(|field| field.as_ref());

                if self.reversed {
                    selected.rev().collect()
                } else {
                    selected.collect()
                }
            }
        }
    }
}

impl FromStr for Range {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, false)
    }
}

/// Applies every range to the same fields and concatenates the results in
/// order. A field picked by several ranges appears several times.
#[must_use]
pub fn select_all<'a, S: AsRef<str>>(ranges: &[Range], fields: &'a [S]) -> Vec<&'a str> {
    ranges.iter().flat_map(|range| range.select(fields)).collect()
}

pub(crate) fn parse_selection(
    expression: &str,
) -> std::result::Result<Selection, InvalidRangeReason> {
    if expression.is_empty() {
        return Err(InvalidRangeReason::Empty);
    }

    let Some((start, end)) = expression.split_once(':') else {
        return Ok(Selection::Exact(expression.parse()?));
    };

    if end.contains(':') {
        return Err(InvalidRangeReason::TooManyColons);
    }

    let start = match start {
        "" => OPEN_START,
        bound => bound.parse()?,
    };
    let end = match end {
        "" => OPEN_END,
        bound => bound.parse()?,
    };

    Ok(Selection::Bounded { start, end })
}

/// Maps a 1-based or negative index onto a 0-based one.
fn normalize(index: isize, len: isize) -> isize {
    match index {
        i if i < 0 => len + i,
        i if i > 0 => i - 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: [&str; 5] = ["a", "b", "c", "d", "e"];

    fn select(expression: &str, reversed: bool, fields: &[&str]) -> Vec<String> {
        let range = Range::parse(expression, reversed)
            .unwrap_or_else(|e| panic!("parse({expression:?}) failed: {e}"));
        range.select(fields).into_iter().map(String::from).collect()
    }

    fn assert_selects(cases: &[(&str, bool, Vec<&str>)]) {
        for (expression, reversed, want) in cases {
            assert_eq!(
                select(expression, *reversed, &FIELDS),
                *want,
                "select({expression:?}, reversed={reversed})"
            );
        }
    }

    #[test]
    fn test_parse_shapes() {
        assert_eq!(
            Range::parse(":", false).unwrap().selection,
            Selection::Bounded {
                start: OPEN_START,
                end: OPEN_END
            }
        );
        assert_eq!(
            Range::parse("-3", true).unwrap(),
            Range {
                selection: Selection::Exact(-3),
                reversed: true
            }
        );
        assert_eq!(
            Range::parse("2:", false).unwrap().selection,
            Selection::Bounded {
                start: 2,
                end: OPEN_END
            }
        );
        assert_eq!(
            "+2:-1".parse::<Range>().unwrap().selection,
            Selection::Bounded { start: 2, end: -1 }
        );
    }

    #[test]
    fn test_parse_errors() {
        let cases = [
            ("", InvalidRangeReason::Empty),
            ("1:2:3", InvalidRangeReason::TooManyColons),
            ("::", InvalidRangeReason::TooManyColons),
        ];
        for (expression, reason) in cases {
            match Range::parse(expression, false) {
                Err(Error::InvalidRange {
                    expression: got,
                    reason: got_reason,
                }) => {
                    assert_eq!(got, expression);
                    assert_eq!(got_reason, reason);
                }
                other => panic!("parse({expression:?}) = {other:?}"),
            }
        }

        for expression in ["x", "1:x", "x:1", "1.5", " 1"] {
            assert!(
                matches!(
                    Range::parse(expression, false),
                    Err(Error::InvalidRange {
                        reason: InvalidRangeReason::Bound(_),
                        ..
                    })
                ),
                "parse({expression:?}) should fail on its bound"
            );
        }
    }

    #[test]
    fn test_invalid_range_message() {
        let err = Range::parse("1:2:3", false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid range `1:2:3`: expected at most one `:`"
        );
    }

    #[test]
    fn test_exact_selection() {
        assert_selects(&[
            ("1", false, vec!["a"]),
            ("3", false, vec!["c"]),
            ("5", false, vec!["e"]),
            ("-1", false, vec!["e"]),
            ("-2", false, vec!["d"]),
            ("0", false, vec!["a"]),
            ("10", false, vec![]),
            ("-10", false, vec![]),
            ("-5", true, vec!["a"]),
        ]);
    }

    #[test]
    fn test_bounded_selection() {
        assert_selects(&[
            ("1:5", false, vec!["a", "b", "c", "d", "e"]),
            ("3:5", false, vec!["c", "d", "e"]),
            ("2:-1", false, vec!["b", "c", "d", "e"]),
            ("-4:-2", false, vec!["b", "c", "d"]),
            (":3", false, vec!["a", "b", "c"]),
            ("3:", false, vec!["c", "d", "e"]),
            (":", false, vec!["a", "b", "c", "d", "e"]),
        ]);
    }

    #[test]
    fn test_reversed_bounded_selection() {
        assert_selects(&[
            ("1:5", true, vec!["e", "d", "c", "b", "a"]),
            ("1:3", true, vec!["c", "b", "a"]),
            ("2:4", true, vec!["d", "c", "b"]),
            ("2:-2", true, vec!["d", "c", "b"]),
            ("-4:-2", true, vec!["d", "c", "b"]),
            (":3", true, vec!["c", "b", "a"]),
            ("3:", true, vec!["e", "d", "c"]),
            (":", true, vec!["e", "d", "c", "b", "a"]),
        ]);
    }

    #[test]
    fn test_boundary_clamping() {
        assert_selects(&[
            ("4:5", false, vec!["d", "e"]),
            ("4:5", true, vec!["e", "d"]),
            ("4:10", false, vec!["d", "e"]),
            ("4:10", true, vec!["e", "d"]),
            ("-10:2", false, vec!["a", "b"]),
            ("-10:2", true, vec!["b", "a"]),
            ("0:2", false, vec!["a", "b"]),
            ("0:2", true, vec!["b", "a"]),
        ]);
    }

    #[test]
    fn test_inverted_or_out_of_bounds_span_is_empty() {
        for expression in ["4:2", "10:5", "3:1", "-1:-3", "100:200"] {
            for reversed in [false, true] {
                assert!(
                    select(expression, reversed, &FIELDS).is_empty(),
                    "select({expression:?}, reversed={reversed})"
                );
            }
        }
    }

    #[test]
    fn test_small_inputs() {
        assert!(select("1:3", false, &[]).is_empty());
        assert!(select("1", false, &[]).is_empty());
        assert_eq!(select("1", false, &["x"]), ["x"]);
        assert_eq!(select("1", true, &["x"]), ["x"]);
        assert_eq!(select("1:2", false, &["x", "y"]), ["x", "y"]);
        assert_eq!(select("1:2", true, &["x", "y"]), ["y", "x"]);
    }

    #[test]
    fn test_reversal_leaves_input_untouched() {
        let fields: Vec<String> = FIELDS.iter().map(ToString::to_string).collect();
        let range = Range::parse(":", true).unwrap();

        assert_eq!(range.select(&fields), ["e", "d", "c", "b", "a"]);
        assert_eq!(fields, FIELDS);
    }

    #[test]
    fn test_select_all_concatenates_in_order() {
        let ranges = [
            Range::parse("-1", false).unwrap(),
            Range::parse("1:2", false).unwrap(),
            Range::parse("2", false).unwrap(),
            Range::parse("9", false).unwrap(),
        ];
        assert_eq!(select_all(&ranges, &FIELDS), ["e", "a", "b", "b"]);
    }
}
