use std::num::ParseIntError;

use leon::{ParseError, RenderError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid range `{}`: {}", .expression, .reason)]
    InvalidRange {
        expression: String,
        reason: InvalidRangeReason,
    },

    #[error("Line is too big: exceeds the {} byte limit", .limit)]
    LineTooLarge { limit: usize },

    #[error("Failed to parse quoted field: {}", .0)]
    Tokenize(#[from] shell_words::ParseError),

    #[error("IO error: {}", .0)]
    Io(#[from] std::io::Error),

    #[error("Error parsing format template: {}", .0)]
    Parse(#[from] ParseError),

    #[error("Error rendering format template: {}", .0)]
    Render(#[from] RenderError),

    #[error("Invalid limit `{}`: {}", .0, .1)]
    InvalidLimit(String, ParseIntError),
}

/// Why a range expression was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidRangeReason {
    #[error("empty range string")]
    Empty,

    #[error("expected at most one `:`")]
    TooManyColons,

    #[error("failed to parse bound: {}", .0)]
    Bound(#[from] ParseIntError),
}

impl Error {
    pub fn invalid_range(expression: &str, reason: InvalidRangeReason) -> Self {
        Self::InvalidRange {
            expression: expression.to_string(),
            reason,
        }
    }

    /// True for errors that only affect the current line; processing may
    /// skip that line and continue.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Tokenize(_) | Self::InvalidRange { .. } | Self::Render(_)
        )
    }
}
