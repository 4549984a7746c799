//! Field-count limit for the splitter.

use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::error::Error;

const UNLIMITED: &str = "unlimited";

/// Maximum number of fields a line is split into.
///
/// Once `n - 1` fields have been produced, the rest of the line becomes the
/// final field verbatim.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    #[default]
    Unlimited,
    Fields(NonZeroUsize),
}

impl Limit {
    /// Builds a limit from a signed count; zero or negative means unlimited.
    #[must_use]
    pub fn from_count(count: i64) -> Self {
        usize::try_from(count)
            .ok()
            .and_then(NonZeroUsize::new)
            .map_or(Self::Unlimited, Self::Fields)
    }

    /// Returns true once `found` fields exhaust all but the final slot.
    #[must_use]
    pub fn reached(self, found: usize) -> bool {
        match self {
            Self::Unlimited => false,
            Self::Fields(n) => found + 1 >= n.get(),
        }
    }

    #[must_use]
    pub fn is_single(self) -> bool {
        matches!(self, Self::Fields(n) if n.get() == 1)
    }
}

impl FromStr for Limit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(UNLIMITED) {
            return Ok(Self::Unlimited);
        }

        s.parse::<i64>()
            .map(Self::from_count)
            .map_err(|e| Error::InvalidLimit(s.to_string(), e))
    }
}

impl Display for Limit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unlimited => f.write_str(UNLIMITED),
            Self::Fields(n) => write!(f, "{n}"),
        }
    }
}
