//! Per-run configuration for field extraction.
//!
//! The configuration is built once from the command line and passed by
//! reference to the per-line processing; there is no global state.

use crate::error::Result;
use crate::input::DEFAULT_MAX_LINE_SIZE;
use crate::limit::Limit;
use crate::split::{split, Delimiter};
use crate::tokenize::tokenize;

/// Where a line's fields come from.
#[derive(Debug, Clone)]
pub enum FieldSource {
    /// Split on a delimiter, collapsing separator runs.
    Split(Delimiter),
    /// Split into shell words, honouring quotes.
    Shell,
}

impl Default for FieldSource {
    fn default() -> Self {
        Self::Split(Delimiter::default())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source: FieldSource,
    /// Only applies to [`FieldSource::Split`].
    pub limit: Limit,
    /// Emit each range's selection last to first.
    pub reversed: bool,
    /// Suppress output lines whose selection is empty.
    pub ignore_empty: bool,
    pub max_line_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: FieldSource::default(),
            limit: Limit::Unlimited,
            reversed: false,
            ignore_empty: false,
            max_line_size: DEFAULT_MAX_LINE_SIZE,
        }
    }
}

impl Config {
    /// Breaks one line into fields according to the configured source.
    ///
    /// # Errors
    ///
    /// Only the shell source can fail, on malformed quoting.
    pub fn fields(&self, line: &[u8]) -> Result<Vec<String>> {
        match &self.source {
            FieldSource::Split(delimiter) => Ok(split(line, delimiter, self.limit)),
            FieldSource::Shell => tokenize(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_splits_on_whitespace() {
        let config = Config::default();
        assert_eq!(config.fields(b" a\tb  c ").unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_limit_applies_to_split_source() {
        let config = Config {
            source: FieldSource::Split(Delimiter::Literal(":".to_string())),
            limit: Limit::from_count(2),
            ..Config::default()
        };
        assert_eq!(
            config.fields(b"root:x:0:0").unwrap(),
            vec!["root", "x:0:0"]
        );
    }

    #[test]
    fn test_shell_source_ignores_limit() {
        let config = Config {
            source: FieldSource::Shell,
            limit: Limit::from_count(1),
            ..Config::default()
        };
        assert_eq!(
            config.fields(b"rm 'a b' c").unwrap(),
            vec!["rm", "a b", "c"]
        );
        assert!(config.fields(b"rm 'a b").is_err());
    }

    #[test]
    fn test_config_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Config>();
        assert_send_sync::<crate::range::Range>();
    }
}
