//! Command-line argument parsing.
//!
//! This module defines the command-line interface of `field` and turns the
//! parsed arguments into a [`Config`] and a list of [`Range`]s.

use clap::Parser;
use field_core::config::{Config, FieldSource};
use field_core::error::Result;
use field_core::input::DEFAULT_MAX_LINE_SIZE;
use field_core::limit::Limit;
use field_core::range::Range;
use field_core::split::Delimiter;

const EXAMPLES: &str = "\
Examples:
  # Kill processes by PID, the second column of ps output
  ps aux | grep bad-process | field 2 | xargs kill

  # Print usernames from /etc/passwd, skipping lines with no fields
  field -i -d : 1 < /etc/passwd

  # Show just the command, keeping its arguments together
  ps aux | field -n 11 11

  # Print PID and command as <PID>:<COMMAND>
  ps aux | field -n 11 -f '{2}:{11}'

  # Print the last quoted word of each line
  rm -vrf bad-directory | field -s -- -1";

/// Extract and print selected fields from each input line.
///
/// Each RANGE is an index (`2`, `-1`) or an inclusive span (`2:4`, `3:`,
/// `:-2`, `:`). Indexes are 1-based; negative indexes count from the end.
#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = "field", version, after_help = EXAMPLES)]
#[command(term_width = 0)] // Just to make testing across clap features easier
#[allow(clippy::struct_excessive_bools)] // silence clippy's warning on this struct
pub struct Args {
    /// Literal delimiter separating fields.
    ///
    /// Runs of the delimiter count as one separator. If not provided, fields
    /// are separated by runs of whitespace.
    #[arg(long, short = 'd')]
    pub delimiter: Option<String>,

    /// Split lines into words the way a shell does, honouring quotes.
    #[arg(long = "shlex", short = 's', action, conflicts_with = "delimiter")]
    pub shell: bool,

    /// Maximum number of fields; the last one holds the rest of the line.
    ///
    /// Zero or a negative number means unlimited.
    #[arg(
        long,
        short = 'n',
        default_value_t = Limit::Unlimited,
        allow_negative_numbers = true
    )]
    pub limit: Limit,

    /// Skip lines whose selection is empty.
    #[arg(long, short = 'i', action)]
    pub ignore_empty: bool,

    /// Print the fields of each range in reverse order.
    #[arg(long, short = 'r', action)]
    pub reverse: bool,

    /// Output format, with ranges in braces, e.g. `{2}:{3:}`.
    ///
    /// When given, positional ranges are optional and ignored.
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Longest accepted input line in bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_LINE_SIZE)]
    pub max_line_size: usize,

    /// Ranges of fields to print, in order.
    #[arg(
        value_name = "RANGE",
        required_unless_present = "format",
        allow_hyphen_values = true
    )]
    pub ranges: Vec<String>,
}

impl Args {
    /// Builds the per-run configuration from the flags.
    #[must_use]
    pub fn to_config(&self) -> Config {
        let source = if self.shell {
            FieldSource::Shell
        } else {
            FieldSource::Split(Delimiter::from(self.delimiter.clone()))
        };

        Config {
            source,
            limit: self.limit,
            reversed: self.reverse,
            ignore_empty: self.ignore_empty,
            max_line_size: self.max_line_size,
        }
    }

    /// Parses the positional range expressions.
    ///
    /// # Errors
    ///
    /// Returns the first [`field_core::error::Error::InvalidRange`] found.
    pub fn parse_ranges(&self) -> Result<Vec<Range>> {
        self.ranges
            .iter()
            .map(|expression| Range::parse(expression, self.reverse))
            .collect()
    }
}
