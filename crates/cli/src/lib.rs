//! Field CLI Library
//!
//! This crate provides the command-line interface for `field`, a tool that
//! extracts and reorders selected fields from each line of text input. It
//! handles argument parsing and the per-line read, select and print loop.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing into a configuration and ranges
//! - [`processing`]: The streaming loop from input lines to output lines
//!
//! # Examples
//!
//! The CLI binary (`field`) can be used in several ways:
//!
//! ```bash
//! # Second and last whitespace-separated fields
//! ps aux | field 2 -1
//!
//! # First field of a colon-separated file
//! field -d : 1 < /etc/passwd
//!
//! # Keep everything from the 11th field on as one field
//! ps aux | field -n 11 11
//!
//! # Format output with a template
//! ps aux | field -n 11 -f "{2}:{11}"
//!
//! # Reverse a span of fields
//! echo "a b c d" | field -r 1:3
//! ```

pub mod cli_args;
pub mod processing;
