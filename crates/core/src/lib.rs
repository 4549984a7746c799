//! Field Core Library
//!
//! This crate provides the core functionality for `field`, a tool that extracts
//! and reorders selected fields from each line of text input.
//!
//! # Key Features
//!
//! - **Splitting**: Break a line into fields on a literal delimiter or on runs of
//!   characters matching a predicate, with an optional field-count limit
//! - **Ranges**: Parse 1-based, negative-indexable, optionally reversed range
//!   expressions and apply them to a field sequence
//! - **Templates**: Render `{N}` / `{N:M}` output templates
//! - **Input**: Read raw lines with a size guard
//! - **Error Handling**: A single error type for all failure modes
//!
//! # Examples
//!
//! ```
//! use field_core::limit::Limit;
//! use field_core::range::Range;
//! use field_core::split::{split, Delimiter};
//!
//! let fields = split(b"alice  1042 pts/0", &Delimiter::default(), Limit::Unlimited);
//! let last_two = Range::parse("-2:", true)?;
//! assert_eq!(last_two.select(&fields), vec!["pts/0", "1042"]);
//! # Ok::<(), field_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod limit;
pub mod range;
pub mod split;
pub mod template;
pub mod tokenize;
