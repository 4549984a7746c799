//! The per-line processing loop.

use std::io::{BufRead, Write};

use field_core::config::Config;
use field_core::error::Result;
use field_core::input::LineReader;
use field_core::range::{select_all, Range};
use field_core::template::FieldTemplate;
use itertools::Itertools;
use log::error;

/// How each line's fields are printed.
pub enum Output<'a, 's> {
    /// The selected fields of every range, space separated.
    Ranges(&'a [Range]),
    /// A format template rendered per line.
    Template(&'a FieldTemplate<'s>),
}

/// Reads every line from `reader`, extracts the configured fields and writes
/// one output line per input line to `writer`.
///
/// Lines that cannot be tokenized or rendered are logged and skipped. Output
/// is flushed after every line so the tool works in streaming pipelines.
///
/// # Errors
///
/// Returns an error on I/O failure or when a line exceeds the configured
/// maximum size.
pub fn process<R: BufRead, W: Write>(
    config: &Config,
    output: &Output<'_, '_>,
    reader: R,
    writer: &mut W,
) -> Result<()> {
    let mut lines = LineReader::new(reader, config.max_line_size);
    let mut line_number: usize = 0;

    while let Some(line) = lines.next_line()? {
        line_number += 1;

        let Some(fields) = skip_recoverable(line_number, config.fields(line))? else {
            continue;
        };

        match output {
            Output::Ranges(ranges) => {
                let selected = select_all(ranges, &fields);
                if config.ignore_empty && selected.is_empty() {
                    continue;
                }
                writeln!(writer, "{}", selected.iter().format(" "))?;
            }
            Output::Template(template) => {
                let Some(rendered) = skip_recoverable(line_number, template.render(&fields))?
                else {
                    continue;
                };
                writeln!(writer, "{rendered}")?;
            }
        }

        writer.flush()?;
    }

    Ok(())
}

fn skip_recoverable<T>(line_number: usize, result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_recoverable() => {
            error!("Skipping line {line_number}: {e}");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
