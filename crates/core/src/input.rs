//! Line-oriented input with a size guard.

use std::io::{BufRead, Read};

use crate::error::{Error, Result};

/// Largest line accepted before giving up, 500 MiB.
pub const DEFAULT_MAX_LINE_SIZE: usize = 500 * 1024 * 1024;

/// Iterates the raw lines of a reader.
///
/// Line terminators (`\n`, `\r\n`, or a trailing `\r` on the last line) are
/// stripped. A final line with no terminator is still yielded. Lines longer
/// than the configured maximum produce [`Error::LineTooLarge`] and end the
/// iteration.
pub struct LineReader<R> {
    reader: R,
    max_line_size: usize,
    buffer: Vec<u8>,
    done: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R, max_line_size: usize) -> Self {
        Self {
            reader,
            max_line_size,
            buffer: Vec::new(),
            done: false,
        }
    }

    /// Reads the next line into an internal buffer and borrows it.
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LineTooLarge`] when the line exceeds the maximum size,
    /// or [`Error::Io`] when reading fails.
    pub fn next_line(&mut self) -> Result<Option<&[u8]>> {
        if self.done {
            return Ok(None);
        }

        self.buffer.clear();
        // One byte of slack for the newline, one more to detect overflow.
        let ceiling = self.max_line_size.saturating_add(2);
        let read = (&mut self.reader)
            .take(u64::try_from(ceiling).unwrap_or(u64::MAX))
            .read_until(b'\n', &mut self.buffer)?;

        if read == 0 {
            self.done = true;
            return Ok(None);
        }

        if self.buffer.last() == Some(&b'\n') {
            self.buffer.pop();
        }
        if self.buffer.last() == Some(&b'\r') {
            self.buffer.pop();
        }

        if self.buffer.len() > self.max_line_size {
            self.done = true;
            return Err(Error::LineTooLarge {
                limit: self.max_line_size,
            });
        }

        Ok(Some(self.buffer.as_slice()))
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line()
            .map(|line| line.map(<[u8]>::to_vec))
            .transpose()
    }
}
