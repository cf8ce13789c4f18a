//! Forward-only line cursor over the input message

use std::io::BufRead;

use crate::error::{PostError, Result};

/// Single-pass line reader
///
/// Yields each line with its terminator removed: the trailing `\n` and at
/// most one `\r` before it. Lines are raw bytes; no character set is assumed.
/// The envelope stripper and the article builder consume the same cursor, so
/// the input is never rewound or read twice.
#[derive(Debug)]
pub struct LineCursor<R> {
    reader: R,
    line: Vec<u8>,
    lines_read: usize,
}

impl<R: BufRead> LineCursor<R> {
    /// Wrap a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::with_capacity(256),
            lines_read: 0,
        }
    }

    /// Advance to the next line, or `None` at end of input
    ///
    /// # Errors
    ///
    /// Returns [`PostError::Input`] if the underlying reader fails.
    pub fn next_line(&mut self) -> Result<Option<&[u8]>> {
        self.line.clear();
        let n = self
            .reader
            .read_until(b'\n', &mut self.line)
            .map_err(PostError::Input)?;
        if n == 0 {
            return Ok(None);
        }

        if self.line.last() == Some(&b'\n') {
            self.line.pop();
        }
        if self.line.last() == Some(&b'\r') {
            self.line.pop();
        }
        self.lines_read += 1;
        Ok(Some(&self.line))
    }

    /// Number of lines consumed so far
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}
