//! Article re-splitting, validation and serialization

use std::io::BufRead;

use tracing::debug;

use super::types::RawArticle;
use super::{CRLF, LineCursor, is_from_line};
use crate::config::DEFAULT_MAX_BODY_SIZE;
use crate::error::{PostError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Headers,
    Body,
}

/// Builds a [`RawArticle`] from the lines following the email envelope
///
/// Lines up to the first blank line form the header block; everything after
/// it forms the body. The blank line itself is not copied and is re-inserted
/// as the single separator when the article is finished.
///
/// # Example
///
/// ```
/// use mail2news::article::ArticleBuilder;
///
/// let mut builder = ArticleBuilder::new();
/// builder.push_line(b"From: poster@example.com").unwrap();
/// builder.push_line(b"Newsgroups: alt.test").unwrap();
/// builder.push_line(b"").unwrap();
/// builder.push_line(b"Hello world").unwrap();
///
/// let article = builder.finish().unwrap();
/// assert_eq!(
///     article.as_bytes(),
///     b"From: poster@example.com\r\nNewsgroups: alt.test\r\n\r\nHello world\r\n"
/// );
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct ArticleBuilder {
    max_body_size: usize,
    phase: Phase,
    headers: Vec<u8>,
    body: Vec<u8>,
    header_lines: usize,
    body_lines: usize,
    body_size: usize,
    dot_lines: usize,
    has_from: bool,
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleBuilder {
    /// Create a builder with the default 32 KiB body ceiling
    pub fn new() -> Self {
        Self::with_max_body_size(DEFAULT_MAX_BODY_SIZE)
    }

    /// Create a builder with a custom body ceiling
    pub fn with_max_body_size(max_body_size: usize) -> Self {
        Self {
            max_body_size,
            phase: Phase::Headers,
            headers: Vec::with_capacity(1024),
            body: Vec::new(),
            header_lines: 0,
            body_lines: 0,
            body_size: 0,
            dot_lines: 0,
            has_from: false,
        }
    }

    /// Feed one line, without its terminator
    ///
    /// # Errors
    ///
    /// Returns [`PostError::SizeLimitExceeded`] as soon as the accounted body
    /// size passes the ceiling. The builder should be discarded after that.
    pub fn push_line(&mut self, line: &[u8]) -> Result<()> {
        match self.phase {
            Phase::Headers => {
                if line.is_empty() {
                    debug!("Article header block has {} lines", self.header_lines);
                    self.phase = Phase::Body;
                    return Ok(());
                }
                if is_from_line(line) {
                    self.has_from = true;
                }
                self.headers.extend_from_slice(line);
                self.headers.extend_from_slice(CRLF);
                self.header_lines += 1;
            }
            Phase::Body => {
                self.body.extend_from_slice(line);
                self.body.extend_from_slice(CRLF);
                self.body_lines += 1;
                if line.first() == Some(&b'.') {
                    self.dot_lines += 1;
                }

                self.body_size += line.len() + 1;
                if self.body_size > self.max_body_size {
                    debug!(
                        "Article body reached {} bytes at body line {}",
                        self.body_size, self.body_lines
                    );
                    return Err(PostError::SizeLimitExceeded {
                        limit: self.max_body_size,
                    });
                }
            }
        }
        Ok(())
    }

    /// Consume every remaining line of `cursor` and finish the article
    ///
    /// Stops reading at the first line that breaks the size ceiling.
    ///
    /// # Errors
    ///
    /// - [`PostError::SizeLimitExceeded`] - body passed the ceiling
    /// - [`PostError::MissingFromHeader`] - no From line in the header block
    /// - [`PostError::Input`] - the input could not be read
    pub fn read_from<R: BufRead>(mut self, cursor: &mut LineCursor<R>) -> Result<RawArticle> {
        while let Some(line) = cursor.next_line()? {
            self.push_line(line)?;
        }
        self.finish()
    }

    /// Validate and serialize the article
    ///
    /// # Errors
    ///
    /// Returns [`PostError::MissingFromHeader`] if no header line starts with
    /// `From:` or `From `.
    pub fn finish(self) -> Result<RawArticle> {
        if !self.has_from {
            return Err(PostError::MissingFromHeader);
        }

        let mut bytes = self.headers;
        bytes.reserve(CRLF.len() + self.body.len());
        bytes.extend_from_slice(CRLF);
        bytes.extend_from_slice(&self.body);

        debug!(
            "Built article: {} header lines, {} body lines, {} bytes",
            self.header_lines,
            self.body_lines,
            bytes.len()
        );

        Ok(RawArticle {
            bytes,
            header_lines: self.header_lines,
            body_lines: self.body_lines,
            body_size: self.body_size,
            dot_lines: self.dot_lines,
        })
    }
}
