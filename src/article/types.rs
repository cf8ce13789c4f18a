//! Serialized article type

use std::fmt;

/// A serialized Usenet article ready for the POST exchange
///
/// Holds the header block, one blank separator line and the body block, every
/// line terminated with `\r\n`. The end-of-article `.` line is not included.
#[derive(Clone, PartialEq, Eq)]
pub struct RawArticle {
    pub(super) bytes: Vec<u8>,
    pub(super) header_lines: usize,
    pub(super) body_lines: usize,
    pub(super) body_size: usize,
    pub(super) dot_lines: usize,
}

impl RawArticle {
    /// The exact bytes sent after the server accepts POST
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the article, returning its bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Serialized length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; an article carries at least its From header and separator
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of header lines
    pub fn header_lines(&self) -> usize {
        self.header_lines
    }

    /// Number of body lines
    pub fn body_lines(&self) -> usize {
        self.body_lines
    }

    /// Accounted body size (line length plus one, summed)
    pub fn body_size(&self) -> usize {
        self.body_size
    }

    /// Number of body lines starting with `.`
    ///
    /// These lines are transmitted as-is, without dot-stuffing. A line that
    /// is exactly `.` ends the article early from the server's point of view.
    pub fn dot_lines(&self) -> usize {
        self.dot_lines
    }
}

impl AsRef<[u8]> for RawArticle {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for RawArticle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawArticle")
            .field("len", &self.bytes.len())
            .field("header_lines", &self.header_lines)
            .field("body_lines", &self.body_lines)
            .field("dot_lines", &self.dot_lines)
            .finish()
    }
}
