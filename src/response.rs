//! NNTP status lines and response codes

use std::fmt;

/// A single status line read from the server
///
/// Only the three-digit prefix is interpreted. The line is kept exactly as
/// received (terminator included) so it can be echoed verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerResponse {
    raw: String,
}

impl ServerResponse {
    /// Wrap a line as read from the connection
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The line as received, including its terminator
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The line without its terminator
    pub fn text(&self) -> &str {
        self.raw.trim_end_matches(['\r', '\n'])
    }

    /// Status code from the first three characters, if they are digits
    ///
    /// Characters after the prefix are not inspected, so `"340"`,
    /// `"340 send article"` and `"340send"` all yield 340.
    pub fn code(&self) -> Option<u16> {
        let prefix = self.raw.as_bytes().get(..3)?;
        if !prefix.iter().all(u8::is_ascii_digit) {
            return None;
        }
        Some(prefix.iter().fold(0u16, |acc, &b| acc * 10 + u16::from(b - b'0')))
    }

    /// Whether the line starts with `code`
    pub fn has_code(&self, code: u16) -> bool {
        self.code() == Some(code)
    }
}

impl fmt::Display for ServerResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// NNTP response codes used by the posting exchange (RFC 3977)
pub mod codes {
    /// Server ready, posting allowed
    pub const READY_POSTING_ALLOWED: u16 = 200;
    /// Article posted successfully (RFC 3977 Section 6.3.1)
    pub const ARTICLE_POSTED: u16 = 240;
    /// Send article to be posted
    pub const SEND_ARTICLE: u16 = 340;
    /// Posting not permitted (RFC 3977 Section 6.3.1)
    pub const POSTING_NOT_PERMITTED: u16 = 440;
    /// Posting failed (RFC 3977 Section 6.3.1)
    pub const POSTING_FAILED: u16 = 441;
}
