//! NNTP command builders used by the posting exchange

/// Build POST command (RFC 3977 §6.3.1)
///
/// Initiates article posting. Server responds with 340 if ready to accept.
/// After receiving 340, client sends article terminated by ".\r\n".
pub fn post() -> &'static str {
    "POST\r\n"
}

/// End-of-article line sent after the article text
pub fn end_of_article() -> &'static str {
    ".\r\n"
}

/// Build QUIT command
pub fn quit() -> &'static str {
    "QUIT\r\n"
}
