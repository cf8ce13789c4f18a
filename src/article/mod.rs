//! Email-to-article transform
//!
//! The input is an email whose body carries a complete Usenet article:
//!
//! ```text
//! From: gateway@example.net        \
//! To: mail2news@example.org         } email envelope, discarded
//!                                  /
//! From: poster@example.com         \
//! Newsgroups: alt.test              } article headers
//! Subject: hi                      /
//!
//! Hello world                      } article body
//! ```
//!
//! This module is organized into:
//! - `cursor`: forward-only line reader shared by both parsing phases
//! - `envelope`: skipping the email envelope
//! - `builder`: re-splitting, validating and serializing the article
//! - `types`: the serialized [`RawArticle`]

mod builder;
mod cursor;
mod envelope;
mod types;

pub use self::builder::ArticleBuilder;
pub use self::cursor::LineCursor;
pub use self::envelope::strip_envelope;
pub use self::types::RawArticle;

/// Wire line ending
pub const CRLF: &[u8] = b"\r\n";

/// Whether a raw header line satisfies the required From check
///
/// Both `From:` and the mailbox-style `From ` prefix are accepted. Matching is
/// case-sensitive and anchored at the start of the line.
pub fn is_from_line(line: &[u8]) -> bool {
    line.starts_with(b"From:") || line.starts_with(b"From ")
}
