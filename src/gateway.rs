//! End-to-end gateway: email in, posted article out

use std::io::{BufRead, Write};

use tracing::debug;

use crate::article::{ArticleBuilder, LineCursor, RawArticle, strip_envelope};
use crate::client::{Dialer, NntpPoster};
use crate::error::Result;

/// Turn an email into a serialized article
///
/// Strips the envelope, re-splits the embedded article and validates it.
/// Reading stops at the first error; nothing touches the network.
///
/// # Errors
///
/// Returns an error if:
/// - [`PostError::MalformedEnvelope`](crate::PostError::MalformedEnvelope) - no blank line ends the envelope
/// - [`PostError::SizeLimitExceeded`](crate::PostError::SizeLimitExceeded) - the body passed `max_body_size`
/// - [`PostError::MissingFromHeader`](crate::PostError::MissingFromHeader) - the article has no From line
/// - [`PostError::Input`](crate::PostError::Input) - the input could not be read
///
/// # Example
///
/// ```
/// use mail2news::process_message;
///
/// let email = b"From: a@b\nTo: c@d\n\nFrom: poster@example.com\nSubject: hi\n\nHello\n";
/// let article = process_message(&email[..], 32 * 1024).unwrap();
/// assert_eq!(
///     article.as_bytes(),
///     b"From: poster@example.com\r\nSubject: hi\r\n\r\nHello\r\n"
/// );
/// ```
pub fn process_message<R: BufRead>(reader: R, max_body_size: usize) -> Result<RawArticle> {
    let mut cursor = LineCursor::new(reader);
    strip_envelope(&mut cursor)?;
    ArticleBuilder::with_max_body_size(max_body_size).read_from(&mut cursor)
}

/// Read an email from `reader` and post the embedded article
///
/// The article is fully validated before the poster dials out. Server lines
/// are echoed to `echo`.
///
/// # Errors
///
/// Any error from [`process_message`] or [`NntpPoster::post`].
pub async fn post_message<R, D, E>(reader: R, poster: &NntpPoster<D>, echo: &mut E) -> Result<()>
where
    R: BufRead,
    D: Dialer,
    E: Write,
{
    let article = process_message(reader, poster.config().max_body_size)?;
    debug!("Article ready: {:?}", article);
    poster.post(&article, echo).await
}
