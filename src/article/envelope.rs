//! Email envelope stripping

use std::io::BufRead;

use tracing::debug;

use super::LineCursor;
use crate::error::{PostError, Result};

/// Skip the email envelope
///
/// Consumes lines up to and including the first blank line. On success the
/// cursor sits on the first line of the embedded article (or at end of input
/// if the email body is empty).
///
/// # Errors
///
/// - [`PostError::MalformedEnvelope`] - input ended without a blank line
/// - [`PostError::Input`] - the input could not be read
pub fn strip_envelope<R: BufRead>(cursor: &mut LineCursor<R>) -> Result<()> {
    while let Some(line) = cursor.next_line()? {
        if line.is_empty() {
            debug!("Email envelope ends after {} lines", cursor.lines_read());
            return Ok(());
        }
    }
    Err(PostError::MalformedEnvelope)
}
