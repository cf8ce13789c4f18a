//! Line-ending normalization for outbound NNTP traffic
//!
//! NNTP requires every line to end in `\r\n`. [`NormalizingWriter`] wraps any
//! [`AsyncWrite`] sink and rewrites line endings on the way through, so callers
//! can hand it text terminated with either `\n` or `\r\n`.
//!
//! Each `write` is rewritten on its own: a `\r\n` pair split across two calls
//! is not recognised. Callers write complete lines or complete blocks.

use std::borrow::Cow;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use tokio::io::AsyncWrite;
use tracing::trace;

/// Rewrite every line ending in `data` to `\r\n`
///
/// Existing `\r\n` pairs are first collapsed to `\n`, then every `\n` is
/// expanded to `\r\n`. Input that is already canonical comes back unchanged,
/// and a lone `\r` not followed by `\n` is left alone.
///
/// ```
/// use mail2news::normalize_line_endings;
///
/// assert_eq!(&*normalize_line_endings(b"a\nb\r\n"), b"a\r\nb\r\n");
/// assert_eq!(&*normalize_line_endings(b"POST\r\n"), b"POST\r\n");
/// ```
pub fn normalize_line_endings(data: &[u8]) -> Cow<'_, [u8]> {
    if is_canonical(data) {
        return Cow::Borrowed(data);
    }

    let mut out = Vec::with_capacity(data.len() + data.len() / 32 + 2);
    let mut i = 0;
    while i < data.len() {
        match data[i] {
            b'\r' if data.get(i + 1) == Some(&b'\n') => {
                out.extend_from_slice(b"\r\n");
                i += 2;
            }
            b'\n' => {
                out.extend_from_slice(b"\r\n");
                i += 1;
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    Cow::Owned(out)
}

/// True if every `\n` in `data` is already preceded by `\r`
fn is_canonical(data: &[u8]) -> bool {
    data.iter()
        .enumerate()
        .all(|(i, &b)| b != b'\n' || (i > 0 && data[i - 1] == b'\r'))
}

pin_project_lite::pin_project! {
    /// [`AsyncWrite`] decorator enforcing `\r\n` line endings
    ///
    /// A write is rewritten with [`normalize_line_endings`] and staged in an
    /// internal buffer. The write reports the caller's full length once the
    /// chunk is staged; staged bytes reach the inner sink on later writes,
    /// `flush` or `shutdown`.
    #[derive(Debug)]
    pub struct NormalizingWriter<W> {
        #[pin]
        inner: W,
        pending: Vec<u8>,
        pos: usize,
    }
}

impl<W> NormalizingWriter<W> {
    /// Wrap a sink
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            pending: Vec::new(),
            pos: 0,
        }
    }

    /// Borrow the wrapped sink
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwrap the sink, discarding bytes not yet written to it
    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Write staged bytes to `inner` until none remain
fn poll_drain<W: AsyncWrite>(
    mut inner: Pin<&mut W>,
    cx: &mut Context<'_>,
    pending: &mut Vec<u8>,
    pos: &mut usize,
) -> Poll<io::Result<()>> {
    while *pos < pending.len() {
        let n = ready!(inner.as_mut().poll_write(cx, &pending[*pos..]))?;
        if n == 0 {
            return Poll::Ready(Err(io::Error::new(
                io::ErrorKind::WriteZero,
                "inner stream write returned 0",
            )));
        }
        *pos += n;
    }
    pending.clear();
    *pos = 0;
    Poll::Ready(Ok(()))
}

impl<W: AsyncWrite> AsyncWrite for NormalizingWriter<W> {
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        let mut this = self.project();
        ready!(poll_drain(this.inner.as_mut(), cx, this.pending, this.pos))?;

        this.pending
            .extend_from_slice(&normalize_line_endings(buf));

        // The chunk is staged and counts as written; a pending or failing
        // inner sink is retried and reported by the next write or flush
        if let Poll::Ready(Err(e)) = poll_drain(this.inner, cx, this.pending, this.pos) {
            trace!("Deferring inner write error: {}", e);
        }
        Poll::Ready(Ok(buf.len()))
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        let mut this = self.project();
        ready!(poll_drain(this.inner.as_mut(), cx, this.pending, this.pos))?;
        this.inner.poll_flush(cx)
    }

    fn poll_shutdown(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        let mut this = self.project();
        ready!(poll_drain(this.inner.as_mut(), cx, this.pending, this.pos))?;
        this.inner.poll_shutdown(cx)
    }
}
