//! Line-level I/O for the posting exchange
//!
//! Outbound bytes go through a [`NormalizingWriter`]; status lines are read
//! raw and echoed verbatim to the operator sink.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, ReadHalf, WriteHalf};
use tracing::{debug, trace, warn};

use super::state::PostState;
use crate::error::{PostError, Result};
use crate::normalize::NormalizingWriter;
use crate::response::ServerResponse;

/// One proxied connection and its exchange state
pub(super) struct Session<'e, S, E> {
    reader: BufReader<ReadHalf<S>>,
    writer: NormalizingWriter<WriteHalf<S>>,
    echo: &'e mut E,
    state: PostState,
}

impl<'e, S, E> Session<'e, S, E>
where
    S: AsyncRead + AsyncWrite,
    E: Write,
{
    pub(super) fn new(stream: S, echo: &'e mut E) -> Self {
        let (read_half, write_half) = tokio::io::split(stream);
        Self {
            reader: BufReader::new(read_half),
            writer: NormalizingWriter::new(write_half),
            echo,
            state: PostState::Connected,
        }
    }

    pub(super) fn state(&self) -> PostState {
        self.state
    }

    pub(super) fn transition(&mut self, next: PostState) {
        debug!("Posting state: {} -> {}", self.state, next);
        self.state = next;
    }

    /// Write a command line or article block and flush it
    pub(super) async fn send(&mut self, data: &[u8]) -> Result<()> {
        trace!("Sending {} bytes: {:?}", data.len(), String::from_utf8_lossy(data).trim_end());
        self.writer.write_all(data).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Read one status line and echo it
    pub(super) async fn read_line(&mut self) -> Result<ServerResponse> {
        let mut line_bytes = Vec::with_capacity(512);
        self.reader.read_until(b'\n', &mut line_bytes).await?;

        // A line cut off by EOF is not a complete status line
        if line_bytes.last() != Some(&b'\n') {
            return Err(PostError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "connection closed by server",
            )));
        }

        if let Err(e) = self.echo.write_all(&line_bytes).and_then(|()| self.echo.flush()) {
            warn!("Failed to echo server line: {}", e);
        }

        let response = ServerResponse::new(String::from_utf8_lossy(&line_bytes));
        trace!("Received: {}", response.text());
        Ok(response)
    }

    /// Shut the connection down, ignoring failures
    pub(super) async fn close(mut self) {
        if let Err(e) = self.writer.shutdown().await {
            debug!("Error shutting down connection: {}", e);
        }
        debug!("Connection closed in state {}", self.state);
    }
}
