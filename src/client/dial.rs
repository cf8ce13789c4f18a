//! Proxied connection establishment

use std::future::Future;

use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio_socks::tcp::Socks5Stream;
use tracing::debug;

use crate::config::Endpoint;
use crate::error::{PostError, Result};

/// Opens a byte stream to a server
///
/// The poster only ever dials TCP, so the network is implied.
/// Implementations report failures as [`PostError::Dial`].
pub trait Dialer {
    /// Bidirectional stream returned on success
    type Stream: AsyncRead + AsyncWrite + Unpin + Send;

    /// Connect to `target`
    fn dial(&self, target: &Endpoint) -> impl Future<Output = Result<Self::Stream>> + Send;
}

/// Dials through a SOCKS5 proxy such as a local Tor daemon
///
/// The target host name is passed to the proxy unresolved, so name
/// resolution happens on the far side of the proxy.
#[derive(Debug, Clone)]
pub struct Socks5Dialer {
    proxy: Endpoint,
}

impl Socks5Dialer {
    /// Create a dialer for the given proxy
    pub fn new(proxy: Endpoint) -> Self {
        Self { proxy }
    }

    /// The proxy this dialer connects through
    pub fn proxy(&self) -> &Endpoint {
        &self.proxy
    }
}

impl Dialer for Socks5Dialer {
    type Stream = Socks5Stream<TcpStream>;

    async fn dial(&self, target: &Endpoint) -> Result<Self::Stream> {
        debug!("Connecting to {} through SOCKS5 proxy {}", target, self.proxy);

        let proxy = self.proxy.to_string();
        let stream = Socks5Stream::connect(proxy.as_str(), (target.host.as_str(), target.port))
            .await
            .map_err(|e| PostError::Dial {
                target: target.to_string(),
                reason: e.to_string(),
            })?;

        debug!("Proxy connection to {} established", target);
        Ok(stream)
    }
}
