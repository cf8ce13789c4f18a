//! Gateway configuration

use std::fmt;

/// Default news server (plain NNTP port)
pub const DEFAULT_SERVER_HOST: &str = "news.tcpreset.net";
/// Default news server port
pub const DEFAULT_SERVER_PORT: u16 = 119;
/// Default SOCKS5 proxy host (local Tor daemon)
pub const DEFAULT_PROXY_HOST: &str = "127.0.0.1";
/// Default SOCKS5 proxy port (Tor SocksPort)
pub const DEFAULT_PROXY_PORT: u16 = 9050;
/// Ceiling on the serialized article body (32 KiB)
pub const DEFAULT_MAX_BODY_SIZE: usize = 32 * 1024;

/// A `host:port` pair
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Endpoint {
    /// Hostname or IP literal
    pub host: String,
    /// TCP port
    pub port: u16,
}

impl Endpoint {
    /// Create a new endpoint
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Posting configuration
///
/// Holds the fixed addresses and the size ceiling the gateway works with.
/// The binary always runs with [`PostConfig::default`]; tests build their own
/// to point the poster at a mock server.
///
/// # Example
///
/// ```
/// use mail2news::{Endpoint, PostConfig};
///
/// let config = PostConfig::default();
/// assert_eq!(config.server.to_string(), "news.tcpreset.net:119");
/// assert_eq!(config.proxy.to_string(), "127.0.0.1:9050");
///
/// let config = PostConfig::new(
///     Endpoint::new("news.example.com", 119),
///     Endpoint::new("127.0.0.1", 1080),
/// )
/// .with_max_body_size(64 * 1024);
/// assert_eq!(config.max_body_size, 65536);
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PostConfig {
    /// News server the article is posted to
    pub server: Endpoint,

    /// SOCKS5 proxy every connection goes through
    pub proxy: Endpoint,

    /// Maximum cumulative body size in bytes
    ///
    /// Each body line counts its length plus one for the terminator.
    #[cfg_attr(feature = "serde", serde(default = "default_max_body_size"))]
    pub max_body_size: usize,
}

#[cfg(feature = "serde")]
fn default_max_body_size() -> usize {
    DEFAULT_MAX_BODY_SIZE
}

impl Default for PostConfig {
    fn default() -> Self {
        Self::new(
            Endpoint::new(DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT),
            Endpoint::new(DEFAULT_PROXY_HOST, DEFAULT_PROXY_PORT),
        )
    }
}

impl PostConfig {
    /// Create a configuration with the default body ceiling
    pub fn new(server: Endpoint, proxy: Endpoint) -> Self {
        Self {
            server,
            proxy,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }

    /// Override the body size ceiling
    pub fn with_max_body_size(mut self, max_body_size: usize) -> Self {
        self.max_body_size = max_body_size;
        self
    }
}
