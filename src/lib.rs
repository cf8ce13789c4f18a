#![doc = include_str!("../README.md")]

/// Email-to-article transform
pub mod article;
mod client;
/// NNTP command builders
pub mod commands;
mod config;
mod error;
mod gateway;
/// Logging setup for the binary
pub mod logging;
mod normalize;
mod response;

pub use article::{ArticleBuilder, LineCursor, RawArticle};
pub use client::{Dialer, NntpPoster, PostState, Socks5Dialer};
pub use config::{
    DEFAULT_MAX_BODY_SIZE, DEFAULT_PROXY_HOST, DEFAULT_PROXY_PORT, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, Endpoint, PostConfig,
};
pub use error::{PostError, Result};
pub use gateway::{post_message, process_message};
pub use normalize::{NormalizingWriter, normalize_line_endings};
pub use response::{ServerResponse, codes};
