//! Gateway error types

use thiserror::Error;

/// Errors raised while turning an email into an article and posting it
///
/// Every error is fatal to the invocation. Input errors
/// ([`MalformedEnvelope`](Self::MalformedEnvelope),
/// [`MissingFromHeader`](Self::MissingFromHeader),
/// [`SizeLimitExceeded`](Self::SizeLimitExceeded), [`Input`](Self::Input))
/// are raised before any connection is attempted.
#[derive(Error, Debug)]
pub enum PostError {
    /// No blank line separates the email headers from the email body
    #[error("no email body found (missing blank line after headers)")]
    MalformedEnvelope,

    /// The embedded article has no `From:` header line
    #[error("missing required From: header in the Usenet article")]
    MissingFromHeader,

    /// The article body grew past the configured ceiling
    #[error("article size exceeds {} KB", .limit / 1024)]
    SizeLimitExceeded {
        /// Ceiling in bytes
        limit: usize,
    },

    /// Reading the input message failed
    #[error("error reading input message: {0}")]
    Input(#[source] std::io::Error),

    /// The proxied connection to the news server could not be established
    #[error("error connecting to {target} through the proxy: {reason}")]
    Dial {
        /// Server address that was requested
        target: String,
        /// Failure reported by the proxy or transport
        reason: String,
    },

    /// IO error on an established connection
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The server refused the POST command
    #[error("server did not accept POST command: {0}")]
    PostRejected(String),

    /// The server refused the submitted article
    #[error("article posting failed: {0}")]
    ArticleRejected(String),
}

impl PostError {
    /// Whether this error was raised before any network resource was acquired
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedEnvelope
                | Self::MissingFromHeader
                | Self::SizeLimitExceeded { .. }
                | Self::Input(_)
        )
    }
}

/// Result type alias using PostError
pub type Result<T> = std::result::Result<T, PostError>;
