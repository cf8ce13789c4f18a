//! Posting exchange states

use std::fmt;

/// Where a posting attempt stands
///
/// Advances strictly forward from [`Dialing`](Self::Dialing) to
/// [`Done`](Self::Done); any error moves it to [`Failed`](Self::Failed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostState {
    /// Requesting the proxied connection
    Dialing,
    /// Connected, waiting for the greeting
    Connected,
    /// Greeting received, POST about to be sent
    Greeted,
    /// POST sent, waiting for 340
    AwaitingPostAck,
    /// Server accepted POST, article about to be sent
    ReadyToSend,
    /// Article sent, waiting for 240
    AwaitingArticleAck,
    /// Article accepted, QUIT about to be sent
    Posted,
    /// QUIT sent
    Done,
    /// The exchange stopped with an error
    Failed,
}

impl fmt::Display for PostState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dialing => "dialing",
            Self::Connected => "connected",
            Self::Greeted => "greeted",
            Self::AwaitingPostAck => "awaiting POST ack",
            Self::ReadyToSend => "ready to send",
            Self::AwaitingArticleAck => "awaiting article ack",
            Self::Posted => "posted",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}
