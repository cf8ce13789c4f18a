use std::io::Write;

use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, warn};

use super::io::Session;
use super::state::PostState;
use super::{Dialer, NntpPoster};
use crate::article::RawArticle;
use crate::commands;
use crate::error::{PostError, Result};
use crate::response::codes;

impl<D: Dialer> NntpPoster<D> {
    /// Post an article (RFC 3977 Section 6.3.1)
    ///
    /// # Exchange
    ///
    /// 1. Dial the server through the proxy and read the greeting
    /// 2. Send POST; the server must answer 340
    /// 3. Send the article followed by the `.` line; the server must answer 240
    /// 4. Send QUIT without waiting for a reply
    ///
    /// The greeting and every status line are written verbatim to `echo` as
    /// they arrive. The connection is closed on every path once it is open;
    /// QUIT is only sent after the article is accepted.
    ///
    /// Body lines starting with `.` are sent unescaped (no dot-stuffing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`PostError::Dial`] - the proxied connection could not be opened
    /// - [`PostError::Io`] - reading or writing the connection failed, or the
    ///   server closed it
    /// - [`PostError::PostRejected`] - POST was answered with anything but 340
    /// - [`PostError::ArticleRejected`] - the article was answered with
    ///   anything but 240
    pub async fn post<E: Write>(&self, article: &RawArticle, echo: &mut E) -> Result<()> {
        debug!("Posting state: {}", PostState::Dialing);
        let stream = self.dialer.dial(&self.config.server).await?;

        let mut session = Session::new(stream, echo);
        let result = session.exchange(article).await;
        if let Err(ref e) = result {
            debug!("Posting failed in state {}: {}", session.state(), e);
            session.transition(PostState::Failed);
        }
        session.close().await;
        result
    }
}

impl<S, E> Session<'_, S, E>
where
    S: AsyncRead + AsyncWrite,
    E: Write,
{
    async fn exchange(&mut self, article: &RawArticle) -> Result<()> {
        let greeting = self.read_line().await?;
        if !greeting.has_code(codes::READY_POSTING_ALLOWED) {
            warn!("Server greeting does not advertise posting: {}", greeting);
        }
        self.transition(PostState::Greeted);

        self.send(commands::post().as_bytes()).await?;
        self.transition(PostState::AwaitingPostAck);

        let response = self.read_line().await?;
        if !response.has_code(codes::SEND_ARTICLE) {
            return Err(PostError::PostRejected(response.text().to_string()));
        }
        self.transition(PostState::ReadyToSend);

        if article.dot_lines() > 0 {
            warn!(
                "Article has {} body lines starting with '.', sent without dot-stuffing",
                article.dot_lines()
            );
        }
        self.send(article.as_bytes()).await?;
        self.send(commands::end_of_article().as_bytes()).await?;
        self.transition(PostState::AwaitingArticleAck);

        let response = self.read_line().await?;
        if !response.has_code(codes::ARTICLE_POSTED) {
            return Err(PostError::ArticleRejected(response.text().to_string()));
        }
        self.transition(PostState::Posted);

        self.send(commands::quit().as_bytes()).await?;
        self.transition(PostState::Done);

        debug!("Article posted successfully");
        Ok(())
    }
}
