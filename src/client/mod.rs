//! NNTP posting client over a proxied connection

mod dial;
mod io;
mod posting;
mod state;

use std::sync::Arc;

use crate::config::PostConfig;

pub use dial::{Dialer, Socks5Dialer};
pub use state::PostState;

/// Posts serialized articles to the configured news server
///
/// Each [`post`](Self::post) call dials a fresh connection, runs one
/// POST exchange and closes the connection again.
///
/// # Example
///
/// ```no_run
/// use mail2news::article::ArticleBuilder;
/// use mail2news::{NntpPoster, PostConfig, Socks5Dialer};
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Arc::new(PostConfig::default());
/// let poster = NntpPoster::new(Socks5Dialer::new(config.proxy.clone()), config);
///
/// let mut builder = ArticleBuilder::new();
/// builder.push_line(b"From: poster@example.com")?;
/// builder.push_line(b"Newsgroups: alt.test")?;
/// builder.push_line(b"Subject: hi")?;
/// builder.push_line(b"")?;
/// builder.push_line(b"Hello world")?;
/// let article = builder.finish()?;
///
/// poster.post(&article, &mut std::io::stdout()).await?;
/// # Ok(())
/// # }
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct NntpPoster<D> {
    dialer: D,
    config: Arc<PostConfig>,
}

impl<D: Dialer> NntpPoster<D> {
    /// Create a poster that reaches `config.server` through `dialer`
    pub fn new(dialer: D, config: Arc<PostConfig>) -> Self {
        Self { dialer, config }
    }

    /// The configuration in use
    pub fn config(&self) -> &PostConfig {
        &self.config
    }

    /// The dialer in use
    pub fn dialer(&self) -> &D {
        &self.dialer
    }
}
