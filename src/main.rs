//! Reads an email on stdin and posts the embedded Usenet article through Tor

use std::process::ExitCode;
use std::sync::Arc;

use mail2news::{NntpPoster, PostConfig, Socks5Dialer, logging, post_message};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init_logging();

    let config = Arc::new(PostConfig::default());
    let poster = NntpPoster::new(Socks5Dialer::new(config.proxy.clone()), config);

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    match post_message(stdin, &poster, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
