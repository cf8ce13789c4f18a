//! RFC 3977 Section 6.3.1 - POST exchange
//!
//! - POST is answered with 340 before the article is sent
//! - The article ends with a line holding a single "."
//! - 240 means the article was accepted
//! - QUIT is only sent after a successful post

use crate::common::{EXAMPLE_ARTICLE, MockDialer, Script, test_config};
use mail2news::{NntpPoster, PostError, process_message};

fn example_article() -> mail2news::RawArticle {
    process_message(crate::common::EXAMPLE_EMAIL, 32 * 1024).unwrap()
}

fn expected_transcript(article: &[u8], quit: bool) -> Vec<u8> {
    let mut expected = b"POST\r\n".to_vec();
    expected.extend_from_slice(article);
    expected.extend_from_slice(b".\r\n");
    if quit {
        expected.extend_from_slice(b"QUIT\r\n");
    }
    expected
}

#[tokio::test]
async fn test_post_success() {
    let poster = NntpPoster::new(MockDialer::new(Script::accepting()), test_config());
    let mut echo = Vec::new();

    poster.post(&example_article(), &mut echo).await.unwrap();

    let received = poster.dialer().received().await;
    assert_eq!(received, expected_transcript(EXAMPLE_ARTICLE, true));
    assert_eq!(echo, b"200 news.example.com ready\r\n340 ok\r\n240 ok\r\n");
}

#[tokio::test]
async fn test_post_dials_configured_server() {
    let poster = NntpPoster::new(MockDialer::new(Script::accepting()), test_config());
    poster.post(&example_article(), &mut Vec::new()).await.unwrap();

    assert_eq!(poster.dialer().dial_count(), 1);
    assert_eq!(poster.dialer().targets(), vec!["news.example.com:119"]);
}

#[tokio::test]
async fn test_post_rejected() {
    let script = Script::accepting().post_reply(Some("440 posting not allowed\r\n"));
    let poster = NntpPoster::new(MockDialer::new(script), test_config());
    let mut echo = Vec::new();

    let err = poster.post(&example_article(), &mut echo).await.unwrap_err();

    match err {
        PostError::PostRejected(line) => assert_eq!(line, "440 posting not allowed"),
        other => panic!("expected PostRejected, got {other:?}"),
    }
    // No article bytes, no QUIT
    assert_eq!(poster.dialer().received().await, b"POST\r\n");
    assert_eq!(echo, b"200 news.example.com ready\r\n440 posting not allowed\r\n");
}

#[tokio::test]
async fn test_post_unparseable_reply_is_rejection() {
    let script = Script::accepting().post_reply(Some("hello there\r\n"));
    let poster = NntpPoster::new(MockDialer::new(script), test_config());

    let err = poster.post(&example_article(), &mut Vec::new()).await.unwrap_err();
    assert!(matches!(err, PostError::PostRejected(_)));
}

#[tokio::test]
async fn test_article_rejected() {
    let script = Script::accepting().article_reply(Some("441 posting failed\r\n"));
    let poster = NntpPoster::new(MockDialer::new(script), test_config());
    let mut echo = Vec::new();

    let err = poster.post(&example_article(), &mut echo).await.unwrap_err();

    match err {
        PostError::ArticleRejected(line) => assert_eq!(line, "441 posting failed"),
        other => panic!("expected ArticleRejected, got {other:?}"),
    }
    // Article sent, QUIT withheld
    assert_eq!(
        poster.dialer().received().await,
        expected_transcript(EXAMPLE_ARTICLE, false)
    );
    assert_eq!(echo, b"200 news.example.com ready\r\n340 ok\r\n441 posting failed\r\n");
}

#[tokio::test]
async fn test_dial_failure() {
    let poster = NntpPoster::new(MockDialer::failing(), test_config());
    let mut echo = Vec::new();

    let err = poster.post(&example_article(), &mut echo).await.unwrap_err();

    assert!(matches!(err, PostError::Dial { .. }));
    assert!(echo.is_empty());
    assert_eq!(poster.dialer().dial_count(), 1);
}

#[tokio::test]
async fn test_server_hangs_up_before_greeting() {
    let script = Script::accepting().greeting(None);
    let poster = NntpPoster::new(MockDialer::new(script), test_config());

    let err = poster.post(&example_article(), &mut Vec::new()).await.unwrap_err();

    match err {
        PostError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof),
        other => panic!("expected Io, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_hangs_up_after_article() {
    let script = Script::accepting().article_reply(None);
    let poster = NntpPoster::new(MockDialer::new(script), test_config());

    let err = poster.post(&example_article(), &mut Vec::new()).await.unwrap_err();
    assert!(matches!(err, PostError::Io(_)));
}

#[tokio::test]
async fn test_unterminated_article_reply_is_io_error() {
    let script = Script::accepting().article_reply(Some("240"));
    let poster = NntpPoster::new(MockDialer::new(script), test_config());
    let mut echo = Vec::new();

    let err = poster.post(&example_article(), &mut echo).await.unwrap_err();

    match err {
        PostError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof),
        other => panic!("expected Io, got {other:?}"),
    }
    // Cut-off line is not echoed, QUIT withheld
    assert_eq!(echo, b"200 news.example.com ready\r\n340 ok\r\n");
    assert_eq!(
        poster.dialer().received().await,
        expected_transcript(EXAMPLE_ARTICLE, false)
    );
}

#[tokio::test]
async fn test_unterminated_post_reply_is_io_error() {
    let script = Script::accepting().post_reply(Some("340"));
    let poster = NntpPoster::new(MockDialer::new(script), test_config());

    let err = poster.post(&example_article(), &mut Vec::new()).await.unwrap_err();
    assert!(matches!(err, PostError::Io(_)));
}

#[tokio::test]
async fn test_greeting_is_not_validated() {
    let script = Script::accepting().greeting(Some("201 no posting\r\n"));
    let poster = NntpPoster::new(MockDialer::new(script), test_config());

    poster.post(&example_article(), &mut Vec::new()).await.unwrap();
}

#[tokio::test]
async fn test_leading_dot_lines_sent_unescaped() {
    let email = b"To: c@d\n\nFrom: p@e\n\n.hidden\nplain\n";
    let article = process_message(&email[..], 32 * 1024).unwrap();
    assert_eq!(article.dot_lines(), 1);

    let poster = NntpPoster::new(MockDialer::new(Script::accepting()), test_config());
    poster.post(&article, &mut Vec::new()).await.unwrap();

    let received = poster.dialer().received().await;
    assert_eq!(
        received,
        expected_transcript(b"From: p@e\r\n\r\n.hidden\r\nplain\r\n", true)
    );
}
