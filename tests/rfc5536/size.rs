//! Body size ceiling
//!
//! Each body line counts its length plus one; the total may not exceed the
//! ceiling (32 KiB by default).

use std::io::{BufReader, Read};

use mail2news::{DEFAULT_MAX_BODY_SIZE, PostError, process_message};

/// Email whose body lines add up to exactly `size` accounted bytes
fn email_with_body_size(size: usize) -> Vec<u8> {
    let mut input = b"To: c@d\n\nFrom: p@e\n\n".to_vec();
    let mut remaining = size;
    while remaining > 0 {
        let line_len = remaining.min(100) - 1;
        input.extend(std::iter::repeat_n(b'x', line_len));
        input.push(b'\n');
        remaining -= line_len + 1;
    }
    input
}

#[test]
fn test_body_at_ceiling_accepted() {
    let input = email_with_body_size(DEFAULT_MAX_BODY_SIZE);
    let article = process_message(&input[..], DEFAULT_MAX_BODY_SIZE).unwrap();
    assert_eq!(article.body_size(), 32768);
}

#[test]
fn test_body_one_past_ceiling_rejected() {
    let mut input = email_with_body_size(DEFAULT_MAX_BODY_SIZE);
    input.extend_from_slice(b"\n");
    let err = process_message(&input[..], DEFAULT_MAX_BODY_SIZE).unwrap_err();
    assert!(matches!(err, PostError::SizeLimitExceeded { limit: 32768 }));
    assert_eq!(err.to_string(), "article size exceeds 32 KB");
}

#[test]
fn test_crlf_input_counts_stripped_length() {
    // "\r" is stripped before counting, so CRLF input matches LF input
    let input = b"To: c@d\r\n\r\nFrom: p@e\r\n\r\n1234\r\n";
    let article = process_message(&input[..], 5).unwrap();
    assert_eq!(article.body_size(), 5);
}

/// Reader that fails if anything past the prefix is requested
struct Tripwire;

impl Read for Tripwire {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("read past the oversized line"))
    }
}

#[test]
fn test_stops_reading_at_oversized_line() {
    let prefix: &[u8] = b"To: c@d\n\nFrom: p@e\n\nshort\nthis line crosses the ceiling\n";
    let reader = BufReader::new(prefix.chain(Tripwire));

    let err = process_message(reader, 20).unwrap_err();
    assert!(matches!(err, PostError::SizeLimitExceeded { limit: 20 }));
}

#[test]
fn test_size_checked_before_from() {
    let input = b"To: c@d\n\nSubject: no from\n\nthis body is too long\n";
    let err = process_message(&input[..], 4).unwrap_err();
    assert!(matches!(err, PostError::SizeLimitExceeded { .. }));
}

#[test]
fn test_headers_excluded_from_size() {
    let long_subject = format!("Subject: {}\n", "s".repeat(1000));
    let input = format!("To: c@d\n\nFrom: p@e\n{long_subject}\nok\n");
    assert!(process_message(input.as_bytes(), 10).is_ok());
}
