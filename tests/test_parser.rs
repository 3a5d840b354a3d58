use filament::http::parser::{MAX_TOKEN_LEN, ParseError, parse_request_line};

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";

    let (parsed, consumed) = parse_request_line(req).unwrap();

    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.target, "/index.html");
    assert_eq!(consumed, "GET /index.html ".len());
}

#[test]
fn test_parse_stops_after_second_token() {
    // Everything past the second space is opaque and must not be consumed
    let req = b"GET /a.txt HTTP/1.1\r\nX: y\r\n\r\n";

    let (_, consumed) = parse_request_line(req).unwrap();

    assert_eq!(&req[consumed..], b"HTTP/1.1\r\nX: y\r\n\r\n".as_slice());
}

#[test]
fn test_method_is_not_validated() {
    let req = b"BREW /pot HTTP/1.1\r\n\r\n";

    let (parsed, _) = parse_request_line(req).unwrap();

    assert_eq!(parsed.method, "BREW");
    assert_eq!(parsed.target, "/pot");
}

#[test]
fn test_target_with_query_string() {
    let req = b"GET /search?q=rust HTTP/1.1\r\n\r\n";

    let (parsed, _) = parse_request_line(req).unwrap();

    assert_eq!(parsed.target, "/search?q=rust");
}

#[test]
fn test_empty_buffer_is_incomplete() {
    let result = parse_request_line(b"");

    assert!(matches!(result, Err(ParseError::Incomplete)));
}

#[test]
fn test_missing_first_space_is_incomplete() {
    let result = parse_request_line(b"GET");

    assert!(matches!(result, Err(ParseError::Incomplete)));
}

#[test]
fn test_missing_second_space_is_incomplete() {
    let result = parse_request_line(b"GET /index.ht");

    assert!(matches!(result, Err(ParseError::Incomplete)));
}

#[test]
fn test_method_token_at_limit_still_parses() {
    let mut req = vec![b'a'; MAX_TOKEN_LEN];
    req.extend_from_slice(b" /x ");

    let (parsed, _) = parse_request_line(&req).unwrap();

    assert_eq!(parsed.method.len(), MAX_TOKEN_LEN);
    assert_eq!(parsed.target, "/x");
}

#[test]
fn test_oversized_method_token_is_rejected() {
    let req = vec![b'a'; MAX_TOKEN_LEN + 1];

    let result = parse_request_line(&req);

    assert!(matches!(result, Err(ParseError::TokenTooLong)));
}

#[test]
fn test_oversized_target_token_is_rejected() {
    let mut req = b"GET ".to_vec();
    req.extend_from_slice(&vec![b'a'; MAX_TOKEN_LEN + 1]);

    let result = parse_request_line(&req);

    assert!(matches!(result, Err(ParseError::TokenTooLong)));
}
