use crate::http::request::Request;

/// Upper bound on a single request-line token. The wire format puts no
/// limit on token length; this bound keeps a hostile client from growing
/// the read buffer without end.
pub const MAX_TOKEN_LEN: usize = 8192;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Not enough bytes buffered yet for two complete tokens
    Incomplete,
    /// A token exceeded [`MAX_TOKEN_LEN`]
    TokenTooLong,
}

/// Extracts the method and target tokens from the start of `buf`.
///
/// A token is everything up to the next space (0x20). Returns the parsed
/// request and the number of bytes consumed, i.e. the offset just past the
/// space terminating the target. Everything beyond that offset is opaque
/// request data the caller discards.
pub fn parse_request_line(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    let (method, after_method) = next_token(buf, 0)?;
    let (target, consumed) = next_token(buf, after_method)?;

    Ok((Request::new(method, target), consumed))
}

fn next_token(buf: &[u8], start: usize) -> Result<(String, usize), ParseError> {
    let limit = buf.len().min(start + MAX_TOKEN_LEN + 1);

    match buf[start..limit].iter().position(|&b| b == b' ') {
        Some(i) => {
            let token = String::from_utf8_lossy(&buf[start..start + i]).into_owned();
            Ok((token, start + i + 1))
        }
        None if buf.len() - start > MAX_TOKEN_LEN => Err(ParseError::TokenTooLong),
        None => Err(ParseError::Incomplete),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let (parsed, consumed) = parse_request_line(req).unwrap();

        assert_eq!(parsed.method, "GET");
        assert_eq!(parsed.target, "/index.html");
        assert_eq!(consumed, "GET /index.html ".len());
    }
}
