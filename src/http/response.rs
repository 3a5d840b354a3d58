/// HTTP status codes the server can emit.
///
/// There are exactly two outcomes per connection: the file is served, or
/// the fixed not-found message is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// A response head ready to be serialized.
///
/// The body, when there is one, is streamed separately by the writer;
/// only the status line and headers live here. Headers keep their
/// insertion order so the serialized head is byte-stable.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub headers: Vec<(&'static str, String)>,
}

impl Response {
    /// Head for a file being served: the length from the metadata lookup,
    /// an explicit close directive, and the inferred content type.
    pub fn ok(content_length: u64, content_type: &str) -> Self {
        Self {
            status: StatusCode::Ok,
            headers: vec![
                ("Content-Length", content_length.to_string()),
                ("Connection", "close".to_string()),
                ("Content-Type", content_type.to_string()),
            ],
        }
    }

    /// The fixed not-found head. No headers, no body.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NotFound,
            headers: Vec::new(),
        }
    }
}
