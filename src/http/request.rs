/// A parsed request line.
///
/// Only the first two tokens are kept. The method is an uninterpreted
/// token: the server never validates or branches on it, and every request
/// is answered as a file retrieval. The target is the raw request path,
/// exactly as the client sent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Raw method token (e.g. "GET")
    pub method: String,
    /// Raw request target (e.g. "/index.html"), used to locate a file
    pub target: String,
}

impl Request {
    pub fn new(method: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            target: target.into(),
        }
    }
}
