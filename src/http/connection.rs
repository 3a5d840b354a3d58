use bytes::{Buf, BytesMut};
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tracing::info;

use crate::files::resolver::{self, Resolution, ResolvedFile};
use crate::http::mime;
use crate::http::parser::{self, ParseError, parse_request_line};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Read size for filling the request buffer.
const READ_CHUNK: usize = 1024;

/// Scratch size for draining leftover request bytes.
const DRAIN_CHUNK: usize = 512;

pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    root_dir: String,
    state: ConnectionState,
    // whether the most recent socket read filled its whole chunk
    last_read_filled: bool,
}

pub enum ConnectionState {
    ReadingRequestLine,
    DrainingRequest(Request),
    Resolving(Request),
    RespondingNotFound,
    RespondingOk(ResolvedFile, File),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, root_dir: String) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            root_dir,
            state: ConnectionState::ReadingRequestLine,
            last_read_filled: false,
        }
    }

    /// Drives the connection through its state machine until `Closed`.
    ///
    /// Exactly one request is answered per connection; every exit path,
    /// error or not, releases the socket and any open file handle.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);

            self.state = match state {
                ConnectionState::ReadingRequestLine => {
                    match self.read_request_line().await? {
                        Some(req) => ConnectionState::DrainingRequest(req),
                        // Peer went away before sending a full request
                        // line: nothing to answer
                        None => ConnectionState::Closed,
                    }
                }

                ConnectionState::DrainingRequest(req) => {
                    info!("Request: {} {}", req.method, req.target);
                    self.drain_request().await?;
                    ConnectionState::Resolving(req)
                }

                ConnectionState::Resolving(req) => {
                    match resolver::resolve(&self.root_dir, &req.target).await {
                        Resolution::File(file) => match File::open(&file.path).await {
                            Ok(handle) => ConnectionState::RespondingOk(file, handle),
                            // Stat succeeded but open did not (permissions,
                            // unlink race): same answer as a missing file
                            Err(_) => ConnectionState::RespondingNotFound,
                        },
                        Resolution::NotFound => ConnectionState::RespondingNotFound,
                    }
                }

                ConnectionState::RespondingNotFound => {
                    let mut writer = ResponseWriter::new(&Response::not_found());
                    writer.write_to_stream(&mut self.stream).await?;
                    ConnectionState::Closed
                }

                ConnectionState::RespondingOk(file, mut handle) => {
                    let content_type = mime::mime_for_path(&file.path.to_string_lossy());

                    let mut writer = ResponseWriter::new(&Response::ok(file.len, content_type));
                    writer.write_to_stream(&mut self.stream).await?;
                    ResponseWriter::stream_file(&mut self.stream, &mut handle).await?;

                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        Ok(())
    }

    /// Reads until the buffer holds a full method+target pair.
    ///
    /// Returns `None` when the peer closes before both tokens arrive; the
    /// connection is then abandoned with no response. An oversized token
    /// is an error and also gets no response.
    async fn read_request_line(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            // Try parsing whatever we already have
            match parse_request_line(&self.buffer) {
                Ok((request, consumed)) => {
                    self.buffer.advance(consumed);
                    return Ok(Some(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(ParseError::TokenTooLong) => {
                    anyhow::bail!(
                        "request-line token over {} bytes",
                        parser::MAX_TOKEN_LEN
                    );
                }
            }

            let mut temp = [0u8; READ_CHUNK];
            let n = self.stream.read(&mut temp).await?;

            if n == 0 {
                // Client closed connection
                return Ok(None);
            }

            self.last_read_filled = n == temp.len();
            self.buffer.extend_from_slice(&temp[..n]);
        }
    }

    /// Discards the rest of the request: headers, version, body.
    ///
    /// Leftover buffered bytes are dropped outright. The socket is only
    /// read further while the previous read came back full; a short read
    /// means the request has been consumed, so a client waiting for its
    /// response is never blocked on.
    async fn drain_request(&mut self) -> anyhow::Result<()> {
        self.buffer.clear();

        if !self.last_read_filled {
            return Ok(());
        }

        let mut scratch = [0u8; DRAIN_CHUNK];
        loop {
            let n = self.stream.read(&mut scratch).await?;
            if n < scratch.len() {
                return Ok(());
            }
        }
    }
}
