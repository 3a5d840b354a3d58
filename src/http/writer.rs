use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Chunk size for streaming file bodies.
const FILE_CHUNK: usize = 8192;

/// Line terminators are bare `\n` throughout, not `\r\n`.
fn serialize_head(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers, in insertion order
    for (k, v) in &resp.headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\n");
    }

    // Head/body separator
    buf.extend_from_slice(b"\n");

    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_head(response),
            written: 0,
        }
    }

    /// The exact bytes this writer puts on the wire for the head.
    pub fn head_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub async fn write_to_stream(&mut self, stream: &mut TcpStream) -> anyhow::Result<()> {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }

    /// Streams the full file body to the client in fixed-size chunks,
    /// returning the number of bytes sent. A write failure is terminal:
    /// the client is assumed gone and nothing is retried.
    pub async fn stream_file(stream: &mut TcpStream, file: &mut File) -> anyhow::Result<u64> {
        let mut chunk = [0u8; FILE_CHUNK];
        let mut total = 0u64;

        loop {
            let n = file.read(&mut chunk).await?;

            if n == 0 {
                break;
            }

            stream.write_all(&chunk[..n]).await?;
            total += n as u64;
        }

        stream.flush().await?;
        Ok(total)
    }
}
