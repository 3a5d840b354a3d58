//! HTTP protocol implementation.
//!
//! This module implements the server side of a severe subset of HTTP/1.x:
//! one request per connection, no keep-alive, no request bodies. Only the
//! method and target tokens of the request line are ever interpreted.
//!
//! # Architecture
//!
//! - **`connection`**: the per-connection handler implementing the
//!   request-response state machine
//! - **`parser`**: extracts the request-line tokens from the read buffer
//! - **`request`**: the parsed request-line representation
//! - **`response`**: status codes and response heads
//! - **`writer`**: serializes heads and streams file bodies to the client
//! - **`mime`**: content-type inference from file extensions
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌────────────────────┐
//!        │ ReadingRequestLine │ ← Scan for the method and target tokens
//!        └─────────┬──────────┘
//!                  │ Tokens read (peer close here skips straight to Closed)
//!                  ▼
//!        ┌────────────────────┐
//!        │  DrainingRequest   │ ← Discard the rest of the request
//!        └─────────┬──────────┘
//!                  ▼
//!        ┌────────────────────┐
//!        │     Resolving      │ ← Map the target onto the served root
//!        └─────────┬──────────┘
//!                  │
//!        ┌─────────┴──────────┐
//!        ▼                    ▼
//! ┌──────────────┐   ┌─────────────────────┐
//! │ RespondingOk │   │ RespondingNotFound  │
//! └──────┬───────┘   └──────────┬──────────┘
//!        │ Head + file streamed │ Fixed 404 written
//!        └─────────┬────────────┘
//!                  ▼
//!        ┌────────────────────┐
//!        │       Closed       │ ← Socket and file handle released
//!        └────────────────────┘
//! ```
//!
//! `Closed` is reached on every path, including every error path.

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
