//! HTTP/1.1 protocol implementation for embedded systems.
//!
//! This module provides a lightweight HTTP server designed specifically for
//! embedded systems and `no_std` environments. It focuses on simplicity,
//! predictable memory usage, and compatibility with resource-constrained devices.
//!
//! # Features
//!
//! - One request per connection, `Connection: close` on every response
//! - GET only; other verbs are answered with `405 Method Not Allowed`
//! - Fixed-size request buffer (128 bytes by default) for predictable memory usage
//! - Query string split into name/value pairs
//! - Exact-match routing with `serve_url` and `redirect`
//!
//! # Usage
//!
//! The main entry point is the [`Request`] which works with any connection
//! type implementing the [`crate::network::Connection`] trait.
//!
//! ```rust,no_run
//! use microweb::network::application::http::{ContentType, Request};
//! # use microweb::network::Connection;
//! # struct MockConnection;
//! # impl Connection for MockConnection {}
//! # impl microweb::network::Read for MockConnection {
//! #     type Error = ();
//! #     fn available(&mut self) -> bool { false }
//! #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> { Ok(0) }
//! # }
//! # impl microweb::network::Write for MockConnection {
//! #     type Error = ();
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl microweb::network::Close for MockConnection {
//! #     type Error = ();
//! #     fn is_connected(&self) -> bool { false }
//! #     fn close(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//!
//! let connection = MockConnection;
//! let mut request = Request::new(connection);
//!
//! request.serve_url("/api/status", ContentType::Json, |req| {
//!     req.print(r#"{"status":"ok"}"#)
//! })?;
//! # Ok::<(), microweb::network::error::Error>(())
//! ```

/// HTTP server implementation and supporting types.
///
/// Contains the main [`Request`](server::Request) struct, the query variable
/// table and the protocol error kinds.
pub mod server;

pub use server::{ContentType, HttpError, QueryTable, Request};
