//! # microweb - single-request HTTP server for embedded devices
//!
//! A tiny HTTP/1.1 request parser and responder for resource-constrained
//! devices. One [`Request`](network::application::http::server::Request) owns
//! one connection: constructing it reads the request line and headers into a
//! fixed-size buffer, splits out the verb, path and query string, and
//! tokenizes the query into name/value pairs. The application then offers the
//! request to its routes one by one; the first route whose path matches writes
//! the response and closes the connection. A request nobody served is answered
//! with `404 Not Found` when it is dropped.
//!
//! This library is designed for embedded systems and supports `no_std`
//! environments. It never allocates on the heap.
//!
//! ## Features
//!
//! - **Fixed memory**: the request lives in a `[u8; N]` buffer, query variables
//!   in `heapless` containers
//! - **Zero-copy views**: verb, path and query string are spans into the buffer
//! - **Transport agnostic**: works with any type implementing
//!   [`Connection`](network::Connection)
//! - **Exclusive routing**: `serve_url` / `redirect` chains, the first match wins
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! microweb = "0.1.0"
//! ```
//!
//! ### Serving a page
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
//! request.redirect("/", "/index.html")?;
//! request.serve_url("/index.html", ContentType::Html, |req| {
//!     req.print("<h1>Hello from the device</h1>")
//! })?;
//! request.serve_url("/led", ContentType::Text, |req| {
//!     let on = req.value("state") == Some("on");
//!     req.print(if on { "LED on" } else { "LED off" })
//! })?;
//! // Dropping `request` answers 404 if no route matched.
//! # Ok::<(), microweb::network::error::Error>(())
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Linux-based IoT devices (Raspberry Pi, etc.)
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support and the TCP transport in
//!   `network::tcp` (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

mod log;

/// Network abstraction layer providing the transport traits and the HTTP server.
///
/// This module contains the byte-stream connection traits the server is built
/// on, and the HTTP request parser and responder itself.
pub mod network;
