//! Application layer protocol implementations.
//!
//! This module contains the protocols that run on top of the transport
//! traits in [`crate::network`].
//!
//! ## Available Protocols
//!
//! - **[`http`]**: Single-request HTTP/1.1 server for GET requests
//!
//! ## Design Principles
//!
//! All protocol implementations in this module follow these principles:
//!
//! - **Connection Agnostic**: Work with any type implementing [`Connection`](crate::network::Connection)
//! - **No-std Compatible**: Designed for embedded systems without heap allocation
//! - **Resource Conscious**: Use fixed-size buffers and minimal memory
//!
//! ## Usage Pattern
//!
//! 1. Accept a connection using your transport layer
//! 2. Wrap it in a [`Request`](http::Request), which parses the request
//! 3. Offer the request to each route until one serves it

/// HTTP server implementation.
///
/// Provides a minimal HTTP/1.1 request parser and responder suitable for
/// embedded systems, accepting GET requests with a query string.
pub mod http;
