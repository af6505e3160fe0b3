//! A network abstraction layer for embedded systems
//!
//! This module provides the byte-stream traits the HTTP server is built on.
//! A transport only has to say whether it is still connected, whether a byte
//! can be read right now, and how to read, write, flush and close. Anything
//! from a WiFi module's TCP socket to a test script can implement them.
//!

#![deny(unsafe_code)]

/// Common error types for network operations
pub mod error;

/// Application-layer protocols built on the transport traits
pub mod application;

/// TCP transport on top of `std::net`
#[cfg(feature = "std")]
pub mod tcp;

/// Re-exports of common traits
pub mod prelude {
    pub use super::{Bind, Close, Connection, Read, Write};
}

/// The receiving half of a connection.
pub trait Read {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Returns `true` when at least one byte can be read without waiting
    fn available(&mut self) -> bool;
    /// Read data from the connection
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// The sending half of a connection.
pub trait Write {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Write data to the connection
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;
    /// Flush the write buffer
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Connection lifecycle.
pub trait Close {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Whether the peer is still connected and the connection was not closed
    fn is_connected(&self) -> bool;
    /// Close the connection
    fn close(&mut self) -> Result<(), Self::Error>;
}

/// A synchronous connection
pub trait Connection: Read + Write + Close {}

/// A synchronous binder (server)
pub trait Bind {
    /// Associated connection type
    type Connection: Connection;
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Bind to a local address and wait for incoming connections
    fn bind(&mut self, local: &str) -> Result<Self::Connection, Self::Error>;
}

impl<T: Read + ?Sized> Read for &mut T {
    type Error = T::Error;

    fn available(&mut self) -> bool {
        (**self).available()
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        (**self).read(buf)
    }
}

impl<T: Write + ?Sized> Write for &mut T {
    type Error = T::Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        (**self).write(buf)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        (**self).flush()
    }
}

impl<T: Close + ?Sized> Close for &mut T {
    type Error = T::Error;

    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        (**self).close()
    }
}

// Lets a request borrow a connection the caller keeps inspecting afterwards.
impl<T: Connection + ?Sized> Connection for &mut T {}
