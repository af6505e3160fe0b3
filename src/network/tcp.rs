//! TCP transport for hosted targets.
//!
//! Lets the server run on Linux-based devices (or a development machine)
//! on top of `std::net`. [`TcpAcceptor`] hands out one [`TcpConnection`] per
//! call to [`Bind::bind`].

use super::error::Error;
use super::{Bind, Close, Connection, Read, Write};
use std::io::{ErrorKind, Read as StdRead, Write as StdWrite};
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream};

/// A connected TCP stream.
#[derive(Debug)]
pub struct TcpConnection {
    stream: TcpStream,
    open: bool,
}

impl TcpConnection {
    /// Wraps an already connected stream.
    pub fn new(stream: TcpStream) -> Self {
        Self { stream, open: true }
    }

    /// Address of the remote peer, if still known.
    pub fn peer_addr(&self) -> Option<SocketAddr> {
        self.stream.peer_addr().ok()
    }
}

impl Read for TcpConnection {
    type Error = Error;

    // Blocks until the peer sends something or goes away.
    fn available(&mut self) -> bool {
        if !self.open {
            return false;
        }
        let mut probe = [0u8; 1];
        match self.stream.peek(&mut probe) {
            Ok(0) => {
                self.open = false;
                false
            }
            Ok(_) => true,
            Err(e) if e.kind() == ErrorKind::WouldBlock => false,
            Err(_) => {
                self.open = false;
                false
            }
        }
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.stream.read(buf).map_err(|e| {
            if e.kind() == ErrorKind::WouldBlock {
                Error::Timeout
            } else {
                Error::ReadError
            }
        })
    }
}

impl Write for TcpConnection {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.stream.write(buf).map_err(|_| Error::WriteError)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.stream.flush().map_err(|_| Error::WriteError)
    }
}

impl Close for TcpConnection {
    type Error = Error;

    fn is_connected(&self) -> bool {
        self.open
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        if !self.open {
            return Err(Error::NotOpen);
        }
        self.open = false;
        self.stream
            .shutdown(Shutdown::Both)
            .map_err(|_| Error::ConnectionClosed)
    }
}

impl Connection for TcpConnection {}

/// Accepts incoming TCP connections.
///
/// The listener is created by the first [`bind`](Bind::bind) call; later calls
/// ignore the address and accept the next connection on the same listener.
#[derive(Debug, Default)]
pub struct TcpAcceptor {
    listener: Option<TcpListener>,
}

impl TcpAcceptor {
    /// Creates an acceptor that binds lazily.
    pub fn new() -> Self {
        Self { listener: None }
    }

    /// Creates an acceptor around an already bound listener.
    pub fn from_listener(listener: TcpListener) -> Self {
        Self {
            listener: Some(listener),
        }
    }

    /// The bound local address, once listening.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.listener.as_ref().and_then(|l| l.local_addr().ok())
    }
}

impl Bind for TcpAcceptor {
    type Connection = TcpConnection;
    type Error = Error;

    fn bind(&mut self, local: &str) -> Result<Self::Connection, Self::Error> {
        let listener = match self.listener.take() {
            Some(listener) => listener,
            None => TcpListener::bind(local).map_err(|_| Error::InvalidAddress)?,
        };
        let accepted = listener.accept();
        self.listener = Some(listener);
        let (stream, _) = accepted.map_err(|_| Error::ConnectionRefused)?;
        Ok(TcpConnection::new(stream))
    }
}
