//! Single-request HTTP/1.1 server.
//!
//! A [`Request`] is built around one freshly accepted connection. Building it
//! reads the request head byte by byte into a fixed `[u8; N]` buffer, stopping
//! at the blank line that ends the headers, then splits the request line and
//! tokenizes the query string. Header contents are never looked at.
//!
//! The application then offers the request to its routes:
//!
//! ```text
//!   accept ──▶ Request::new ──▶ redirect("/", ..) ──▶ serve_url("/a", ..) ──▶ drop
//!                  │                    │                     │                │
//!             400/405/414          301 + close          200 + handler     404 if still
//!              + close                                     + close            open
//! ```
//!
//! Each route compares its path with the request path. The first match writes
//! the response and closes the connection, which turns every later route into
//! a no-op. If the request is dropped while the connection is still open, no
//! route matched and the client gets `404 Not Found`.

mod error;
mod query;
mod request_line;


pub use error::HttpError;
pub use query::QueryTable;

use self::request_line::RequestLine;
use crate::log::{debug, trace, warning};
use crate::network::Connection;
use crate::network::error::Error;
use core::fmt;
use serde::Serialize;

/// Default size of the request buffer, terminator included.
///
/// Longer requests are truncated; a request line that does not fit is
/// answered with `414 Request-URI Too Long`.
pub const REQUEST_BUFFER_LEN: usize = 128;

/// Default maximum number of query variables per request.
///
/// A query string with more variables is answered with
/// `414 Request-URI Too Long`.
pub const MAX_QUERY_VARS: usize = 16;

/// Largest body [`Request::write_json`] can serialize.
pub const MAX_JSON_BODY_LEN: usize = 256;

const HTTP_VERSION: &[u8] = b"HTTP/1.1 ";
const CRLF: &[u8] = b"\r\n";

/// Body type announced in the `Content-Type` header of a served route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    /// `text/html; charset=utf-8`
    #[default]
    Html,
    /// `text/plain; charset=utf-8`
    Text,
    /// `application/json; charset=utf-8`
    Json,
}

impl ContentType {
    /// The header value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Html => "text/html; charset=utf-8",
            ContentType::Text => "text/plain; charset=utf-8",
            ContentType::Json => "application/json; charset=utf-8",
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ContentType {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ContentType::Html => defmt::write!(f, "Html"),
            ContentType::Text => defmt::write!(f, "Text"),
            ContentType::Json => defmt::write!(f, "Json"),
        }
    }
}

/// One HTTP request on one connection.
///
/// `N` is the size of the request buffer and `V` the maximum number of query
/// variables. Verb, path and query string are views into the buffer and are
/// empty when the request could not be parsed.
///
/// # Examples
///
/// ```rust,no_run
/// use microweb::network::application::http::{ContentType, Request};
/// # use microweb::network::Connection;
/// # struct Socket;
/// # impl Connection for Socket {}
/// # impl microweb::network::Read for Socket {
/// #     type Error = ();
/// #     fn available(&mut self) -> bool { false }
/// #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> { Ok(0) }
/// # }
/// # impl microweb::network::Write for Socket {
/// #     type Error = ();
/// #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
/// #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// # impl microweb::network::Close for Socket {
/// #     type Error = ();
/// #     fn is_connected(&self) -> bool { false }
/// #     fn close(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// use core::fmt::Write;
///
/// // A larger buffer for long URLs, room for 4 query variables.
/// let mut request = Request::<_, 512, 4>::receive(Socket);
///
/// request.serve_url("/sum", ContentType::Text, |req| {
///     let a: i32 = req.value("a").and_then(|v| v.parse().ok()).unwrap_or(0);
///     let b: i32 = req.value("b").and_then(|v| v.parse().ok()).unwrap_or(0);
///     write!(req, "{}", a + b).map_err(|_| microweb::network::error::Error::WriteError)
/// })?;
/// # Ok::<(), microweb::network::error::Error>(())
/// ```
pub struct Request<
    C: Connection,
    const N: usize = REQUEST_BUFFER_LEN,
    const V: usize = MAX_QUERY_VARS,
> {
    connection: C,
    buffer: [u8; N],
    len: usize,
    truncated: bool,
    line: RequestLine,
    query: QueryTable<N, V>,
    error: Option<HttpError>,
}

impl<C: Connection> Request<C> {
    /// Reads and parses a request with the default buffer sizes.
    ///
    /// Blocks until the headers are complete or the peer disconnects. A
    /// malformed request or a verb other than `GET` is answered with an error
    /// page right away and the connection is closed.
    pub fn new(connection: C) -> Self {
        Self::receive(connection)
    }
}

impl<C: Connection, const N: usize, const V: usize> Request<C, N, V> {
    /// Reads and parses a request into an `N` byte buffer.
    ///
    /// See [`Request::new`].
    pub fn receive(connection: C) -> Self {
        const { assert!(N > 1, "request buffer needs room for a byte and the terminator") };

        let mut request = Self {
            connection,
            buffer: [0; N],
            len: 0,
            truncated: false,
            line: RequestLine::empty(0),
            query: QueryTable::new(),
            error: None,
        };
        request.start();
        request
    }

    /// Finishes the current request and parses the next one from `connection`.
    ///
    /// The current request is answered with `404 Not Found` if no route served
    /// it. Nothing from it survives: buffer, views and query variables all
    /// describe the new request afterwards.
    pub fn renew(&mut self, connection: C) {
        self.finish();
        self.connection = connection;
        self.start();
    }

    fn start(&mut self) {
        self.read_head();
        self.query.clear();
        self.line = RequestLine::empty(self.len);
        self.error = None;

        match self.parse() {
            Ok(()) => {
                debug!("{} {}", self.verb(), self.path());
            }
            Err(error) => {
                warning!("rejecting request: {}", error);
                self.error = Some(error);
                if let Err(_e) = self.send_error(error) {
                    warning!("error page not delivered: {}", _e);
                }
            }
        }
    }

    // Polls the connection until the blank line ending the headers. Bytes past
    // the buffer are counted but dropped.
    fn read_head(&mut self) {
        let mut first_char = true;
        let mut count: usize = 0;
        let mut byte = [0u8; 1];

        while self.connection.is_connected() {
            if !self.connection.available() {
                core::hint::spin_loop();
                continue;
            }
            match self.connection.read(&mut byte) {
                Ok(0) => continue,
                Ok(_) => {}
                Err(_) => {
                    warning!("read failed after {} bytes", count);
                    break;
                }
            }

            let c = byte[0];
            if count < N {
                self.buffer[count] = c;
            }
            count = count.saturating_add(1);

            match c {
                b'\n' if first_char => break,
                b'\n' => first_char = true,
                b'\r' => {}
                _ => first_char = false,
            }
        }

        self.len = count.min(N - 1);
        self.truncated = count > N - 1;
        self.buffer[self.len] = 0;
        trace!("read {} bytes, kept {}", count, self.len);
    }

    fn parse(&mut self) -> Result<(), HttpError> {
        self.line = request_line::parse(&self.buffer[..self.len], self.truncated)?;

        let query = self.line.query.as_str(&self.buffer);
        if let Err(error) = self.query.parse(query) {
            self.line = RequestLine::empty(self.len);
            return Err(error);
        }

        if self.verb() != "GET" {
            return Err(HttpError::MethodNotAllowed);
        }
        Ok(())
    }

    // Answers 404 if nothing served the request.
    fn finish(&mut self) {
        if self.connection.is_connected() {
            debug!("no route for {}", self.path());
            self.error = Some(HttpError::NotFound);
            if let Err(_e) = self.send_error(HttpError::NotFound) {
                warning!("error page not delivered: {}", _e);
            }
        }
    }

    /// The request method, e.g. `GET`.
    pub fn verb(&self) -> &str {
        self.line.verb.as_str(&self.buffer)
    }

    /// The request path without the query string.
    pub fn path(&self) -> &str {
        self.line.path.as_str(&self.buffer)
    }

    /// Everything after the `?` of the request target, empty if there is none.
    pub fn query_string(&self) -> &str {
        self.line.query.as_str(&self.buffer)
    }

    /// Value of the query variable `name`; the last one wins on duplicates.
    ///
    /// `None` if the variable is missing or was given without `=`.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.query.get(name)
    }

    /// All query variables.
    pub fn query(&self) -> &QueryTable<N, V> {
        &self.query
    }

    /// Why the request was answered with an error page, if it was.
    pub fn error(&self) -> Option<HttpError> {
        self.error
    }

    /// Whether the request was longer than the buffer and got cut off.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// The stored request bytes.
    pub fn raw(&self) -> &[u8] {
        &self.buffer[..self.len]
    }

    /// Whether the request is still waiting for a response.
    pub fn is_open(&self) -> bool {
        self.connection.is_connected()
    }

    /// Get the underlying connection
    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// Get a mutable reference to the underlying connection
    pub fn connection_mut(&mut self) -> &mut C {
        &mut self.connection
    }

    fn matches(&self, path: &str) -> bool {
        self.connection.is_connected() && self.path() == path
    }

    /// Serves the request with `handler` if its path is exactly `path`.
    ///
    /// On a match the status line and headers are written, `handler` writes
    /// the body through the request it is given, and the connection is
    /// closed, even if the handler failed. Returns whether the route matched.
    /// Does nothing once the request has been answered.
    ///
    /// # Errors
    ///
    /// The first write or close failure, or the handler's own error.
    pub fn serve_url<F>(
        &mut self,
        path: &str,
        content_type: ContentType,
        handler: F,
    ) -> Result<bool, Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Error>,
    {
        if !self.matches(path) {
            return Ok(false);
        }
        debug!("serving {} as {}", path, content_type);

        let mut served = self.write_head("200 OK", "Content-Type", content_type.as_str());
        if served.is_ok() {
            served = handler(self);
        }
        let closed = self.disconnect();
        served.and(closed)?;
        Ok(true)
    }

    /// Answers `301 Moved Permanently` pointing at `new_path` if the request
    /// path is exactly `path`.
    ///
    /// Returns whether the route matched.
    pub fn redirect(&mut self, path: &str, new_path: &str) -> Result<bool, Error> {
        if !self.matches(path) {
            return Ok(false);
        }
        debug!("redirecting {} to {}", path, new_path);

        let sent = self.write_head("301 Moved Permanently", "Location", new_path);
        let closed = self.disconnect();
        sent.and(closed)?;
        Ok(true)
    }

    /// Answers the request with the error page for `error` and closes it.
    ///
    /// Meant for refusing a request before any route runs. Returns `false`
    /// if the request was already answered.
    pub fn reject(&mut self, error: HttpError) -> Result<bool, Error> {
        if !self.connection.is_connected() {
            return Ok(false);
        }
        self.error = Some(error);
        self.send_error(error)?;
        Ok(true)
    }

    /// Writes raw body bytes.
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.send(bytes)
    }

    /// Writes body text.
    pub fn print(&mut self, text: &str) -> Result<(), Error> {
        self.send(text.as_bytes())
    }

    /// Writes body text followed by a line break.
    pub fn println(&mut self, text: &str) -> Result<(), Error> {
        self.send(text.as_bytes())?;
        self.send(CRLF)
    }

    /// Serializes `value` as the JSON body.
    ///
    /// The document must fit into [`MAX_JSON_BODY_LEN`] bytes.
    pub fn write_json<T: Serialize>(&mut self, value: &T) -> Result<(), Error> {
        let mut buf = [0u8; MAX_JSON_BODY_LEN];
        let len = serde_json_core::to_slice(value, &mut buf).map_err(|_| Error::WriteError)?;
        self.send(&buf[..len])
    }

    // Status line, `Connection: close`, one extra header, blank line.
    fn write_head(&mut self, status: &str, name: &str, value: &str) -> Result<(), Error> {
        self.send(HTTP_VERSION)?;
        self.send(status.as_bytes())?;
        self.send(CRLF)?;
        self.send(b"Connection: close\r\n")?;
        self.send(name.as_bytes())?;
        self.send(b": ")?;
        self.send(value.as_bytes())?;
        self.send(CRLF)?;
        self.send(CRLF)
    }

    fn write_error_page(&mut self, status: &str) -> Result<(), Error> {
        self.write_head(status, "Content-Type", "text/html")?;
        self.send(b"<html><head><title>")?;
        self.send(status.as_bytes())?;
        self.send(b"</title></head><body>")?;
        self.send(status.as_bytes())?;
        self.send(b"</body></html>")
    }

    fn send_error(&mut self, error: HttpError) -> Result<(), Error> {
        let sent = self.write_error_page(error.status_line());
        let closed = self.disconnect();
        sent.and(closed)
    }

    fn disconnect(&mut self) -> Result<(), Error> {
        let flushed = self.connection.flush().map_err(|_| Error::WriteError);
        let closed = self.connection.close().map_err(|_| Error::ConnectionClosed);
        flushed.and(closed)
    }

    fn send(&mut self, mut bytes: &[u8]) -> Result<(), Error> {
        while !bytes.is_empty() {
            match self.connection.write(bytes) {
                Ok(0) | Err(_) => return Err(Error::WriteError),
                Ok(n) => bytes = bytes.get(n..).unwrap_or(&[]),
            }
        }
        Ok(())
    }
}

impl<C: Connection, const N: usize, const V: usize> fmt::Write for Request<C, N, V> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.send(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

impl<C: Connection, const N: usize, const V: usize> fmt::Debug for Request<C, N, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("verb", &self.verb())
            .field("path", &self.path())
            .field("query_string", &self.query_string())
            .field("truncated", &self.truncated)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<C: Connection, const N: usize, const V: usize> Drop for Request<C, N, V> {
    fn drop(&mut self) {
        self.finish();
    }
}
