//! Request line scanning over the raw request buffer.
//!
//! Nothing is copied: the verb, path and query string come back as
//! [`Span`]s into the buffer the request was read into.

use super::error::HttpError;

/// A `start..end` index pair into a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Index of the first byte.
    pub start: usize,
    /// Index one past the last byte.
    pub end: usize,
}

impl Span {
    /// A zero-length span located at `at`.
    pub const fn empty(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Number of bytes covered.
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no bytes.
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The bytes covered in `buf`, empty if the span lies outside it.
    pub fn slice<'a>(&self, buf: &'a [u8]) -> &'a [u8] {
        buf.get(self.start..self.end).unwrap_or(&[])
    }

    /// The covered bytes as text, empty if they are not valid UTF-8.
    pub fn as_str<'a>(&self, buf: &'a [u8]) -> &'a str {
        core::str::from_utf8(self.slice(buf)).unwrap_or("")
    }
}

/// Where verb, path and raw query string sit in the request buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLine {
    /// The request method, e.g. `GET`.
    pub verb: Span,
    /// The request target without its query string.
    pub path: Span,
    /// Everything after the first `?` of the request target.
    pub query: Span,
}

impl RequestLine {
    /// All three parts empty, pointing at the terminator at `at`.
    pub const fn empty(at: usize) -> Self {
        Self {
            verb: Span::empty(at),
            path: Span::empty(at),
            query: Span::empty(at),
        }
    }
}

/// Splits the stored request `data` into verb, path and query string.
///
/// Only the first line is looked at. `truncated` tells whether the reader had
/// to discard bytes; a truncated request whose first line never ended did not
/// fit into the buffer and is rejected with [`HttpError::UriTooLong`].
pub fn parse(data: &[u8], truncated: bool) -> Result<RequestLine, HttpError> {
    let end = data.len();
    let line_end = data.iter().position(|&b| b == b'\r' || b == b'\n');
    let line = &data[..line_end.unwrap_or(end)];

    let first = find(line, b' ', 0).ok_or(HttpError::BadRequest)?;

    if truncated && line_end.is_none() {
        return Err(HttpError::UriTooLong);
    }

    let second = find(line, b' ', first + 1).ok_or(HttpError::UriTooLong)?;

    let verb = Span {
        start: 0,
        end: first,
    };
    let (path, query) = match find(&line[..second], b'?', first + 1) {
        Some(mark) => (
            Span {
                start: first + 1,
                end: mark,
            },
            Span {
                start: mark + 1,
                end: second,
            },
        ),
        None => (
            Span {
                start: first + 1,
                end: second,
            },
            Span::empty(end),
        ),
    };

    if core::str::from_utf8(&line[..second]).is_err() {
        return Err(HttpError::BadRequest);
    }

    Ok(RequestLine { verb, path, query })
}

fn find(haystack: &[u8], needle: u8, from: usize) -> Option<usize> {
    haystack
        .get(from..)?
        .iter()
        .position(|&b| b == needle)
        .map(|i| i + from)
}
