//! Protocol-level failures answered with an HTTP error page.

/// The ways a request can fail before any route serves it.
///
/// Every variant is terminal for the connection: the client receives a small
/// HTML error page and the connection is closed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HttpError {
    /// The request line has no space between verb and path.
    BadRequest,
    /// The request line has no space after the path, or did not fit into the
    /// request buffer.
    UriTooLong,
    /// The verb is anything other than `GET`.
    MethodNotAllowed,
    /// No route matched the request path.
    NotFound,
}

impl HttpError {
    /// Numeric HTTP status code.
    pub fn status_code(&self) -> u16 {
        match self {
            HttpError::BadRequest => 400,
            HttpError::UriTooLong => 414,
            HttpError::MethodNotAllowed => 405,
            HttpError::NotFound => 404,
        }
    }

    /// Status code and reason phrase as sent on the status line.
    pub fn status_line(&self) -> &'static str {
        match self {
            HttpError::BadRequest => "400 Bad Request",
            HttpError::UriTooLong => "414 Request-URI Too Long",
            HttpError::MethodNotAllowed => "405 Method Not Allowed",
            HttpError::NotFound => "404 Not Found",
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for HttpError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            HttpError::BadRequest => defmt::write!(f, "BadRequest"),
            HttpError::UriTooLong => defmt::write!(f, "UriTooLong"),
            HttpError::MethodNotAllowed => defmt::write!(f, "MethodNotAllowed"),
            HttpError::NotFound => defmt::write!(f, "NotFound"),
        }
    }
}
