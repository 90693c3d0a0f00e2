//! HTTP transport abstraction for the switch management console.
//!
//! The core never talks HTTP directly; it is written against the `Transport`
//! trait so the same authentication and mutation logic runs over the real
//! LAN client and over a recording mock in tests. One request is in flight
//! at a time and every exchange either completes or times out.

pub mod http;
pub mod mock;

use std::fmt;
use std::time::Duration;

use thiserror::Error;

pub use http::{HttpTransport, REQUEST_TIMEOUT};
pub use mock::{MockTransport, RecordedCall};

/// HTTP method for a console exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// One completed HTTP exchange.
///
/// Headers are carried as a raw `Name: value` block because the cookie
/// grammar scans them as text, the same way it scans page bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: String,
    pub body: String,
}

impl HttpResponse {
    /// A 200 response with the given body and no headers.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            headers: String::new(),
            body: body.into(),
        }
    }

    /// A 200 response with the given headers and body.
    pub fn ok_with_headers(headers: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status: 200,
            headers: headers.into(),
            body: body.into(),
        }
    }

    /// An empty response with the given status.
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            headers: String::new(),
            body: String::new(),
        }
    }
}

/// Errors from the transport layer.
///
/// Always fatal to the current call; nothing is retried.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

/// Capability to exchange one request with the console.
pub trait Transport: Send + Sync {
    /// Send a request and block until the response arrives or the timeout
    /// elapses. `cookie` is sent verbatim as the `Cookie` header.
    fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&str>,
        cookie: Option<&str>,
    ) -> Result<HttpResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
    }

    #[test]
    fn test_response_ok_constructor() {
        let response = HttpResponse::ok("<html>");
        assert_eq!(response.status, 200);
        assert_eq!(response.body, "<html>");
        assert!(response.headers.is_empty());
    }

    #[test]
    fn test_response_with_status() {
        let response = HttpResponse::with_status(404);
        assert_eq!(response.status, 404);
        assert!(response.body.is_empty());
    }
}
