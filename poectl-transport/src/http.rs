//! Real transport over plain HTTP.
//!
//! The console listens on the switch's LAN address without TLS; exchanges
//! are blocking with a fixed timeout. The underlying client is acquired when
//! the transport is constructed and released when it drops, so there is no
//! process-global init/cleanup pair to manage.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, CONTENT_TYPE, COOKIE};

use crate::{HttpResponse, Method, Transport, TransportError};

/// Fixed per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Blocking HTTP transport bound to one switch host.
pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    /// Create a transport for `host` (IP address or hostname).
    pub fn new(host: &str) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TransportError::Connection(e.to_string()))?;
        Ok(Self {
            base_url: format!("http://{}", host),
            client,
        })
    }
}

impl Transport for HttpTransport {
    fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&str>,
        cookie: Option<&str>,
    ) -> Result<HttpResponse, TransportError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self
                .client
                .post(&url)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded"),
        };
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }
        if let Some(body) = body {
            request = request.body(body.to_string());
        }

        let response = request.send().map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout(REQUEST_TIMEOUT)
            } else {
                TransportError::Connection(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let headers = flatten_headers(response.headers());
        let body = response
            .text()
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Flatten response headers into the raw text block the extraction grammar
/// scans. Values that are not valid UTF-8 are dropped, not errors; the
/// console only emits ASCII headers.
fn flatten_headers(headers: &HeaderMap) -> String {
    let mut out = String::new();
    for (name, value) in headers {
        if let Ok(value) = value.to_str() {
            out.push_str(name.as_str());
            out.push_str(": ");
            out.push_str(value);
            out.push_str("\r\n");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_flatten_headers_format() {
        let mut headers = HeaderMap::new();
        headers.insert("set-cookie", HeaderValue::from_static("SID=abc; path=/"));
        headers.insert("content-type", HeaderValue::from_static("text/html"));

        let block = flatten_headers(&headers);
        assert!(block.contains("set-cookie: SID=abc; path=/\r\n"));
        assert!(block.contains("content-type: text/html\r\n"));
    }

    #[test]
    fn test_base_url_is_plain_http() {
        let transport = HttpTransport::new("192.168.1.10").expect("client");
        assert_eq!(transport.base_url, "http://192.168.1.10");
    }
}
