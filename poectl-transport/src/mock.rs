//! Recording mock transport for tests.
//!
//! Responses are canned per (method, path) route and consumed in order.
//! Every call is recorded so orchestration tests can assert not just what
//! came back but which exchanges happened and how many times.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use crate::{HttpResponse, Method, Transport, TransportError};

/// One recorded `send` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub body: Option<String>,
    pub cookie: Option<String>,
}

type ResponseQueue = VecDeque<Result<HttpResponse, TransportError>>;

/// Mock transport with canned responses and full call recording.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<(Method, String), ResponseQueue>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    /// Create a mock with no canned responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the given route.
    pub fn enqueue(&self, method: Method, path: &str, response: HttpResponse) {
        self.responses
            .lock()
            .expect("mock transport lock")
            .entry((method, path.to_string()))
            .or_default()
            .push_back(Ok(response));
    }

    /// Queue a transport failure for the given route.
    pub fn enqueue_error(&self, method: Method, path: &str, error: TransportError) {
        self.responses
            .lock()
            .expect("mock transport lock")
            .entry((method, path.to_string()))
            .or_default()
            .push_back(Err(error));
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("mock transport lock").clone()
    }

    /// Number of calls made to a route.
    pub fn count(&self, method: Method, path: &str) -> usize {
        self.calls
            .lock()
            .expect("mock transport lock")
            .iter()
            .filter(|c| c.method == method && c.path == path)
            .count()
    }
}

impl Transport for MockTransport {
    fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&str>,
        cookie: Option<&str>,
    ) -> Result<HttpResponse, TransportError> {
        self.calls
            .lock()
            .expect("mock transport lock")
            .push(RecordedCall {
                method,
                path: path.to_string(),
                body: body.map(str::to_string),
                cookie: cookie.map(str::to_string),
            });

        self.responses
            .lock()
            .expect("mock transport lock")
            .get_mut(&(method, path.to_string()))
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| {
                Err(TransportError::Connection(format!(
                    "no canned response for {} {}",
                    method, path
                )))
            })
    }
}
