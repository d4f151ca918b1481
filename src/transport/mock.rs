//! In-memory transport for tests.
//!
//! Responses are queued per `(method, path)` and replayed in order. Every call is
//! recorded with its body so tests can assert on the exact outbound payload.
//!
//! ```
//! use unit_sdk::transport::{Method, MockTransport, Transport};
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mock = MockTransport::new();
//! mock.expect_get("/accounts/1").return_ok(json!({ "id": "1", "type": "depositAccount" }));
//!
//! let data = mock.get("/accounts/1").await.unwrap();
//! assert_eq!(data["id"], "1");
//! assert_eq!(mock.calls()[0].method, Method::Get);
//! mock.verify();
//! # }
//! ```

use crate::error::TransportError;
use crate::transport::Transport;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        })
    }
}

/// One recorded request.
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

type Response = Result<Value, String>;

#[derive(Default)]
struct State {
    expectations: HashMap<(Method, String), VecDeque<Response>>,
    calls: Vec<Call>,
}

/// Cloning shares the same expectations and call log.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<State>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect(&self, method: Method, path: impl Into<String>) -> ExpectationBuilder<'_> {
        ExpectationBuilder {
            mock: self,
            method,
            path: path.into(),
        }
    }

    pub fn expect_get(&self, path: impl Into<String>) -> ExpectationBuilder<'_> {
        self.expect(Method::Get, path)
    }

    pub fn expect_post(&self, path: impl Into<String>) -> ExpectationBuilder<'_> {
        self.expect(Method::Post, path)
    }

    pub fn expect_patch(&self, path: impl Into<String>) -> ExpectationBuilder<'_> {
        self.expect(Method::Patch, path)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    /// Panics if any queued response was never consumed.
    pub fn verify(&self) {
        let state = self.lock();
        let pending: Vec<String> = state
            .expectations
            .iter()
            .filter(|(_, queue)| !queue.is_empty())
            .map(|((method, path), queue)| format!("{method} {path} ({} left)", queue.len()))
            .collect();
        assert!(pending.is_empty(), "unmet expectations: {}", pending.join(", "));
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, method: Method, path: String, response: Response) {
        self.lock()
            .expectations
            .entry((method, path))
            .or_default()
            .push_back(response);
    }

    fn respond(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value, TransportError> {
        let mut state = self.lock();
        state.calls.push(Call {
            method,
            path: path.to_string(),
            body,
        });
        let next = state
            .expectations
            .get_mut(&(method, path.to_string()))
            .and_then(VecDeque::pop_front);
        match next {
            Some(Ok(data)) => Ok(data),
            Some(Err(message)) => Err(TransportError::msg(message)),
            None => Err(TransportError::msg(format!("unexpected request: {method} {path}"))),
        }
    }
}

pub struct ExpectationBuilder<'a> {
    mock: &'a MockTransport,
    method: Method,
    path: String,
}

impl ExpectationBuilder<'_> {
    /// Queues `data` as the `data` member of the next matching response.
    pub fn return_ok(self, data: Value) {
        self.mock.push(self.method, self.path, Ok(data));
    }

    pub fn return_err(self, message: impl Into<String>) {
        self.mock.push(self.method, self.path, Err(message.into()));
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, path: &str) -> Result<Value, TransportError> {
        self.respond(Method::Get, path, None)
    }

    async fn post(&self, path: &str, body: Option<Value>) -> Result<Value, TransportError> {
        self.respond(Method::Post, path, body)
    }

    async fn patch(&self, path: &str, body: Value) -> Result<Value, TransportError> {
        self.respond(Method::Patch, path, Some(body))
    }
}
