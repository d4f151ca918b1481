//! Injected transport collaborator. The core calls it and propagates its failures untouched.

mod http;
mod mock;

pub use http::HttpTransport;
pub use mock::{Call, ExpectationBuilder, Method, MockTransport};

use crate::error::TransportError;
use async_trait::async_trait;
use serde_json::Value;

/// Every method returns the `data` member of the response document: a resource
/// envelope for single-resource calls, an array of envelopes for collections.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str) -> Result<Value, TransportError>;

    /// `body` is `None` for bodiless actions (unfreeze, reopen, report-lost).
    async fn post(&self, path: &str, body: Option<Value>) -> Result<Value, TransportError>;

    async fn patch(&self, path: &str, body: Value) -> Result<Value, TransportError>;
}
