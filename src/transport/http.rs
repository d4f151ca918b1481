//! `reqwest` transport speaking `application/vnd.api+json` with bearer auth.

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::transport::Transport;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

const JSON_API: &str = "application/vnd.api+json";

pub struct HttpTransport {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_API));
        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(TransportError::new)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, TransportError> {
        let response = request
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(TransportError::new)?
            .error_for_status()
            .map_err(TransportError::new)?;
        let mut document: Value = response.json().await.map_err(TransportError::new)?;
        match document.get_mut("data") {
            Some(data) => Ok(data.take()),
            None => Err(TransportError::msg("response document has no data member")),
        }
    }
}

/// `RequestBuilder::json` would force `application/json`.
fn with_body(request: RequestBuilder, body: &Value) -> RequestBuilder {
    request.header(CONTENT_TYPE, JSON_API).body(body.to_string())
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<Value, TransportError> {
        tracing::debug!(method = "GET", path, "request");
        self.send(self.client.get(self.url(path))).await
    }

    async fn post(&self, path: &str, body: Option<Value>) -> Result<Value, TransportError> {
        tracing::debug!(method = "POST", path, has_body = body.is_some(), "request");
        let request = self.client.post(self.url(path));
        let request = match body {
            Some(body) => with_body(request, &body),
            None => request,
        };
        self.send(request).await
    }

    async fn patch(&self, path: &str, body: Value) -> Result<Value, TransportError> {
        tracing::debug!(method = "PATCH", path, "request");
        self.send(with_body(self.client.patch(self.url(path)), &body)).await
    }
}
