//! Transport seam between the remote client and the network

use crate::remote::error::RemoteResult;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use std::time::Duration;
use url::Url;

/// A single request to the remote store
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: Url, body: Option<String>) -> Self {
        Self { method, url, body }
    }
}

/// Raw response: status code and body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can carry an [`HttpRequest`] to the store
#[async_trait]
pub trait Transport: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Send the request. Only failures to obtain a response are errors; a
    /// non-success status is still `Ok`.
    async fn send(&self, request: HttpRequest) -> RemoteResult<HttpResponse>;
}

/// HTTP transport backed by reqwest
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport. `None` leaves requests without a deadline.
    pub fn new(request_timeout: Option<Duration>) -> RemoteResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    fn name(&self) -> &str {
        "http"
    }

    async fn send(&self, request: HttpRequest) -> RemoteResult<HttpResponse> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}
