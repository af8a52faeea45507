//! Raw HTTP exchange beneath the authenticated client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ApiClient` decides which headers to attach and what to do with a status
//! code; a `Transport` only moves bytes. Keeping the seam here lets the refresh
//! protocol run natively against a scripted transport in tests.
//!
//! Client-side (csr): `gloo-net` fetch raced against a `gloo-timers` ceiling.
//! Native builds: every send fails with a network error.

use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// One outbound request, fully resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
    /// Access token for the `Authorization: Bearer` header.
    pub bearer: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body. An empty body decodes as JSON `null`.
    ///
    /// # Errors
    ///
    /// Returns the serde error text when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, String> {
        let text = if self.body.trim().is_empty() { "null" } else { self.body.as_str() };
        serde_json::from_str(text).map_err(|e| e.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("timed out after {0} ms")]
    Timeout(u32),
}

/// Sends one request and returns whatever status came back.
///
/// Non-2xx statuses are responses, not errors; only failures to complete the
/// exchange are `TransportError`s.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Browser `fetch` with a fixed per-request ceiling.
#[derive(Clone, Copy, Debug)]
pub struct BrowserTransport {
    timeout_ms: u32,
}

impl BrowserTransport {
    #[must_use]
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            use futures::future::{Either, select};

            let exchange = Box::pin(fetch(request));
            let ceiling = Box::pin(gloo_timers::future::TimeoutFuture::new(self.timeout_ms));
            match select(exchange, ceiling).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => {
                    log::warn!("transport: {} timed out after {} ms", request.url, self.timeout_ms);
                    Err(TransportError::Timeout(self.timeout_ms))
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, self.timeout_ms);
            Err(TransportError::Network("HTTP is not available outside the browser".to_owned()))
        }
    }
}

#[cfg(feature = "csr")]
async fn fetch(request: &HttpRequest) -> Result<HttpResponse, TransportError> {
    use gloo_net::http::Request;

    let builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
        Method::Put => Request::put(&request.url),
    };
    let mut builder = builder.header("Accept", "application/json");
    if let Some(token) = &request.bearer {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }
    let built = match &request.body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|e| TransportError::Network(e.to_string()))?;

    let resp = built.send().await.map_err(|e| TransportError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| TransportError::Network(e.to_string()))?;
    Ok(HttpResponse { status, body })
}
