//! HTTP client contract (§6): `do(request) -> (response, error)` with the
//! standard request/response shape. The default implementation uses
//! `reqwest` on a private current-thread Tokio runtime so the rest of the
//! crate — which is deliberately synchronous and single-threaded (§5) —
//! never has to be async itself.

use std::fmt;

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("network error: {0}")]
    Network(String),
    #[error("non-success status {status} for {url}")]
    Status { status: u16, url: String },
}

pub trait HttpClient: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

impl fmt::Debug for dyn HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<dyn HttpClient>")
    }
}

/// Default implementation: `reqwest::blocking`-equivalent behavior built on
/// top of the async client plus a dedicated current-thread runtime, since
/// this crate carries `reqwest` without its `blocking` feature (shared
/// stack with the teacher's own `reqwest = { features = ["json"] }`).
pub struct ReqwestHttpClient {
    runtime: tokio::runtime::Runtime,
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            runtime: tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to start HTTP runtime"),
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.runtime.block_on(async {
            let response = self
                .client
                .get(&request.url)
                .send()
                .await
                .map_err(|e| HttpError::Network(e.to_string()))?;
            let status = response.status().as_u16();
            if !(200..300).contains(&status) {
                return Err(HttpError::Status { status, url: request.url.clone() });
            }
            let body = response.text().await.map_err(|e| HttpError::Network(e.to_string()))?;
            Ok(HttpResponse { status, body })
        })
    }
}

/// In-memory test double, keyed by exact URL. Mirrors
/// [`crate::vfs::InMemoryFilesystem`]'s open-counting so HTTP fetch tests
/// can assert "at most once per resolution session" too.
pub struct InMemoryHttpClient {
    responses: std::collections::HashMap<String, String>,
    fetch_counts: std::sync::Mutex<std::collections::HashMap<String, usize>>,
}

impl InMemoryHttpClient {
    pub fn new(responses: impl IntoIterator<Item = (String, String)>) -> Self {
        Self { responses: responses.into_iter().collect(), fetch_counts: Default::default() }
    }

    pub fn fetch_count(&self, url: &str) -> usize {
        self.fetch_counts.lock().unwrap().get(url).copied().unwrap_or(0)
    }
}

impl HttpClient for InMemoryHttpClient {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let body = self
            .responses
            .get(&request.url)
            .ok_or_else(|| HttpError::Status { status: 404, url: request.url.clone() })?;
        *self.fetch_counts.lock().unwrap().entry(request.url.clone()).or_insert(0) += 1;
        Ok(HttpResponse { status: 200, body: body.clone() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_http_counts_fetches() {
        let client = InMemoryHttpClient::new([("https://example.com/a.yaml".to_string(), "openapi: 3.1.0".to_string())]);
        let _ = client.execute(HttpRequest::get("https://example.com/a.yaml")).unwrap();
        let _ = client.execute(HttpRequest::get("https://example.com/a.yaml")).unwrap();
        assert_eq!(client.fetch_count("https://example.com/a.yaml"), 2);
    }

    #[test]
    fn in_memory_http_missing_url_errors() {
        let client = InMemoryHttpClient::new([]);
        assert!(client.execute(HttpRequest::get("https://example.com/missing.yaml")).is_err());
    }
}
