//! HTTP client trait and implementations.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::FetchError;

use super::{DEFAULT_MAX_REDIRECTS, USER_AGENT};

/// Trait for HTTP clients, enabling mockability in tests.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Fetch a page and return its body as text.
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError>;
}

/// Configuration for ReqwestClient.
#[derive(Clone)]
pub struct ReqwestClientBuilder {
    user_agent: String,
    max_redirects: usize,
    timeout: Option<Duration>,
}

impl Default for ReqwestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReqwestClientBuilder {
    /// Create a builder with the fixed browser user agent, redirect following
    /// on, and no timeout beyond reqwest's own defaults.
    pub fn new() -> Self {
        Self {
            user_agent: USER_AGENT.to_string(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            timeout: None,
        }
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set how many redirects to follow. 0 disables redirect following.
    pub fn max_redirects(mut self, max: usize) -> Self {
        self.max_redirects = max;
        self
    }

    /// Set a whole-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the ReqwestClient.
    pub fn build(self) -> Result<ReqwestClient, reqwest::Error> {
        let redirect = if self.max_redirects == 0 {
            reqwest::redirect::Policy::none()
        } else {
            reqwest::redirect::Policy::limited(self.max_redirects)
        };

        let mut builder = reqwest::Client::builder()
            .user_agent(&self.user_agent)
            .redirect(redirect);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(ReqwestClient {
            inner: builder.build()?,
        })
    }
}

/// Production HTTP client. One GET per call, no retries, no caching.
#[derive(Clone)]
pub struct ReqwestClient {
    /// reqwest clients are internally reference counted; clones share a pool.
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Create a client with the default configuration.
    pub fn new() -> Result<Self, reqwest::Error> {
        ReqwestClientBuilder::new().build()
    }

    /// Get a builder for custom configuration.
    pub fn builder() -> ReqwestClientBuilder {
        ReqwestClientBuilder::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        let response = match self.inner.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                let err = FetchError::from(e);
                tracing::error!(url, error = %err, "request error");
                return Err(err);
            }
        };

        let status = response.status();
        tracing::debug!(url, status = %status, headers = ?response.headers(), "network: response received");

        if !status.is_success() {
            tracing::error!(url, status = %status, headers = ?response.headers(), "http status error");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| {
            let err = FetchError::from(e);
            tracing::error!(url, error = %err, "failed to read response body");
            err
        })
    }
}

/// Mock response for testing.
#[derive(Clone, Debug)]
pub enum MockResponse {
    Html(String),
    /// Upstream answered with this non-2xx status.
    Status(u16),
    /// Transport failure with this description.
    RequestError(String),
}

/// Mock HTTP client for testing.
#[derive(Default)]
pub struct MockClient {
    responses: HashMap<String, MockResponse>,
}

impl MockClient {
    /// Create a new empty mock client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a response for a URL.
    pub fn with_response(mut self, url: &str, response: MockResponse) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    /// Add an HTML response for a URL.
    pub fn with_html(self, url: &str, html: &str) -> Self {
        self.with_response(url, MockResponse::Html(html.to_string()))
    }

    /// Add an upstream status failure for a URL.
    pub fn with_status(self, url: &str, status: u16) -> Self {
        self.with_response(url, MockResponse::Status(status))
    }

    /// Add a transport failure for a URL.
    pub fn with_request_error(self, url: &str, error: &str) -> Self {
        self.with_response(url, MockResponse::RequestError(error.to_string()))
    }
}

#[async_trait]
impl HttpClient for MockClient {
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        match self.responses.get(url) {
            Some(MockResponse::Html(html)) => Ok(html.clone()),
            Some(MockResponse::Status(status)) => Err(FetchError::Status { status: *status }),
            Some(MockResponse::RequestError(e)) => Err(FetchError::Request(e.clone())),
            None => Err(FetchError::Request(format!(
                "No mock response for URL: {}",
                url
            ))),
        }
    }
}
