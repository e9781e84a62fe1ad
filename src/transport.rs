//! HTTP transport for search requests and image probes
//!
//! The provider core talks to the network through the [`Transport`] trait so
//! tests can substitute in-memory fakes. [`HttpTransport`] is the real
//! implementation, a thin wrapper over a configured reqwest client.

use async_trait::async_trait;
use reqwest::{Client, Method};
use std::time::Duration;
use url::Url;

use crate::config::HttpConfig;
use crate::error::SearchError;
use crate::types::FetchRequest;

/// Network boundary used by the provider core
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a search request and return the decoded JSON body
    async fn fetch_json(&self, request: &FetchRequest) -> Result<serde_json::Value, SearchError>;

    /// Issue a HEAD request against `url` and return the response status code
    ///
    /// No body transfer; only the status code is meaningful to callers.
    async fn probe_status(&self, url: &str) -> Result<u16, SearchError>;
}

/// HTTP transport with a configurable client
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a new HttpTransport with the given configuration
    pub fn new(config: &HttpConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(&HttpConfig::default())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch_json(&self, request: &FetchRequest) -> Result<serde_json::Value, SearchError> {
        let url = Url::parse(&request.url)?;
        let method = request.options.method.clone().unwrap_or(Method::GET);

        let mut builder = self.client.request(method, url);
        for (name, value) in &request.options.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.options.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?.error_for_status()?;
        let text = response.text().await?;
        let value: serde_json::Value = serde_json::from_str(&text)?;
        Ok(value)
    }

    async fn probe_status(&self, url: &str) -> Result<u16, SearchError> {
        let response = self.client.head(url).send().await?;
        Ok(response.status().as_u16())
    }
}
