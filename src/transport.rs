//! HTTP transport for the FruityVice API.
//!
//! The transport only moves bytes: it issues a GET, reports non-2xx statuses
//! and connection failures as [`TransportError`], and leaves JSON decoding and
//! retry policy to the caller.

use crate::config::Config;
use crate::error::Result;
use reqwest::Url;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use std::future::Future;
use thiserror::Error;

/// A failed GET, with the response status when the server answered at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    pub status: Option<u16>,
    pub message: String,
}

impl TransportError {
    pub fn status(status: u16) -> Self {
        Self {
            status: Some(status),
            message: format!("HTTP status {status}"),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

/// Read-only access to the fruit resource.
///
/// `segments` are appended to the base URL one path segment each, e.g.
/// `&["family", "Rosaceae"]` for `<base>/family/Rosaceae`.
pub trait Transport: Send + Sync {
    fn get(
        &self,
        segments: &[&str],
    ) -> impl Future<Output = std::result::Result<Vec<u8>, TransportError>> + Send;
}

/// [`Transport`] backed by a shared `reqwest` client.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .user_agent(format!("fruity/{}", env!("CARGO_PKG_VERSION")));

        // A system proxy cannot reach a stub bound to our own loopback
        if config.is_loopback() {
            builder = builder.no_proxy();
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    /// Base URL with each segment percent-encoded and appended.
    pub fn endpoint(&self, segments: &[&str]) -> std::result::Result<Url, TransportError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TransportError::other(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl Transport for HttpTransport {
    async fn get(&self, segments: &[&str]) -> std::result::Result<Vec<u8>, TransportError> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%url, "GET");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "request failed");
            return Err(TransportError::status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
