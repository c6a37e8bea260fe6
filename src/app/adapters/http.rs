//! HTTP transport for the bulletin
//!
//! The source serves windows-1254 text without declaring a charset, so the
//! body is read as bytes and decoded as UTF-8 lossily. This keeps the
//! mis-encoded header exactly as the line filter expects it.

use std::future::Future;
use tracing::{debug, info};

use crate::config::FetchConfig;
use crate::{Error, Result};

/// Anything that can yield raw bulletin text for an address
pub trait BulletinSource: Send + Sync {
    fn fetch(&self, uri: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Bulletin source backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    /// Build a client using the timeout and User-Agent from `config`
    pub fn new(config: &FetchConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::transport_with_source("Failed to build HTTP client", e))?;

        Ok(Self { client })
    }

    /// Wrap an existing client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl BulletinSource for HttpSource {
    async fn fetch(&self, uri: &str) -> Result<String> {
        info!("Fetching bulletin from {}", uri);

        let response = self
            .client
            .get(uri)
            .send()
            .await
            .map_err(|e| Error::transport_with_source(format!("Request to {} failed", uri), e))?;

        let status = response.status();
        let response = response.error_for_status().map_err(|e| {
            Error::transport_with_source(format!("{} responded with {}", uri, status), e)
        })?;

        let body = response.bytes().await.map_err(|e| {
            Error::transport_with_source(format!("Failed to read body from {}", uri), e)
        })?;
        debug!("Received {} bytes from {}", body.len(), uri);

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
