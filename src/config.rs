//! Configuration for fetching the bulletin.
//!
//! Settings are built programmatically (or deserialized from a host
//! application's own configuration); nothing is read from the environment.

use crate::constants::{DEFAULT_MIN_SUCCESS_RATE, DEFAULT_SOURCE_URI, DEFAULT_TIMEOUT_SECS};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fetch configuration shared by the services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Address of the bulletin page
    pub source_uri: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User-Agent header sent with each request
    pub user_agent: String,

    /// Success rate (percent) below which a parse is logged as degraded
    pub min_success_rate: f64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            source_uri: DEFAULT_SOURCE_URI.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            min_success_rate: DEFAULT_MIN_SUCCESS_RATE,
        }
    }
}

impl FetchConfig {
    /// Create configuration with a custom source address
    pub fn with_source_uri(mut self, uri: impl Into<String>) -> Self {
        self.source_uri = uri.into();
        self
    }

    /// Create configuration with a custom timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Create configuration with a custom User-Agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Create configuration with a custom degraded-parse threshold
    pub fn with_min_success_rate(mut self, rate: f64) -> Self {
        self.min_success_rate = rate;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let uri = self.source_uri.trim();
        if uri.is_empty() {
            return Err(Error::configuration("source_uri cannot be empty"));
        }
        if !(uri.starts_with("http://") || uri.starts_with("https://")) {
            return Err(Error::configuration(format!(
                "source_uri must be an http(s) address, got '{}'",
                uri
            )));
        }

        if self.timeout_secs == 0 {
            return Err(Error::configuration("timeout_secs must be greater than 0"));
        }

        if !(0.0..=100.0).contains(&self.min_success_rate) {
            return Err(Error::configuration(format!(
                "min_success_rate must be between 0 and 100, got {}",
                self.min_success_rate
            )));
        }

        Ok(())
    }
}
