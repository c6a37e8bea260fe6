//! Fetching service: raw bulletin text and parsed rows
//!
//! Combines a [`BulletinSource`] with the [`BulletinParser`]. The only
//! suspension point is the fetch itself; parsing runs synchronously on the
//! returned text.

use tracing::debug;

use crate::app::adapters::{BulletinSource, HttpSource};
use crate::app::models::ParsedRow;
use crate::app::services::bulletin_parser::{BulletinParser, ParseResult};
use crate::config::FetchConfig;
use crate::Result;

/// Retrieves the latest bulletin and turns it into [`ParsedRow`]s
#[derive(Debug, Clone)]
pub struct FetchingService<S = HttpSource> {
    source: S,
    config: FetchConfig,
    parser: BulletinParser,
}

impl FetchingService<HttpSource> {
    /// Service over HTTP with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(FetchConfig::default())
    }

    /// Service over HTTP with a custom configuration
    pub fn with_config(config: FetchConfig) -> Result<Self> {
        let source = HttpSource::new(&config)?;
        Self::with_source(source, config)
    }
}

impl<S: BulletinSource> FetchingService<S> {
    /// Service over any bulletin source
    pub fn with_source(source: S, config: FetchConfig) -> Result<Self> {
        config.validate()?;
        let parser = BulletinParser::new().with_min_success_rate(config.min_success_rate);

        Ok(Self {
            source,
            config,
            parser,
        })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Raw bulletin text from `uri`
    pub async fn get_response(&self, uri: &str) -> Result<String> {
        self.source.fetch(uri).await
    }

    /// Raw bulletin text from the configured source address
    pub async fn get_response_default(&self) -> Result<String> {
        self.get_response(&self.config.source_uri).await
    }

    /// Parse bulletin text that was already fetched
    pub fn parser(&self, response: &str) -> Result<ParseResult> {
        self.parser.parse(response)
    }

    /// Fetch and parse the bulletin, keeping the parse statistics
    pub async fn get_last_earthquakes_with_stats(&self) -> Result<ParseResult> {
        let response = self.get_response_default().await?;
        debug!("Bulletin response is {} bytes", response.len());
        self.parser(&response)
    }

    /// Fetch and parse the bulletin
    pub async fn get_last_earthquakes(&self) -> Result<Vec<ParsedRow>> {
        Ok(self.get_last_earthquakes_with_stats().await?.rows)
    }
}
