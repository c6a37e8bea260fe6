//! Earthquake service: fetch, parse and map into [`EarthquakeRecord`]s

use tracing::info;

use super::fetching_service::FetchingService;
use super::record_mapper::map_records;
use crate::app::adapters::{BulletinSource, HttpSource};
use crate::app::models::EarthquakeRecord;
use crate::config::FetchConfig;
use crate::Result;

/// Retrieves the latest earthquakes as domain records
#[derive(Debug, Clone)]
pub struct EarthquakeService<S = HttpSource> {
    fetching: FetchingService<S>,
}

impl EarthquakeService<HttpSource> {
    /// Service over HTTP with the default configuration
    pub fn new() -> Result<Self> {
        Ok(Self {
            fetching: FetchingService::new()?,
        })
    }

    /// Service over HTTP with a custom configuration
    pub fn with_config(config: FetchConfig) -> Result<Self> {
        Ok(Self {
            fetching: FetchingService::with_config(config)?,
        })
    }
}

impl<S: BulletinSource> EarthquakeService<S> {
    /// Service over any bulletin source
    pub fn with_source(source: S, config: FetchConfig) -> Result<Self> {
        Ok(Self {
            fetching: FetchingService::with_source(source, config)?,
        })
    }

    /// Underlying fetching service
    pub fn fetching(&self) -> &FetchingService<S> {
        &self.fetching
    }

    /// Latest earthquakes in bulletin order (most recent first)
    pub async fn latest(&self) -> Result<Vec<EarthquakeRecord>> {
        let rows = self.fetching.get_last_earthquakes().await?;
        let records = map_records(rows);
        info!("Mapped {} earthquake records", records.len());
        Ok(records)
    }
}
