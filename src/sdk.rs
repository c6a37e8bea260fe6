//! Namespaced entry points.
//!
//! - [`fetching::V1`] - raw bulletin text and parsed rows
//! - [`earthquakes::V1`] - mapped earthquake records

/// Raw bulletin capabilities
pub mod fetching {
    pub type V1 = crate::app::services::fetching_service::FetchingService;
}

/// Domain record capabilities
pub mod earthquakes {
    pub type V1 = crate::app::services::earthquake_service::EarthquakeService;
}
