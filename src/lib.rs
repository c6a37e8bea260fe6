//! KRDAE Bulletin Library
//!
//! A Rust client for the Kandilli Observatory and Earthquake Research Institute
//! (KOERI) "last earthquakes" bulletin. The bulletin is a plain-text page whose
//! `<pre>` section lists recent earthquakes in fixed-width columns.
//!
//! This library provides tools for:
//! - Fetching the raw bulletin over HTTP (or replaying a saved copy from disk)
//! - Isolating the `<pre>` data block and discarding header/separator lines
//! - Parsing each row into a [`ParsedRow`] with per-row failure isolation
//! - Mapping rows into application-ready [`EarthquakeRecord`] values
//!
//! ## Usage
//!
//! ```rust,no_run
//! use krdae_bulletin::sdk;
//!
//! # async fn example() -> krdae_bulletin::Result<()> {
//! let service = sdk::earthquakes::V1::new()?;
//! for record in service.latest().await? {
//!     println!("{} {:?} {:?}", record.timestamp, record.magnitude.local, record.location.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod sdk;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod bulletin_parser;
        pub mod earthquake_service;
        pub mod fetching_service;
        pub mod record_mapper;
    }
    pub mod adapters {
        pub mod filesystem;
        pub mod http;

        pub use filesystem::LocalFileSource;
        pub use http::{BulletinSource, HttpSource};
    }
}

// Re-export commonly used types
pub use app::models::{AdditionalData, EarthquakeRecord, Location, Magnitude, ParsedRow};
pub use config::FetchConfig;

/// Result type alias for bulletin operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for fetching and parsing the bulletin
///
/// Row-level failures are not represented here: they are absorbed by the
/// bulletin parser and reported through its statistics (see
/// [`app::services::bulletin_parser::RowParseError`]).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The bulletin text could not be retrieved
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The response lacks the expected `<pre>` envelope
    #[error("Malformed bulletin: {message}")]
    MalformedBulletin { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Date/time parsing error
    #[error("Timestamp parsing error: {message}")]
    TimestampParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a transport error without an underlying HTTP error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Create a transport error wrapping a reqwest failure
    pub fn transport_with_source(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a malformed bulletin error
    pub fn malformed_bulletin(message: impl Into<String>) -> Self {
        Self::MalformedBulletin {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a timestamp parsing error
    pub fn timestamp_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::TimestampParsing {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Whether this error means the source changed format rather than a fetch failure
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::MalformedBulletin { .. })
    }
}

// Automatic conversions from common error types
impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport {
            message: "HTTP request failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::TimestampParsing {
            message: "Timestamp parsing failed".to_string(),
            source: error,
        }
    }
}
