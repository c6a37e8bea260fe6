//! Data models for KRDAE bulletin processing
//!
//! This module contains the intermediate row representation produced by the
//! bulletin parser and the final earthquake record handed to consumers.

use crate::constants::TIMESTAMP_FORMAT;
use crate::{Error, Result};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

// =============================================================================
// Parsed Row Structure
// =============================================================================

/// One bulletin row after column splitting and numeric coercion
///
/// Built only from rows with at least eight fields. Magnitudes are `None`
/// when the source cell is not a number (the bulletin prints `-.-`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedRow {
    /// Day component with `.` separators replaced by `-`
    pub date: String,

    /// Time of day as printed (`HH:MM:SS`)
    pub time: String,

    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,

    /// Depth in kilometers
    pub depth: f64,

    /// Time dependent (duration) magnitude
    pub magnitude_md: Option<f64>,

    /// Local magnitude
    pub magnitude_ml: Option<f64>,

    /// Moment magnitude
    pub magnitude_mw: Option<f64>,

    /// Place name, e.g. "SINDIRGI (BALIKESIR)"
    pub location_name: Option<String>,

    /// How the solution was produced, e.g. "İlksel" or "REVIZE01"
    pub solution_attribute: String,

    /// Revision timestamp, only when the row carries a separate date column
    pub solution_attribute_date: Option<String>,
}

// =============================================================================
// Earthquake Record Structure
// =============================================================================

/// Earthquake record ready for application use
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeRecord {
    /// Lookup key built from timestamp, coordinates and local magnitude.
    ///
    /// Not globally unique: two events at the same coordinates within the
    /// same second and with the same local magnitude share an identity.
    pub identity: String,

    /// `"<date> <time> GMT+0300"`
    pub timestamp: String,

    /// Depth in kilometers
    pub depth: f64,

    pub location: Location,
    pub magnitude: Magnitude,
    pub additional: AdditionalData,
}

impl EarthquakeRecord {
    /// Parse the timestamp into a zoned date-time
    pub fn occurred_at(&self) -> Result<DateTime<FixedOffset>> {
        DateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT).map_err(|e| {
            Error::timestamp_parsing(
                format!("Invalid record timestamp '{}'", self.timestamp),
                e,
            )
        })
    }
}

/// Epicenter of an earthquake
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub name: Option<String>,
}

/// Magnitude of an earthquake on each scale
///
/// Different scales suit different event sizes and distances, so a bulletin
/// reports whichever scales could be computed for an event. Magnitude
/// estimates depend on locating the epicenter first and are more reliable
/// when averaged over many seismometers at different distances.
/// See <http://www.koeri.boun.edu.tr/bilgi/buyukluk.htm>.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Magnitude {
    /// Time dependent magnitude (Md). Scales how long the seismometer keeps
    /// oscillating by distance from the epicenter. Used for small (M<5.0),
    /// close (<300 km) events.
    pub time_dependent: Option<f64>,

    /// Local magnitude (Ml). Richter's 1935 method based on the peak
    /// amplitude scaled by distance. Used for events below 6.0 within 700 km;
    /// needs well calibrated instruments.
    pub local: Option<f64>,

    /// Surface wave magnitude (Ms). Peak amplitude of surface waves, suited
    /// to large (M>6.0) distant events. Never supplied by this source.
    pub surface_wave: Option<f64>,

    /// Object (body) wave magnitude (Mb). Like Ms but measured on waves
    /// travelling through the body of the earth. Never supplied by this source.
    pub object_wave: Option<f64>,

    /// Moment magnitude (Mw). Derived from a physical model of the rupture;
    /// the most reliable scale, computed only for larger events (M>4.0).
    pub moment: Option<f64>,
}

/// Solution metadata carried by the bulletin row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdditionalData {
    pub solution_attribute: Option<String>,
    pub solution_attribute_date: Option<String>,
}
