//! Conversion of a [`ParsedRow`] into an [`EarthquakeRecord`]

use crate::app::models::{AdditionalData, EarthquakeRecord, Location, Magnitude, ParsedRow};
use crate::constants::{IDENTITY_NULL, IDENTITY_SEPARATOR, SOURCE_UTC_OFFSET};

/// Build `"<date> <time> GMT+0300"` for a row
pub fn build_timestamp(date: &str, time: &str) -> String {
    format!("{} {} {}", date.replace('.', "-"), time, SOURCE_UTC_OFFSET)
}

/// Join timestamp, coordinates and local magnitude into a lookup key
///
/// Coordinates use the shortest exact decimal form (`27.0` renders as `27`).
pub fn build_identity(timestamp: &str, latitude: f64, longitude: f64, local: Option<f64>) -> String {
    let local = local.map_or_else(|| IDENTITY_NULL.to_string(), |m| m.to_string());
    [
        timestamp.to_string(),
        latitude.to_string(),
        longitude.to_string(),
        local,
    ]
    .join(IDENTITY_SEPARATOR)
}

/// Map one parsed row into an earthquake record
pub fn map_record(row: ParsedRow) -> EarthquakeRecord {
    let timestamp = build_timestamp(&row.date, &row.time);
    let identity = build_identity(&timestamp, row.latitude, row.longitude, row.magnitude_ml);

    EarthquakeRecord {
        identity,
        timestamp,
        depth: row.depth,
        location: Location {
            latitude: row.latitude,
            longitude: row.longitude,
            name: row.location_name.filter(|name| !name.trim().is_empty()),
        },
        magnitude: Magnitude {
            time_dependent: row.magnitude_md,
            local: row.magnitude_ml,
            surface_wave: None,
            object_wave: None,
            moment: row.magnitude_mw,
        },
        additional: AdditionalData {
            solution_attribute: Some(row.solution_attribute),
            solution_attribute_date: row.solution_attribute_date,
        },
    }
}

/// Map rows in order
pub fn map_records(rows: Vec<ParsedRow>) -> Vec<EarthquakeRecord> {
    rows.into_iter().map(map_record).collect()
}

impl From<ParsedRow> for EarthquakeRecord {
    fn from(row: ParsedRow) -> Self {
        map_record(row)
    }
}
