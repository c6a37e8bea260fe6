//! Individual row parsing for bulletin data
//!
//! Column layout of a data row:
//!
//! | index | content                         |
//! |-------|---------------------------------|
//! | 0     | `YYYY.MM.DD HH:MM:SS`           |
//! | 1-3   | latitude, longitude, depth (km) |
//! | 4-6   | MD, ML, MW magnitudes           |
//! | 7     | location name                   |
//! | 8..   | solution attribute [, date]     |

use super::field_parsers::{
    non_empty, parse_optional_f64, parse_required_f64, split_columns, split_date_time,
};
use crate::app::models::ParsedRow;
use crate::constants::{MIN_ROW_FIELDS, NINE_FIELD_ROW};

/// Row-scoped failure; never aborts a bulletin
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RowParseError {
    #[error("row has {found} fields, at least {required} required")]
    TooFewFields { found: usize, required: usize },

    #[error("no time component in '{value}'")]
    MissingTime { value: String },

    #[error("invalid {column} value '{value}'")]
    InvalidNumber { column: &'static str, value: String },
}

/// Positional layout of the trailing solution columns, decided by field count
///
/// The row format offers no other way to tell an attribute with a trailing
/// date from one without, so the decision is purely positional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowShape {
    /// Exactly nine fields: the last one is the solution attribute
    NineField,
    /// Any other count: second-to-last is the attribute, last is its date
    TenField,
}

impl RowShape {
    pub fn from_field_count(count: usize) -> Self {
        if count == NINE_FIELD_ROW {
            RowShape::NineField
        } else {
            RowShape::TenField
        }
    }

    /// Pick `(solution_attribute, solution_attribute_date)` from the fields
    fn solution_columns(self, fields: &[&str]) -> (String, Option<String>) {
        let last = fields.len() - 1;
        match self {
            RowShape::NineField => (fields[last].to_string(), None),
            RowShape::TenField => (
                fields[last - 1].to_string(),
                Some(fields[last].to_string()),
            ),
        }
    }
}

/// Parse one candidate row into a [`ParsedRow`]
pub fn parse_row(row: &str) -> Result<ParsedRow, RowParseError> {
    let fields = split_columns(row);
    if fields.len() < MIN_ROW_FIELDS {
        return Err(RowParseError::TooFewFields {
            found: fields.len(),
            required: MIN_ROW_FIELDS,
        });
    }

    let (date, time) = split_date_time(fields[0])?;
    let latitude = parse_required_f64(&fields, 1, "latitude")?;
    let longitude = parse_required_f64(&fields, 2, "longitude")?;
    let depth = parse_required_f64(&fields, 3, "depth")?;

    let (solution_attribute, solution_attribute_date) =
        RowShape::from_field_count(fields.len()).solution_columns(&fields);

    Ok(ParsedRow {
        date,
        time,
        latitude,
        longitude,
        depth,
        magnitude_md: parse_optional_f64(fields.get(4).copied()),
        magnitude_ml: parse_optional_f64(fields.get(5).copied()),
        magnitude_mw: parse_optional_f64(fields.get(6).copied()),
        location_name: non_empty(fields[7]),
        solution_attribute,
        solution_attribute_date,
    })
}
