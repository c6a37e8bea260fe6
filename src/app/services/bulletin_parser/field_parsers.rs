//! Field parsing utilities for bulletin rows
//!
//! This module provides helper functions for splitting a row into columns and
//! converting individual columns with the coercion rules of the bulletin.

use regex::Regex;
use std::sync::LazyLock;

use super::row_parser::RowParseError;
use crate::constants::COLUMN_SEPARATOR_PATTERN;

static COLUMN_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(COLUMN_SEPARATOR_PATTERN).expect("column separator pattern is a valid regex")
});

/// Split a row on runs of two or more spaces, trimming and dropping empty fields
pub fn split_columns(row: &str) -> Vec<&str> {
    COLUMN_SEPARATOR
        .split(row)
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .collect()
}

/// Split the leading `"<date> <time>"` field and normalize the date separators
pub fn split_date_time(field: &str) -> Result<(String, String), RowParseError> {
    let mut parts = field.split(' ');
    let date = parts.next().unwrap_or_default();
    let time = parts
        .next()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| RowParseError::MissingTime {
            value: field.to_string(),
        })?;

    Ok((date.replace('.', "-"), time.to_string()))
}

/// Parse a required finite decimal column
pub fn parse_required_f64(
    fields: &[&str],
    index: usize,
    column: &'static str,
) -> Result<f64, RowParseError> {
    let value = fields.get(index).copied().unwrap_or_default();

    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| RowParseError::InvalidNumber {
            column,
            value: value.to_string(),
        })
}

/// Parse an optional magnitude column; anything that is not a finite number is absent
pub fn parse_optional_f64(value: Option<&str>) -> Option<f64> {
    value
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Trimmed text, or `None` when nothing is left
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
