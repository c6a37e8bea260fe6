//! Tests for mapping parsed rows into earthquake records

use crate::app::models::ParsedRow;

mod mapper_tests;

/// A revised row with every magnitude present
pub fn create_test_row() -> ParsedRow {
    ParsedRow {
        date: "2024-03-05".to_string(),
        time: "20:58:10".to_string(),
        latitude: 37.0212,
        longitude: 36.654,
        depth: 7.0,
        magnitude_md: Some(3.9),
        magnitude_ml: Some(4.1),
        magnitude_mw: Some(4.0),
        location_name: Some("NURDAGI (GAZIANTEP)".to_string()),
        solution_attribute: "REVIZE01".to_string(),
        solution_attribute_date: Some("(2024.03.05 21:15:02)".to_string()),
    }
}
