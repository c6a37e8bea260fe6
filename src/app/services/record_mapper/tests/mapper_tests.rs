use super::create_test_row;
use crate::app::models::{EarthquakeRecord, ParsedRow};
use crate::app::services::record_mapper::{
    build_identity, build_timestamp, map_record, map_records,
};

#[test]
fn test_timestamp_carries_fixed_offset() {
    assert_eq!(
        build_timestamp("2024-03-05", "20:58:10"),
        "2024-03-05 20:58:10 GMT+0300"
    );
    assert_eq!(
        build_timestamp("2024.03.05", "20:58:10"),
        "2024-03-05 20:58:10 GMT+0300"
    );
}

#[test]
fn test_identity_format() {
    let ts = "2024-03-05 20:58:10 GMT+0300";
    assert_eq!(
        build_identity(ts, 37.0212, 36.654, Some(4.1)),
        "2024-03-05 20:58:10 GMT+0300-37.0212-36.654-4.1"
    );
    assert_eq!(
        build_identity(ts, 38.0, 27.5, None),
        "2024-03-05 20:58:10 GMT+0300-38-27.5-null"
    );
}

#[test]
fn test_identity_collides_for_identical_events() {
    // Known limitation: the key cannot tell apart events sharing time, place and ML
    let a = map_record(create_test_row());
    let b = map_record(ParsedRow {
        magnitude_md: None,
        depth: 15.0,
        ..create_test_row()
    });
    assert_eq!(a.identity, b.identity);
}

#[test]
fn test_map_record_fields() {
    let record = map_record(create_test_row());

    assert_eq!(record.timestamp, "2024-03-05 20:58:10 GMT+0300");
    assert_eq!(record.depth, 7.0);
    assert_eq!(record.location.latitude, 37.0212);
    assert_eq!(record.location.longitude, 36.654);
    assert_eq!(record.location.name.as_deref(), Some("NURDAGI (GAZIANTEP)"));
    assert_eq!(record.magnitude.time_dependent, Some(3.9));
    assert_eq!(record.magnitude.local, Some(4.1));
    assert_eq!(record.magnitude.moment, Some(4.0));
    assert_eq!(record.magnitude.surface_wave, None);
    assert_eq!(record.magnitude.object_wave, None);
    assert_eq!(
        record.additional.solution_attribute.as_deref(),
        Some("REVIZE01")
    );
    assert_eq!(
        record.additional.solution_attribute_date.as_deref(),
        Some("(2024.03.05 21:15:02)")
    );
}

#[test]
fn test_coordinates_survive_mapping_exactly() {
    let row = ParsedRow {
        latitude: 40.851_234_567_89,
        longitude: -29.109_3,
        depth: 0.1 + 0.2,
        ..create_test_row()
    };
    let (lat, lon, depth) = (row.latitude, row.longitude, row.depth);
    let record = map_record(row);

    assert_eq!(record.location.latitude.to_bits(), lat.to_bits());
    assert_eq!(record.location.longitude.to_bits(), lon.to_bits());
    assert_eq!(record.depth.to_bits(), depth.to_bits());
}

#[test]
fn test_empty_location_becomes_null() {
    let blank = map_record(ParsedRow {
        location_name: Some("   ".to_string()),
        ..create_test_row()
    });
    assert_eq!(blank.location.name, None);

    let absent = map_record(ParsedRow {
        location_name: None,
        ..create_test_row()
    });
    assert_eq!(absent.location.name, None);
}

#[test]
fn test_from_and_batch_mapping_preserve_order() {
    let second = ParsedRow {
        time: "19:42:31".to_string(),
        ..create_test_row()
    };
    let records = map_records(vec![create_test_row(), second.clone()]);

    assert_eq!(records.len(), 2);
    assert_eq!(records[1], EarthquakeRecord::from(second));
    assert!(records[0].timestamp.contains("20:58:10"));
    assert!(records[1].timestamp.contains("19:42:31"));
}
