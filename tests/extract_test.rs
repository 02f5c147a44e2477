//! Unit tests for temperature sensor extraction.
//!
//! Run with: cargo test --test extract_test

use serde_json::json;

use hivebox::opensensemap::models::{BoxSensors, SenseBox};
use hivebox::routes::temperature::extract_temperature;

fn sensebox(value: serde_json::Value) -> SenseBox {
    serde_json::from_value(value).expect("senseBox payload should deserialize")
}

fn measurements(value: serde_json::Value) -> BoxSensors {
    serde_json::from_value(value).expect("measurements payload should deserialize")
}

#[test]
fn finds_temperature_sensor_by_phenomenon() {
    let sensebox = sensebox(json!({
        "name": "Test SenseBox",
        "sensors": [
            {"_id": "H1", "phenomenon": "Luftfeuchtigkeit", "unit": "%"},
            {"_id": "S1", "phenomenon": "Temperatur", "unit": "°C"},
        ]
    }));
    let measurements = measurements(json!({
        "sensors": [
            {"_id": "S1", "lastMeasurement": {"value": 22.5, "createdAt": "2025-07-16T12:00:00Z"}},
        ]
    }));

    let reading = extract_temperature(&sensebox, &measurements).expect("should find Temperatur");
    assert_eq!(reading.sensor_id, "S1");
    assert_eq!(reading.phenomenon, "Temperatur");
    assert_eq!(reading.unit, "°C");
    assert_eq!(reading.value, Some(22.5));
    assert_eq!(
        reading.created_at.map(|t| t.to_rfc3339()),
        Some("2025-07-16T12:00:00+00:00".to_string())
    );
}

#[test]
fn finds_temperature_sensor_by_unit_alone() {
    let sensebox = sensebox(json!({
        "name": "Test SenseBox",
        "sensors": [
            {"_id": "X1", "phenomenon": "Outdoor reading", "unit": "°F"},
        ]
    }));
    let measurements = measurements(json!({"sensors": []}));

    let reading = extract_temperature(&sensebox, &measurements).expect("unit match should win");
    assert_eq!(reading.sensor_id, "X1");
}

#[test]
fn first_qualifying_sensor_wins() {
    let sensebox = sensebox(json!({
        "name": "Test SenseBox",
        "sensors": [
            {"_id": "S1", "phenomenon": "Air Temperature", "unit": "°C"},
            {"_id": "S2", "phenomenon": "Temperatur", "unit": "°C"},
        ]
    }));
    let measurements = measurements(json!({
        "sensors": [
            {"_id": "S2", "lastMeasurement": {"value": 30.0, "createdAt": "2025-07-16T12:00:00Z"}},
        ]
    }));

    // S1 is selected even though only S2 has a measurement
    let reading = extract_temperature(&sensebox, &measurements).unwrap();
    assert_eq!(reading.sensor_id, "S1");
    assert_eq!(reading.value, None);
}

#[test]
fn missing_measurement_yields_null_value_and_timestamp() {
    let sensebox = sensebox(json!({
        "name": "Test SenseBox",
        "sensors": [
            {"_id": "S1", "phenomenon": "Temperatur", "unit": "°C"},
        ]
    }));
    let measurements = measurements(json!({"sensors": []}));

    let reading = extract_temperature(&sensebox, &measurements).unwrap();
    assert_eq!(reading.sensor_id, "S1");
    assert_eq!(reading.value, None);
    assert_eq!(reading.created_at, None);
}

#[test]
fn returns_none_when_no_sensor_qualifies() {
    let sensebox = sensebox(json!({
        "name": "Test SenseBox",
        "sensors": [
            {"_id": "H1", "phenomenon": "Luftfeuchtigkeit", "unit": "%"},
            {"_id": "P1", "phenomenon": "Luftdruck", "unit": "hPa"},
        ]
    }));
    let measurements = measurements(json!({"sensors": []}));

    assert!(extract_temperature(&sensebox, &measurements).is_none());
}

#[test]
fn keyword_match_is_case_insensitive() {
    let sensebox = sensebox(json!({
        "name": "Test SenseBox",
        "sensors": [
            {"_id": "S1", "phenomenon": "LUFTTEMPERATUR", "unit": "K"},
        ]
    }));
    let measurements = measurements(json!({"sensors": []}));

    assert!(extract_temperature(&sensebox, &measurements).is_some());
}

#[test]
fn sensor_title_field_is_accepted_for_phenomenon() {
    // Newer openSenseMap payloads label the phenomenon as `title`
    let sensebox = sensebox(json!({
        "name": "Test SenseBox",
        "sensors": [
            {"_id": "S1", "title": "Temperatur", "unit": "°C"},
        ]
    }));
    let measurements = measurements(json!({
        "sensors": [
            {"_id": "S1", "lastMeasurement": {"value": "19.3", "createdAt": "2025-07-16T12:00:00Z"}},
        ]
    }));

    // String-typed measurement values are normalized to numbers
    let reading = extract_temperature(&sensebox, &measurements).unwrap();
    assert_eq!(reading.phenomenon, "Temperatur");
    assert_eq!(reading.value, Some(19.3));
}

#[test]
fn box_name_defaults_to_unknown() {
    let sensebox = sensebox(json!({"sensors": []}));
    assert_eq!(sensebox.name, "Unknown");
}
