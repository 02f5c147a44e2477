use crate::opensensemap::models::{BoxSensors, SenseBox};

use super::types::TemperatureReading;

/// Phenomenon-name fragments identifying a temperature sensor.
const TEMPERATURE_KEYWORDS: [&str; 7] = [
    "temperature",
    "temperatur",
    "temp",
    "température",
    "lufttemperatur",
    "air temperature",
    "ambient temperature",
];

/// Unit strings identifying a temperature sensor.
const TEMPERATURE_UNITS: [&str; 6] = ["°c", "c", "celsius", "°f", "f", "fahrenheit"];

/// Locate the temperature sensor of a senseBox and merge in its latest
/// measurement.
///
/// Sensors are scanned in upstream order; the first one whose phenomenon
/// contains a temperature keyword or whose unit is a temperature unit wins,
/// and scanning stops there. A winner with no recorded measurement still
/// yields a reading, with null value and timestamp. Returns `None` when no
/// sensor qualifies.
#[must_use]
pub fn extract_temperature(
    sensebox: &SenseBox,
    measurements: &BoxSensors,
) -> Option<TemperatureReading> {
    let sensor = sensebox.sensors.iter().find(|sensor| {
        let phenomenon = sensor.phenomenon.to_lowercase();
        let unit = sensor.unit.to_lowercase();
        TEMPERATURE_KEYWORDS.iter().any(|kw| phenomenon.contains(kw))
            || TEMPERATURE_UNITS.contains(&unit.as_str())
    })?;

    let latest = measurements.latest_for(&sensor.id);

    Some(TemperatureReading {
        sensor_id: sensor.id.clone(),
        phenomenon: sensor.phenomenon.clone(),
        unit: sensor.unit.clone(),
        value: latest.map(|m| m.value),
        created_at: latest.map(|m| m.created_at),
    })
}
