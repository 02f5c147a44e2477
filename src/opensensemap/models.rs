use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Response from `/boxes/{id}` - device metadata for one senseBox.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SenseBox {
    #[serde(default = "default_box_name")]
    pub name: String,
    #[serde(rename = "currentLocation", default)]
    pub current_location: Option<BoxLocation>,
    #[serde(default)]
    pub sensors: Vec<Sensor>,
}

fn default_box_name() -> String {
    "Unknown".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxLocation {
    #[serde(default)]
    pub coordinates: Vec<f64>,
    /// GeoJSON geometry type tag
    #[serde(rename = "type", default = "default_geometry_type")]
    pub geometry_type: String,
}

fn default_geometry_type() -> String {
    "Point".to_string()
}

impl Default for BoxLocation {
    fn default() -> Self {
        Self {
            coordinates: Vec::new(),
            geometry_type: default_geometry_type(),
        }
    }
}

/// One sensor belonging to a senseBox. Upstream ordering is preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sensor {
    #[serde(rename = "_id")]
    pub id: String,
    /// What the sensor measures, e.g. "Temperatur". Newer API revisions
    /// serve this field as `title`.
    #[serde(default, alias = "title")]
    pub phenomenon: String,
    #[serde(default)]
    pub unit: String,
}

/// Response from `/boxes/{id}/sensors` - latest measurement per sensor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxSensors {
    #[serde(default)]
    pub sensors: Vec<SensorMeasurement>,
}

impl BoxSensors {
    /// Latest measurement for a sensor ID, if one was ever recorded.
    #[must_use]
    pub fn latest_for(&self, sensor_id: &str) -> Option<&Measurement> {
        self.sensors
            .iter()
            .find(|s| s.id == sensor_id)
            .and_then(|s| s.last_measurement.as_ref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorMeasurement {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "lastMeasurement", default)]
    pub last_measurement: Option<Measurement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    /// Measurement values arrive as JSON numbers or numeric strings
    /// depending on the API revision.
    #[serde(deserialize_with = "deserialize_value")]
    pub value: f64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Raw representation for deserializing number-or-string measurement values.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(f64),
    Text(String),
}

fn deserialize_value<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawValue::deserialize(deserializer)? {
        RawValue::Number(n) => Ok(n),
        RawValue::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}
