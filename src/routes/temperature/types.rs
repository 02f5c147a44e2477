use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::opensensemap::models::BoxLocation;

#[derive(Debug, Deserialize, IntoParams)]
pub struct TemperatureQuery {
    /// Restrict the query to a single registered senseBox ID
    pub sensebox_id: Option<String>,
}

/// Temperature reading derived from one senseBox.
///
/// `value`/`created_at` are null when the temperature sensor exists but has
/// never recorded a measurement.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TemperatureReading {
    pub sensor_id: String,
    pub phenomenon: String,
    pub unit: String,
    pub value: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LocationResponse {
    pub coordinates: Vec<f64>,
    #[serde(rename = "type")]
    pub geometry_type: String,
}

impl From<BoxLocation> for LocationResponse {
    fn from(location: BoxLocation) -> Self {
        Self {
            coordinates: location.coordinates,
            geometry_type: location.geometry_type,
        }
    }
}

/// Outcome for one queried senseBox.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BoxResult {
    Success {
        sensebox_id: String,
        name: String,
        location: LocationResponse,
        temperature: TemperatureReading,
    },
    Error {
        sensebox_id: String,
        code: u16,
        message: String,
    },
}

impl BoxResult {
    #[must_use]
    pub fn error(sensebox_id: &str, code: u16, message: String) -> Self {
        Self::Error {
            sensebox_id: sensebox_id.to_string(),
            code,
            message,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TemperatureResponse {
    /// Assembly time of this response
    pub timestamp: DateTime<Utc>,
    pub total_results: usize,
    pub successful_results: usize,
    pub failed_results: usize,
    /// One entry per queried senseBox, in query order
    pub data: Vec<BoxResult>,
}
