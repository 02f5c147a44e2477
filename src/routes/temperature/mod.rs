mod extract;
mod handlers;
mod types;

pub use extract::extract_temperature;
pub use handlers::{get_temperature, overall_status};
pub use types::{
    BoxResult, LocationResponse, TemperatureQuery, TemperatureReading, TemperatureResponse,
};

// Re-export utoipa path struct for OpenAPI documentation
pub use handlers::__path_get_temperature;
