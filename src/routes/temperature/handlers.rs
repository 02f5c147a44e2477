use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde_json::json;

use crate::common::AppState;
use crate::opensensemap::OsemClient;

use super::extract::extract_temperature;
use super::types::{BoxResult, TemperatureQuery, TemperatureResponse};

/// Aggregate current temperature readings across registered senseBoxes
///
/// Without `sensebox_id`, queries every registered box in fixed order.
/// Responds 200 when every box succeeded, 207 on a mix of successes and
/// failures, 502 when every box failed.
#[utoipa::path(
    get,
    path = "/temperature",
    params(TemperatureQuery),
    responses(
        (status = 200, description = "All senseBoxes reported a temperature", body = TemperatureResponse),
        (status = 207, description = "Some senseBoxes failed", body = TemperatureResponse),
        (status = 502, description = "All senseBoxes failed", body = TemperatureResponse),
        (status = 400, description = "Invalid senseBox ID"),
    ),
    tag = "temperature"
)]
pub async fn get_temperature(
    State(state): State<AppState>,
    Query(query): Query<TemperatureQuery>,
) -> Response {
    // An explicitly supplied ID is validated up front; failure rejects the
    // whole request. Registry-driven targets are trusted and any upstream
    // failure is recorded per box instead.
    let targets: Vec<String> = match query.sensebox_id {
        Some(id) => {
            if let Err(e) = state.registry.validate(&id) {
                tracing::debug!(sensebox_id = %id, error = %e, "Rejected senseBox ID");
                let body = Json(json!({
                    "error": "Invalid senseBox ID",
                    "message": e.to_string(),
                    "valid_ids": state.registry.ids(),
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            vec![id]
        }
        None => state.registry.ids().to_vec(),
    };

    let mut results = Vec::with_capacity(targets.len());
    for sensebox_id in &targets {
        results.push(query_box(&state.osem_client, sensebox_id).await);
    }

    let successful = results.iter().filter(|r| r.is_success()).count();
    let failed = results.len() - successful;
    let status = overall_status(successful, failed);

    tracing::info!(
        total = results.len(),
        successful,
        failed,
        status = status.as_u16(),
        "Temperature aggregation completed"
    );

    let body = Json(TemperatureResponse {
        timestamp: Utc::now(),
        total_results: results.len(),
        successful_results: successful,
        failed_results: failed,
        data: results,
    });

    (status, body).into_response()
}

/// Run the metadata fetch, measurement fetch, and extraction pipeline for one
/// senseBox, folding any failure into an error record.
async fn query_box(client: &OsemClient, sensebox_id: &str) -> BoxResult {
    let sensebox = match client.get_box(sensebox_id).await {
        Ok(sensebox) => sensebox,
        Err(e) => {
            tracing::warn!(sensebox_id, error = %e, "senseBox metadata fetch failed");
            return BoxResult::error(sensebox_id, e.status_code(), e.to_string());
        }
    };

    let measurements = match client.get_box_sensors(sensebox_id).await {
        Ok(measurements) => measurements,
        Err(e) => {
            tracing::warn!(sensebox_id, error = %e, "senseBox measurement fetch failed");
            return BoxResult::error(
                sensebox_id,
                e.status_code(),
                format!("Failed to fetch measurements: {e}"),
            );
        }
    };

    match extract_temperature(&sensebox, &measurements) {
        Some(temperature) => BoxResult::Success {
            sensebox_id: sensebox_id.to_string(),
            name: sensebox.name,
            location: sensebox.current_location.unwrap_or_default().into(),
            temperature,
        },
        None => BoxResult::error(sensebox_id, 404, "no temperature sensor found".to_string()),
    }
}

/// Derive the overall response status from the per-box outcome counts.
#[must_use]
pub fn overall_status(successful: usize, failed: usize) -> StatusCode {
    match (successful, failed) {
        (0, 0) => StatusCode::INTERNAL_SERVER_ERROR,
        (0, _) => StatusCode::BAD_GATEWAY,
        (_, 0) => StatusCode::OK,
        _ => StatusCode::MULTI_STATUS,
    }
}
