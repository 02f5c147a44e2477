use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

const APP_NAME: &str = "HiveBox";
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Serialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VersionResponse {
    pub version: String,
    pub app: String,
}

/// Welcome endpoint listing the available routes
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = WelcomeResponse),
    ),
    tag = "meta"
)]
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: format!("Welcome to {APP_NAME} API"),
        version: VERSION.to_string(),
        endpoints: vec![
            "/version".to_string(),
            "/temperature".to_string(),
            "/docs".to_string(),
        ],
    })
}

/// Current application version
#[utoipa::path(
    get,
    path = "/version",
    responses(
        (status = 200, description = "Version information", body = VersionResponse),
    ),
    tag = "meta"
)]
pub async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: VERSION.to_string(),
        app: APP_NAME.to_string(),
    })
}
