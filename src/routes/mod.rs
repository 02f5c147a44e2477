pub mod meta;
pub mod temperature;

use axum::{Router, http::Uri, routing::get};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::common::AppState;
use crate::error::AppError;

#[derive(OpenApi)]
#[openapi(
    paths(meta::root, meta::version, temperature::get_temperature),
    components(
        schemas(
            meta::WelcomeResponse,
            meta::VersionResponse,
            temperature::TemperatureResponse,
            temperature::BoxResult,
            temperature::TemperatureReading,
            temperature::LocationResponse,
        )
    ),
    tags(
        (name = "meta", description = "Service information endpoints"),
        (name = "temperature", description = "senseBox temperature aggregation"),
    ),
    info(
        title = "HiveBox API",
        description = "Temperature aggregation API for openSenseMap senseBox devices",
        version = "0.1.0"
    )
)]
struct ApiDoc;

pub fn build_router(state: AppState) -> Router {
    // OpenAPI documentation
    let docs_routes = Router::new().merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    Router::new()
        .route("/", get(meta::root))
        .route("/version", get(meta::version))
        .route("/temperature", get(temperature::get_temperature))
        .merge(docs_routes)
        .fallback(not_found)
        .layer(RequestBodyLimitLayer::new(1024 * 1024)) // 1MB body limit
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
