use axum::Json;
use axum::Router;
use axum::routing::get;
use dash_observability::HealthReport;
use http::Uri;
use tower_http::trace::TraceLayer;

use crate::error::PageError;

mod pages;

pub const SERVICE_NAME: &str = "dash-server";

pub fn build_router() -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/dashboard", get(pages::dashboard))
        .route("/health", get(health))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

pub async fn not_found(uri: Uri) -> PageError {
    PageError::NotFound(uri.path().to_string())
}

pub async fn health() -> Json<HealthReport> {
    Json(HealthReport::healthy(SERVICE_NAME, env!("CARGO_PKG_VERSION")))
}

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn readyz() -> &'static str {
    "ready"
}
