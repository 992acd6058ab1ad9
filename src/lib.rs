pub mod database;
pub mod dtos;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Build the full application router under the /api base path.
pub fn app(state: AppState) -> Router {
    let api = routes::create_router()
        .route("/", get(|| async { "Agro Billing API" }))
        .route("/health", get(health_check));

    Router::new()
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "OK",
        "timestamp": chrono::Utc::now(),
    }))
}
