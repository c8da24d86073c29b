//! HTTP surface of a CA node

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handlers::{InfoState, MultiInfoState};

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

// CORS configuration for browser-based clients
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Router for a single-signer node
pub fn info_router(state: Arc<InfoState>) -> Router {
    Router::new()
        .route("/api/v1/cfssl/info", post(handlers::info))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors())
        .with_state(state)
}

/// Router for a node serving several named signing authorities
pub fn multi_info_router(state: Arc<MultiInfoState>) -> Router {
    Router::new()
        .route("/api/v1/cfssl/info", post(handlers::multi_info))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors())
        .with_state(state)
}
