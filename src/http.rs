//! HTTP plumbing around the query engine
//!
//! Thin by design: every route delegates straight to
//! [`QueryEngine`](crate::query::QueryEngine) and serializes whatever comes
//! back. No aggregation logic lives here.
//!
//! # Endpoints
//!
//! - `GET /health` — liveness probe
//! - `GET /api/filters` — enumerated filterable domains
//! - `GET /api/{query}` — any registered query, with optional `gender`,
//!   `department`, `job_role`, `education` parameters

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::error::QueryError;
use crate::query::{FilterParams, QueryEngine};

/// Shared application state
pub struct AppState {
    /// The query engine over the loaded store
    pub engine: QueryEngine,
}

/// Health check payload
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Client-error payload
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Build the CORS layer from configuration
fn build_cors_layer(cors_allowed_origins: &[String]) -> CorsLayer {
    if cors_allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = cors_allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers(Any)
    }
}

/// Build the application router
pub fn build_router(state: Arc<AppState>, cors_allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/filters", get(filters))
        .route("/api/:query", get(run_query))
        .with_state(state)
        .layer(build_cors_layer(cors_allowed_origins))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn filters(State(state): State<Arc<AppState>>) -> Response {
    Json(state.engine.filter_options()).into_response()
}

async fn run_query(
    State(state): State<Arc<AppState>>,
    Path(query): Path<String>,
    Query(params): Query<FilterParams>,
) -> Response {
    match state.engine.run(&query, &params) {
        Ok(result) => Json(result).into_response(),
        Err(err @ QueryError::UnknownQuery { .. }) => {
            warn!(query = %query, "rejected unknown query");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}
