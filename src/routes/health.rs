// src/routes/health.rs
//! API health check endpoint for the air-quality backend.
//!
//! This module defines the `/health` route used by container orchestrators
//! and CI pipelines to verify that the service is running. It follows the
//! Explicit Module Boundary Pattern (EMBP): the gateway (`mod.rs`) merges this
//! subrouter so that `main.rs` never sees individual endpoints.

use axum::{routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cities::CITIES;

/// JSON response body for the `/health` endpoint.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: DateTime<Utc>,
    cities: usize,
}

/// Handle `GET /health`.
///
/// Does not touch the data source.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
        cities: CITIES.len(),
    })
}

/// Create a subrouter containing the `/health` route.
///
/// Generic over the application state so it merges with the gateway router.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}
