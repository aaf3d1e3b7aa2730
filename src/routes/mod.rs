//! Route gateway: merges every endpoint subrouter and attaches shared state.

use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{AirQualitySource, Config, MockSource, Reading, SharedSource};

mod category;
mod cities;
mod compare;
mod current;
mod health;
mod historical;
mod insight;
mod stats;

/// Generator used when the source has no readings; seeded from `Config::mock_seed`.
pub type Fallback = Arc<MockSource>;

/// State shared by every handler.
pub type AppState = (SharedSource, Config, Fallback);

// ---

pub fn router(source: SharedSource, config: Config) -> Router {
    // ---
    let fallback: Fallback = Arc::new(MockSource::new(config.mock_seed));

    Router::new()
        .merge(current::router())
        .merge(historical::router())
        .merge(insight::router())
        .merge(stats::router())
        .merge(category::router())
        .merge(compare::router())
        .merge(cities::router())
        .merge(health::router())
        .with_state((source, config, fallback))
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

/// Generic 500 returned when the data source fails.
fn server_error(message: &'static str) -> Response {
    // ---
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { error: message }),
    )
        .into_response()
}

/// Fetch a series from the source, falling back to a mock series when it has no data.
fn series_or_mock(
    source: &SharedSource,
    fallback: &Fallback,
    city: &str,
    hours: u32,
    now: DateTime<Utc>,
) -> anyhow::Result<Vec<Reading>> {
    // ---
    let series = source.historical(city, hours, now)?;
    if !series.is_empty() {
        return Ok(series);
    }

    tracing::debug!("No stored data for {}, generating mock series", city);
    fallback.historical(city, hours, now)
}
