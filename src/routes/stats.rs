use axum::{
    extract::Query, extract::State, http::StatusCode, response::IntoResponse, routing::get, Json,
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::{debug, error, info};

use super::{server_error, AppState};
use crate::compute_stats;

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/api/air-quality/stats", get(handler))
}

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    city: Option<String>,
    hours: Option<u32>,
}

/// Summarize the source's series as-is; an empty series yields the all-zero summary.
async fn handler(
    Query(params): Query<StatsQuery>,
    State((source, config, _)): State<AppState>,
) -> impl IntoResponse {
    // ---
    info!("GET /api/air-quality/stats - {:?}", params);

    let city = config.city_or_default(params.city);
    let hours = config.hours_or_default(params.hours);

    let series = match source.historical(&city, hours, Utc::now()) {
        Ok(series) => series,
        Err(e) => {
            error!("Failed to fetch series for stats on {}: {}", city, e);
            return server_error("Failed to fetch air quality statistics");
        }
    };

    let summary = compute_stats(&series);
    debug!("Stats for {} over {} readings: {:?}", city, series.len(), summary);
    (StatusCode::OK, Json(summary)).into_response()
}
