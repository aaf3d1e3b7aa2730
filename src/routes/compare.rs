//! Side-by-side AQI comparison of two cities over the same window.

use axum::{
    extract::Query, extract::State, http::StatusCode, response::IntoResponse, routing::get, Json,
    Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::{series_or_mock, server_error, AppState};
use crate::cities::{first_other_than, label_for};
use crate::timeline::{merge_timelines, TimelinePoint};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/api/air-quality/compare", get(handler))
}

#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    city1: Option<String>,
    city2: Option<String>,
    hours: Option<u32>,
}

#[derive(Debug, Serialize)]
struct CompareResponse {
    /// Display labels, in the order of `first`/`second` in each point.
    labels: [String; 2],
    points: Vec<TimelinePoint>,
}

async fn handler(
    Query(params): Query<CompareQuery>,
    State((source, config, fallback)): State<AppState>,
) -> impl IntoResponse {
    // ---
    info!("GET /api/air-quality/compare - {:?}", params);

    let city1 = config.city_or_default(params.city1);
    let city2 = params
        .city2
        .unwrap_or_else(|| first_other_than(&city1).to_string());
    let hours = config.hours_or_default(params.hours);
    let now = Utc::now();

    let loaded = series_or_mock(&source, &fallback, &city1, hours, now)
        .and_then(|a| series_or_mock(&source, &fallback, &city2, hours, now).map(|b| (a, b)));
    let (first, second) = match loaded {
        Ok(pair) => pair,
        Err(e) => {
            error!("Failed to fetch comparison data for {} / {}: {}", city1, city2, e);
            return server_error("Failed to fetch comparison data");
        }
    };

    let response = CompareResponse {
        labels: [label_for(&city1).to_string(), label_for(&city2).to_string()],
        points: merge_timelines(&first, &second),
    };
    (StatusCode::OK, Json(response)).into_response()
}
