//! Health-insight text for a city at a given AQI.
//!
//! Text is selected from the fixed band templates; no external service is called.

use axum::{extract::Query, extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::AppState;
use crate::cities::display_name;
use crate::insight_text;

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/api/air-quality/insight", get(handler))
}

#[derive(Debug, Deserialize)]
pub struct InsightQuery {
    city: Option<String>,
    /// Any integer; missing means 0.
    aqi: Option<i64>,
}

#[derive(Debug, Serialize)]
struct InsightResponse {
    insight: String,
}

async fn handler(
    Query(params): Query<InsightQuery>,
    State((_, config, _)): State<AppState>,
) -> Json<InsightResponse> {
    // ---
    info!("GET /api/air-quality/insight - {:?}", params);

    let city = config.city_or_default(params.city);
    let aqi = params.aqi.unwrap_or(0);

    Json(InsightResponse {
        insight: insight_text(&display_name(&city), aqi),
    })
}
