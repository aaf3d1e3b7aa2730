use axum::{
    extract::Query, extract::State, http::StatusCode, response::IntoResponse, routing::get, Json,
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::{debug, error, info};

use super::{series_or_mock, server_error, AppState};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/api/air-quality/historical", get(handler))
}

/// Query parameters for the historical series
#[derive(Debug, Deserialize)]
pub struct HistoricalQuery {
    city: Option<String>,
    hours: Option<u32>,
}

async fn handler(
    Query(params): Query<HistoricalQuery>,
    State((source, config, fallback)): State<AppState>,
) -> impl IntoResponse {
    // ---
    info!("GET /api/air-quality/historical - {:?}", params);

    let city = config.city_or_default(params.city);
    let hours = config.hours_or_default(params.hours);
    let now = Utc::now();

    let series = match series_or_mock(&source, &fallback, &city, hours, now) {
        Ok(series) => series,
        Err(e) => {
            error!("Failed to fetch historical data for {}: {}", city, e);
            return server_error("Failed to fetch historical air quality data");
        }
    };

    debug!("Returning {} readings for {} over {}h", series.len(), city, hours);
    (StatusCode::OK, Json(series)).into_response()
}
