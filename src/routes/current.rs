use axum::{
    extract::Query, extract::State, http::StatusCode, response::IntoResponse, routing::get, Json,
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::{error, info};

use super::{server_error, AppState};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/api/air-quality/current", get(handler))
}

#[derive(Debug, Deserialize)]
pub struct CurrentQuery {
    city: Option<String>,
}

async fn handler(
    Query(params): Query<CurrentQuery>,
    State((source, config, _)): State<AppState>,
) -> impl IntoResponse {
    // ---
    info!("GET /api/air-quality/current - {:?}", params);

    let city = config.city_or_default(params.city);
    match source.current(&city, Utc::now()) {
        Ok(reading) => (StatusCode::OK, Json(reading)).into_response(),
        Err(e) => {
            error!("Failed to fetch current reading for {}: {}", city, e);
            server_error("Failed to fetch current air quality data")
        }
    }
}
