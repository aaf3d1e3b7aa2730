use axum::{extract::Query, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::{classify, Category};

// ---

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/api/air-quality/category", get(handler))
}

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    aqi: Option<i64>,
}

/// Classification of one AQI value, with its display attributes.
#[derive(Debug, Serialize)]
struct CategoryResponse {
    aqi: i64,
    category: Category,
    label: &'static str,
    description: &'static str,
    color: &'static str,
}

async fn handler(Query(params): Query<CategoryQuery>) -> Json<CategoryResponse> {
    // ---
    let aqi = params.aqi.unwrap_or(0);
    let category = classify(aqi);
    tracing::debug!("GET /api/air-quality/category - aqi={} -> {:?}", aqi, category);

    Json(CategoryResponse {
        aqi,
        category,
        label: category.label(),
        description: category.description(),
        color: category.color(),
    })
}
