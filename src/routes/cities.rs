use axum::{routing::get, Json, Router};

use crate::cities::{City, CITIES};

// ---

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/api/cities", get(handler))
}

async fn handler() -> Json<&'static [City]> {
    Json(CITIES)
}
