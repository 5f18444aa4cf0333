use axum::{Router, routing::get};

use crate::handlers::{index_handler, weather_handler};
use crate::state::AppState;

/// All routes:
///
/// - `GET /`        - Static single-page frontend
/// - `GET /weather` - Weather lookup, `?city=<name>`
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/weather", get(weather_handler))
        .with_state(state)
}
