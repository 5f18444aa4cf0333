//! Request handlers for the two routes the shell exposes.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use serde::{Deserialize, Serialize};
use skycast_core::WeatherReport;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub city: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Serves the single-page frontend.
///
/// `GET /`
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

/// Looks up current weather for a city.
///
/// `GET /weather?city=<name>`
///
/// - **200**: `{city, description, temperature, humidity, wind}`
/// - **400**: `city` missing or blank
/// - **404**: lookup failed (unknown city or upstream failure)
pub async fn weather_handler(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherReport>, (StatusCode, Json<ErrorBody>)> {
    let Some(city) = query.city.as_deref().map(str::trim).filter(|c| !c.is_empty()) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorBody { error: "City parameter is required".to_string() }),
        ));
    };

    match state.weather.lookup(city).await {
        Ok(report) => Ok(Json(report)),
        Err(err) => {
            tracing::warn!(%city, error = %err, "weather lookup failed");
            Err((StatusCode::NOT_FOUND, Json(ErrorBody { error: err.to_string() })))
        }
    }
}
