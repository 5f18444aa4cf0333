use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::Config;
use crate::error::WeatherError;
use crate::model::{ConditionsReading, Coordinates, WeatherReport};
use crate::report;

/// Fields requested from the forecast endpoint's `current` block.
const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,weather_code,wind_speed_10m";

/// Client for the two Open-Meteo services (geocoding search and forecast).
///
/// Holds no per-lookup state: every invocation is independent, so one
/// client can be shared freely across concurrent requests.
#[derive(Debug, Clone)]
pub struct OpenMeteo {
    http: Client,
    geocoding_url: String,
    forecast_url: String,
    language: String,
}

impl OpenMeteo {
    pub fn new(config: &Config) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            geocoding_url: config.geocoding_url.clone(),
            forecast_url: config.forecast_url.clone(),
            language: config.language.clone(),
        })
    }

    /// Run the whole pipeline for one city: resolve coordinates, fetch
    /// current conditions, translate the weather code and format a report.
    ///
    /// Callers must reject empty or whitespace-only city names before
    /// calling; a geocoder miss maps to [`WeatherError::LocationNotFound`].
    pub async fn lookup(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let coords = self
            .resolve(city)
            .await?
            .ok_or_else(|| WeatherError::LocationNotFound(city.to_string()))?;

        let reading = self.current_conditions(&coords).await?;

        Ok(report::build_report(&coords.display_name, &reading))
    }

    /// Resolve a free-text city name to coordinates and a display name.
    ///
    /// Returns `Ok(None)` when the service has no match; that is a valid
    /// outcome, distinct from the transport failures in [`WeatherError`].
    pub async fn resolve(&self, city: &str) -> Result<Option<Coordinates>, WeatherError> {
        tracing::debug!(%city, "resolving city via geocoding service");

        let res = self
            .http
            .get(&self.geocoding_url)
            .query(&[
                ("name", city),
                ("count", "1"),
                ("language", self.language.as_str()),
                ("format", "json"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Status {
                service: "geocoding",
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: GeoResponse =
            serde_json::from_str(&body).map_err(|source| WeatherError::Parse {
                service: "geocoding",
                source,
            })?;

        let Some(best) = parsed.results.unwrap_or_default().into_iter().next() else {
            tracing::debug!(%city, "geocoding returned no results");
            return Ok(None);
        };

        let name = best.name.unwrap_or_else(|| city.to_string());
        let display_name = compose_display_name(&[
            &name,
            best.admin1.as_deref().unwrap_or(""),
            best.country.as_deref().unwrap_or(""),
        ]);

        Ok(Some(Coordinates {
            latitude: best.latitude,
            longitude: best.longitude,
            display_name,
        }))
    }

    /// Fetch current conditions for a resolved location.
    ///
    /// Wind speed is requested in m/s explicitly; km/h is the service
    /// default. Fields the service drops come back as `None` rather than
    /// failing the lookup.
    pub async fn current_conditions(
        &self,
        coords: &Coordinates,
    ) -> Result<ConditionsReading, WeatherError> {
        tracing::debug!(
            latitude = coords.latitude,
            longitude = coords.longitude,
            "fetching current conditions"
        );

        let res = self
            .http
            .get(&self.forecast_url)
            .query(&[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("wind_speed_unit", "ms".to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Status {
                service: "forecast",
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: ForecastResponse =
            serde_json::from_str(&body).map_err(|source| WeatherError::Parse {
                service: "forecast",
                source,
            })?;

        let current = parsed.current.unwrap_or_default();

        Ok(ConditionsReading {
            temperature_c: current.temperature_2m,
            humidity_pct: current.relative_humidity_2m,
            wind_speed_mps: current.wind_speed_10m,
            weather_code: current.weather_code,
        })
    }
}

/// Join the non-empty segments with ", ", so a match lacking an admin
/// region yields "Paris, France" rather than "Paris, , France".
fn compose_display_name(segments: &[&str]) -> String {
    segments
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Back off to a char boundary so multi-byte UTF-8 never splits.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[derive(Debug, Deserialize)]
struct GeoResult {
    latitude: f64,
    longitude: f64,
    name: Option<String>,
    admin1: Option<String>,
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    results: Option<Vec<GeoResult>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ForecastCurrent {
    temperature_2m: Option<f64>,
    relative_humidity_2m: Option<u8>,
    weather_code: Option<i64>,
    wind_speed_10m: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<ForecastCurrent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_with_all_segments() {
        let name = compose_display_name(&["Paris", "Île-de-France", "France"]);
        assert_eq!(name, "Paris, Île-de-France, France");
    }

    #[test]
    fn display_name_omits_empty_segments() {
        assert_eq!(compose_display_name(&["Tokyo", "", "Japan"]), "Tokyo, Japan");
        assert_eq!(compose_display_name(&["Atlantis", "", ""]), "Atlantis");
        assert_eq!(compose_display_name(&["", "", ""]), "");
    }

    #[test]
    fn forecast_current_tolerates_dropped_fields() {
        let parsed: ForecastResponse = serde_json::from_str(
            r#"{"current": {"temperature_2m": 18.5, "weather_code": 3}}"#,
        )
        .expect("valid JSON");

        let current = parsed.current.expect("current block present");
        assert_eq!(current.temperature_2m, Some(18.5));
        assert_eq!(current.weather_code, Some(3));
        assert_eq!(current.relative_humidity_2m, None);
        assert_eq!(current.wind_speed_10m, None);
    }

    #[test]
    fn forecast_tolerates_missing_current_block() {
        let parsed: ForecastResponse =
            serde_json::from_str(r#"{"latitude": 48.85}"#).expect("valid JSON");
        assert!(parsed.current.is_none());
    }

    #[test]
    fn truncate_body_caps_long_bodies() {
        let long = "x".repeat(500);
        let truncated = truncate_body(&long);
        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_body_never_splits_multibyte_chars() {
        // 'é' is two bytes and straddles the 200-byte cutoff here.
        let body = format!("{}é{}", "a".repeat(199), "x".repeat(50));
        let truncated = truncate_body(&body);
        assert_eq!(truncated, format!("{}...", "a".repeat(199)));

        // Three-byte chars leave no boundary at 200; the cut backs off to 198.
        let body = "€".repeat(300);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.trim_end_matches("..."), "€".repeat(66));
    }
}
