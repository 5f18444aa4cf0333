use serde::{Deserialize, Serialize};

/// A geocoded place: coordinates plus a display name composed from the
/// match's name, admin region and country (empty segments omitted).
#[derive(Debug, Clone)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

/// Current conditions as returned by the forecast service.
///
/// Every field is optional: the service occasionally drops fields, and a
/// gap in the data is not a failure. Missing values surface as `None` in
/// the formatted report instead of aborting the lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionsReading {
    pub temperature_c: Option<f64>,
    pub humidity_pct: Option<u8>,
    pub wind_speed_mps: Option<f64>,
    pub weather_code: Option<i64>,
}

/// The finished lookup result: display-ready strings only.
///
/// This is the one type that crosses into the presentation shells, and it
/// serializes to exactly the JSON shape the web shell emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    pub description: String,
    pub temperature: String,
    pub humidity: String,
    pub wind: String,
}
