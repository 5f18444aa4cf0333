//! Assembles a [`WeatherReport`] out of a conditions reading.
//!
//! Values are rendered exactly as the service returned them, no rounding or
//! unit conversion. A missing value renders as the literal `None` in place
//! of the number so a partially-filled response still yields a complete
//! report.

use crate::codes;
use crate::model::{ConditionsReading, WeatherReport};
use std::fmt::Display;

/// Build a display-ready report for a resolved location.
pub fn build_report(display_name: &str, reading: &ConditionsReading) -> WeatherReport {
    WeatherReport {
        city: display_name.to_string(),
        description: codes::describe(reading.weather_code).to_string(),
        temperature: metric(reading.temperature_c, "°C"),
        humidity: metric(reading.humidity_pct, "%"),
        wind: metric(reading.wind_speed_mps, " m/s"),
    }
}

fn metric<T: Display>(value: Option<T>, suffix: &str) -> String {
    match value {
        Some(v) => format!("{v}{suffix}"),
        None => format!("None{suffix}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_reading_formats_every_field() {
        let reading = ConditionsReading {
            temperature_c: Some(18.5),
            humidity_pct: Some(60),
            wind_speed_mps: Some(4.2),
            weather_code: Some(3),
        };

        let report = build_report("Paris, Île-de-France, France", &reading);

        assert_eq!(report.city, "Paris, Île-de-France, France");
        assert_eq!(report.description, "Overcast");
        assert_eq!(report.temperature, "18.5°C");
        assert_eq!(report.humidity, "60%");
        assert_eq!(report.wind, "4.2 m/s");
    }

    #[test]
    fn missing_wind_renders_placeholder() {
        let reading = ConditionsReading {
            temperature_c: Some(7.1),
            humidity_pct: Some(82),
            wind_speed_mps: None,
            weather_code: Some(61),
        };

        let report = build_report("Bergen, Vestland, Norway", &reading);

        assert_eq!(report.wind, "None m/s");
        assert_eq!(report.temperature, "7.1°C");
        assert_eq!(report.description, "Rain: Slight intensity");
    }

    #[test]
    fn empty_reading_still_yields_complete_report() {
        let report = build_report("Nowhere", &ConditionsReading::default());

        assert_eq!(report.description, codes::UNKNOWN_CONDITION);
        assert_eq!(report.temperature, "None°C");
        assert_eq!(report.humidity, "None%");
        assert_eq!(report.wind, "None m/s");
    }
}
