//! WMO weather code translation.
//!
//! Codes and wording follow the Open-Meteo documentation. The mapping is
//! total: any code outside the table, and a missing code, yield
//! [`UNKNOWN_CONDITION`].

/// Fallback description for codes the table does not cover.
pub const UNKNOWN_CONDITION: &str = "Unknown weather condition";

/// Translate a WMO weather code into a human-readable description.
pub fn describe(code: Option<i64>) -> &'static str {
    match code {
        Some(0) => "Clear sky",
        Some(1) => "Mainly clear",
        Some(2) => "Partly cloudy",
        Some(3) => "Overcast",
        Some(45) => "Fog",
        Some(48) => "Depositing rime fog",
        Some(51) => "Drizzle: Light intensity",
        Some(53) => "Drizzle: Moderate intensity",
        Some(55) => "Drizzle: Dense intensity",
        Some(56) => "Freezing Drizzle: Light intensity",
        Some(57) => "Freezing Drizzle: Dense intensity",
        Some(61) => "Rain: Slight intensity",
        Some(63) => "Rain: Moderate intensity",
        Some(65) => "Rain: Heavy intensity",
        Some(66) => "Freezing Rain: Light intensity",
        Some(67) => "Freezing Rain: Heavy intensity",
        Some(71) => "Snow fall: Slight intensity",
        Some(73) => "Snow fall: Moderate intensity",
        Some(75) => "Snow fall: Heavy intensity",
        Some(77) => "Snow grains",
        Some(80) => "Rain showers: Slight",
        Some(81) => "Rain showers: Moderate",
        Some(82) => "Rain showers: Violent",
        Some(85) => "Snow showers: Slight",
        Some(86) => "Snow showers: Heavy",
        Some(95) => "Thunderstorm: Slight or moderate",
        Some(96) => "Thunderstorm with slight hail",
        Some(99) => "Thunderstorm with heavy hail",
        _ => UNKNOWN_CONDITION,
    }
}
