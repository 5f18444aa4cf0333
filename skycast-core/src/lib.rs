//! Core library for the `skycast` weather lookup tools.
//!
//! This crate defines:
//! - Configuration handling
//! - The Open-Meteo client: geocoding plus current-conditions fetch
//! - WMO weather code translation and report formatting
//! - Shared domain models
//!
//! It is used by `skycast-cli` and `skycast-web`, but can also be reused by
//! other binaries or services.

pub mod client;
pub mod codes;
pub mod config;
pub mod error;
pub mod model;
pub mod report;

pub use client::OpenMeteo;
pub use config::Config;
pub use error::WeatherError;
pub use model::{ConditionsReading, Coordinates, WeatherReport};
