//! Core library for the `weather-now` CLI.
//!
//! This crate defines:
//! - The configuration value carrying the OpenWeather credential
//! - Abstraction over the weather data source
//! - Decoding of the provider payload into a printable report
//!
//! It is used by `weather-now-cli`, but the pipeline can be driven by any
//! caller that supplies its own [`WeatherProvider`].

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod report;

pub use config::Config;
pub use error::WeatherError;
pub use model::{Location, WeatherReport};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
pub use report::{current_report, format_weather, kelvin_to_celsius};
