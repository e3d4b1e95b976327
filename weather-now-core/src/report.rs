use serde_json::Value;
use tracing::debug;

use crate::{
    error::{Result, WeatherError},
    model::{Location, WeatherReport},
    provider::{WeatherProvider, openweather::OwCurrentResponse},
};

const ABSOLUTE_ZERO_C: f64 = 273.15;

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - ABSOLUTE_ZERO_C
}

/// Decode a current-weather payload into a report.
///
/// Invalid JSON yields [`WeatherError::Parse`]. JSON that lacks
/// `weather[0].description` or `main.temp`, or has them with the wrong type,
/// yields [`WeatherError::Shape`].
pub fn format_weather(body: &[u8]) -> Result<WeatherReport> {
    let payload: Value = serde_json::from_slice(body).map_err(WeatherError::Parse)?;

    let current: OwCurrentResponse =
        serde_json::from_value(payload).map_err(|e| WeatherError::Shape(e.to_string()))?;

    let description = current
        .weather
        .into_iter()
        .next()
        .map(|w| w.description)
        .ok_or_else(|| WeatherError::Shape("`weather` list is empty".to_string()))?;

    Ok(WeatherReport { temperature_c: kelvin_to_celsius(current.main.temp), description })
}

/// Fetch and format the current weather for `location`.
pub async fn current_report(
    provider: &dyn WeatherProvider,
    location: &Location,
) -> Result<WeatherReport> {
    let body = provider.fetch_current(location).await?;
    let report = format_weather(&body)?;
    debug!(temperature_c = report.temperature_c, description = %report.description, "weather report ready");
    Ok(report)
}
