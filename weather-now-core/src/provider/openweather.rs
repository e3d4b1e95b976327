use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::{
    config::Config,
    error::{Result, WeatherError},
    model::Location,
};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    config: Config,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(config: Config) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: Config, http: Client) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwMain {
    /// Kelvin, the API's default unit.
    pub(crate) temp: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwWeather {
    pub(crate) description: String,
}

/// The part of the current-weather payload a report is built from.
#[derive(Debug, Deserialize)]
pub(crate) struct OwCurrentResponse {
    pub(crate) main: OwMain,
    pub(crate) weather: Vec<OwWeather>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch_current(&self, location: &Location) -> Result<Vec<u8>> {
        let url = self.config.current_weather_url(location.as_str());
        debug!(%location, config = ?self.config, "requesting current weather");

        // The URL carries the API key, keep it out of error messages.
        let res = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherError::Network(e.without_url()))?;

        let status = res.status();
        let body = res.bytes().await.map_err(|e| WeatherError::Body(e.without_url()))?;
        debug!(%status, bytes = body.len(), "received weather response");

        if status != StatusCode::OK {
            debug!(
                body = %truncate_body(&String::from_utf8_lossy(&body)),
                "discarding body of failed request"
            );
            return Err(WeatherError::Http(status));
        }

        Ok(body.to_vec())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_string(),
    }
}
