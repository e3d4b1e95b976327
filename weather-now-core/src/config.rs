use std::fmt;

/// Environment variable holding the OpenWeather API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_APP_ID";

/// Current-weather endpoint of the OpenWeather API.
pub const DEFAULT_ENDPOINT: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Settings for talking to the weather service.
///
/// The API key is opaque and never validated: an empty key is sent as-is and
/// left for the service to reject.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub endpoint: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), endpoint: DEFAULT_ENDPOINT.to_string() }
    }

    /// Point requests at another base URL, e.g. a local test server.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Build the query URL for `location`.
    ///
    /// Both values are interpolated verbatim, without percent-encoding.
    pub fn current_weather_url(&self, location: &str) -> String {
        format!("{}?q={}&APPID={}", self.endpoint, location, self.api_key)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.api_key.is_empty() { "<empty>" } else { "<redacted>" };
        f.debug_struct("Config")
            .field("api_key", &api_key)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
