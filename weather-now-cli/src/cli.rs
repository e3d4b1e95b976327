use anyhow::Context;
use clap::Parser;
use tracing::debug;
use weather_now_core::{
    Config, Location, OpenWeatherProvider, WeatherProvider, WeatherReport, config::API_KEY_ENV,
    current_report,
};

/// Prefix for every failure that happens after the location was accepted.
const FETCH_FAILED: &str = "😭 Failed to get the weather";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-now", version, about = "Print the current weather for a location")]
pub struct Cli {
    /// Location name, e.g. "London" or "Paris,FR".
    pub location: Option<String>,

    /// OpenWeather API key.
    #[arg(long, env = API_KEY_ENV, hide_env_values = true, default_value = "")]
    pub api_key: String,

    /// Verbosity of diagnostics written to stderr.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let provider = OpenWeatherProvider::new(Config::new(self.api_key));
        let output = lookup(&provider, self.location).await?;
        print!("{output}");
        Ok(())
    }
}

/// Resolve the location, fetch and format its weather, and render the text
/// for stdout. The provider is never called when the location is unusable.
async fn lookup(provider: &dyn WeatherProvider, location: Option<String>) -> anyhow::Result<String> {
    let location = Location::parse(location)?;
    debug!(%location, "location resolved");

    let report = current_report(provider, &location).await.context(FETCH_FAILED)?;

    Ok(render(&location, &report))
}

fn render(location: &Location, report: &WeatherReport) -> String {
    format!("Right now in {location}:\n{report}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use weather_now_core::{WeatherError, error::StatusCode};

    #[derive(Debug, Default)]
    struct CountingProvider {
        calls: AtomicUsize,
        body: &'static str,
    }

    #[async_trait]
    impl WeatherProvider for CountingProvider {
        async fn fetch_current(&self, _location: &Location) -> Result<Vec<u8>, WeatherError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.body.as_bytes().to_vec())
        }
    }

    #[derive(Debug)]
    struct NotFoundProvider;

    #[async_trait]
    impl WeatherProvider for NotFoundProvider {
        async fn fetch_current(&self, _location: &Location) -> Result<Vec<u8>, WeatherError> {
            Err(WeatherError::Http(StatusCode::NOT_FOUND))
        }
    }

    #[test]
    fn parses_positional_location() {
        let cli = Cli::try_parse_from(["weather-now", "--api-key", "KEY", "Paris,FR"]).expect("valid args");
        assert_eq!(cli.location.as_deref(), Some("Paris,FR"));
        assert_eq!(cli.api_key, "KEY");
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn location_is_optional_at_parse_time() {
        let cli = Cli::try_parse_from(["weather-now", "--api-key", ""]).expect("valid args");
        assert!(cli.location.is_none());
    }

    #[test]
    fn api_key_flag_reads_the_documented_variable() {
        let cmd = <Cli as clap::CommandFactory>::command();
        let arg = cmd
            .get_arguments()
            .find(|a| a.get_id() == "api_key")
            .expect("api_key argument");
        assert_eq!(arg.get_env().and_then(|v| v.to_str()), Some(API_KEY_ENV));
    }

    #[tokio::test]
    async fn empty_location_makes_no_request() {
        let provider = CountingProvider::default();

        let err = lookup(&provider, Some(String::new())).await.unwrap_err();

        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
        assert_eq!(err.to_string(), "Please provide a location to get a weather reading");
    }

    #[tokio::test]
    async fn missing_location_makes_no_request() {
        let provider = CountingProvider::default();

        assert!(lookup(&provider, None).await.is_err());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn successful_lookup_renders_full_output() {
        let provider = CountingProvider {
            calls: AtomicUsize::new(0),
            body: r#"{"weather":[{"description":"clear sky"}],"main":{"temp":300.15}}"#,
        };

        let output = lookup(&provider, Some("London".to_string())).await.expect("lookup");

        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            output,
            "Right now in London:\nTemperature: 27.000000°c\nThe weather situation: clear sky\n\n"
        );
    }

    #[tokio::test]
    async fn fetch_errors_carry_the_failure_marker() {
        let err = lookup(&NotFoundProvider, Some("Atlantis".to_string())).await.unwrap_err();
        assert_eq!(format!("{err:#}"), "😭 Failed to get the weather: 404 Not Found");
    }

    #[tokio::test]
    async fn format_errors_are_surfaced() {
        let provider = CountingProvider { calls: AtomicUsize::new(0), body: r#"{"main":{"temp":1.0}}"# };

        let err = lookup(&provider, Some("Oslo".to_string())).await.unwrap_err();

        let rendered = format!("{err:#}");
        assert!(rendered.starts_with(FETCH_FAILED));
        assert!(rendered.contains("unexpected response shape"));
    }
}
