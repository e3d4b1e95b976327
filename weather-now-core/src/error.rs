use thiserror::Error;

pub use reqwest::StatusCode;

/// Everything that can end a weather lookup.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// No location, or an empty one, was given on the command line.
    #[error("Please provide a location to get a weather reading")]
    MissingLocation,

    #[error("failed to reach the weather service")]
    Network(#[source] reqwest::Error),

    #[error("failed to read the weather service response")]
    Body(#[source] reqwest::Error),

    /// Non-200 answer. Only the status text is kept, never the body.
    #[error("{0}")]
    Http(StatusCode),

    #[error("weather service returned malformed JSON")]
    Parse(#[source] serde_json::Error),

    /// Valid JSON that does not carry the fields a report needs.
    #[error("unexpected response shape: {0}")]
    Shape(String),
}

pub type Result<T, E = WeatherError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_message_is_status_text() {
        let err = WeatherError::Http(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "404 Not Found");
    }

    #[test]
    fn shape_error_names_the_problem() {
        let err = WeatherError::Shape("`weather` list is empty".to_string());
        assert_eq!(err.to_string(), "unexpected response shape: `weather` list is empty");
    }
}
