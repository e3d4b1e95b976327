use std::fmt;

use crate::error::{Result, WeatherError};

/// A free-form place name, guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location(String);

impl Location {
    /// Resolve the location argument, which may be missing altogether.
    pub fn parse(raw: Option<String>) -> Result<Self> {
        raw.ok_or(WeatherError::MissingLocation).and_then(Self::try_from)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Location {
    type Error = WeatherError;

    fn try_from(value: String) -> Result<Self> {
        if value.is_empty() {
            return Err(WeatherError::MissingLocation);
        }
        Ok(Self(value))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What gets printed for one lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub temperature_c: f64,
    pub description: String,
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Temperature: {:.6}°c", self.temperature_c)?;
        writeln!(f, "The weather situation: {}", self.description)
    }
}
