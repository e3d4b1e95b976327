use async_trait::async_trait;
use std::fmt::Debug;

use crate::{error::Result, model::Location};

pub mod openweather;

/// Source of raw current-weather payloads.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Issue one request for `location` and return the full response body.
    async fn fetch_current(&self, location: &Location) -> Result<Vec<u8>>;
}
