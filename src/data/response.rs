//! Upstream forecast response decoding
//!
//! This module defines the serde schema for the provider's 5-day/3-hour
//! forecast payload and converts it into our [`ForecastSample`] records.
//! It is strictly an ingestion boundary: network fetching and caching are
//! the caller's concern.

use serde::Deserialize;
use thiserror::Error;

use super::ForecastSample;

/// Errors that can occur when decoding a forecast response
#[derive(Debug, Error)]
pub enum ResponseError {
    /// Failed to parse the JSON payload
    #[error("Failed to parse forecast response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// A forecast slot carried an empty weather array
    #[error("Forecast slot at epoch {0} has no weather condition")]
    MissingCondition(i64),
}

/// Top-level forecast response from the provider
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    /// One slot per 3-hour interval, chronologically ordered
    pub list: Vec<ForecastSlot>,
}

/// A single 3-hour slot in the provider's schema
#[derive(Debug, Deserialize)]
pub struct ForecastSlot {
    /// UTC epoch of the slot in seconds
    pub dt: i64,
    pub main: SlotMain,
    /// Conditions for the slot; the provider guarantees at least one
    pub weather: Vec<SlotCondition>,
    pub wind: SlotWind,
    pub clouds: SlotClouds,
    /// Visibility in meters; omitted above 10 km by some deployments
    pub visibility: Option<f64>,
    pub rain: Option<SlotRain>,
    /// Probability of precipitation (0.0-1.0); absent means zero
    #[serde(default)]
    pub pop: f64,
}

/// Temperature and humidity block
#[derive(Debug, Deserialize)]
pub struct SlotMain {
    pub temp: f64,
    pub feels_like: Option<f64>,
    pub humidity: f64,
}

/// Weather condition block
#[derive(Debug, Deserialize)]
pub struct SlotCondition {
    pub id: u16,
    pub description: String,
}

/// Wind block
#[derive(Debug, Deserialize)]
pub struct SlotWind {
    pub speed: f64,
    pub deg: Option<f64>,
}

/// Cloud cover block
#[derive(Debug, Deserialize)]
pub struct SlotClouds {
    pub all: f64,
}

/// Rain volume block; keyed by the accumulation window
#[derive(Debug, Deserialize)]
pub struct SlotRain {
    #[serde(rename = "3h")]
    pub three_hour: Option<f64>,
}

impl ForecastResponse {
    /// Parses a raw JSON payload into a response.
    pub fn from_json(json: &str) -> Result<Self, ResponseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Converts the response into forecast samples, preserving order.
    ///
    /// Fails if any slot carries an empty weather array; the derivation
    /// code downstream relies on every sample having a condition.
    pub fn into_samples(self) -> Result<Vec<ForecastSample>, ResponseError> {
        self.list.into_iter().map(ForecastSlot::into_sample).collect()
    }
}

impl ForecastSlot {
    /// Flattens the provider's nested slot into a [`ForecastSample`].
    fn into_sample(self) -> Result<ForecastSample, ResponseError> {
        let condition = self
            .weather
            .into_iter()
            .next()
            .ok_or(ResponseError::MissingCondition(self.dt))?;

        Ok(ForecastSample {
            epoch_seconds: self.dt,
            temperature: self.main.temp,
            feels_like: self.main.feels_like,
            weather_id: condition.id,
            description: condition.description,
            humidity: self.main.humidity,
            wind_speed: self.wind.speed,
            wind_direction_deg: self.wind.deg,
            cloud_cover_pct: self.clouds.all,
            visibility_meters: self.visibility,
            rain_volume_mm: self.rain.and_then(|r| r.three_hour),
            precipitation_probability: self.pop,
        })
    }
}
