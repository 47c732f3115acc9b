//! Core data models for Skycast
//!
//! This module contains the value records flowing through the forecast
//! pipeline: raw 3-hour samples from the provider, the optional live
//! current-conditions override, and the derived daily and hourly views.

pub mod response;

pub use response::{ForecastResponse, ResponseError};

use serde::{Deserialize, Serialize};

/// A single 3-hour forecast sample from the upstream provider.
///
/// Samples arrive already decoded, chronologically ordered, one per
/// 3-hour slot. They are never mutated by the derivation code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSample {
    /// UTC epoch of the slot in seconds
    pub epoch_seconds: i64,
    /// Air temperature in Celsius
    pub temperature: f64,
    /// Feels-like temperature in Celsius, when the provider supplies it
    pub feels_like: Option<f64>,
    /// Provider condition id (800 = clear, 500 = light rain, ...)
    pub weather_id: u16,
    /// Human-readable condition description
    pub description: String,
    /// Relative humidity percentage (0-100)
    pub humidity: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Wind direction in degrees, when available
    pub wind_direction_deg: Option<f64>,
    /// Cloud cover percentage (0-100)
    pub cloud_cover_pct: f64,
    /// Visibility in meters, when available
    pub visibility_meters: Option<f64>,
    /// Rain volume over the 3-hour slot in millimeters
    pub rain_volume_mm: Option<f64>,
    /// Probability of precipitation (0.0-1.0)
    pub precipitation_probability: f64,
}

/// Live current-conditions snapshot used to override the "Now" entry.
///
/// Fetched separately from the 3-hour samples by the caller; the nearest
/// discrete sample can already be stale relative to this, so live data
/// wins for the present moment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Air temperature in Celsius
    pub temperature: f64,
    /// Feels-like temperature in Celsius
    pub feels_like: f64,
    /// Human-readable condition description
    pub description: String,
    /// Provider condition id
    pub weather_id: u16,
    /// Display icon, already resolved by the caller
    pub icon: String,
    /// Relative humidity percentage (0-100)
    pub humidity: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Cloud cover percentage (0-100)
    pub cloud_cover_pct: f64,
    /// Visibility in meters, when available
    pub visibility_meters: Option<f64>,
}

/// The slice of live conditions the daily aggregator needs for its
/// day-zero override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentSummary {
    /// Provider condition id
    pub weather_id: u16,
    /// Human-readable condition description
    pub description: String,
}

impl CurrentConditions {
    /// Extracts the pair of fields the daily aggregator overrides with.
    pub fn summary(&self) -> CurrentSummary {
        CurrentSummary {
            weather_id: self.weather_id,
            description: self.description.clone(),
        }
    }
}

/// Aggregated forecast for one local calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Local day of week (0 = Sunday, 6 = Saturday)
    pub day_of_week: u8,
    /// Local calendar date in `YYYY-MM-DD` form
    pub date_key: String,
    /// Rounded minimum temperature across the day's samples
    pub min_temp: i32,
    /// Rounded maximum temperature; never below `min_temp`
    pub max_temp: i32,
    /// Representative condition id for the day
    pub weather_id: u16,
    /// Representative condition description
    pub description: String,
    /// Display icon (always the day variant)
    pub icon: String,
}

/// One row of the scrolling hourly display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyEntry {
    /// `"Now"` for the first future entry, `"HH:00"` otherwise
    pub display_time: String,
    /// UTC epoch of the underlying slot in seconds
    pub epoch_seconds: i64,
    /// Air temperature in Celsius
    pub temperature: f64,
    /// Feels-like temperature in Celsius, when available
    pub feels_like: Option<f64>,
    /// Human-readable condition description
    pub description: String,
    /// Provider condition id
    pub weather_id: u16,
    /// Display icon
    pub icon: String,
    /// Probability of precipitation (0.0-1.0); forced to 0 for the live
    /// override entry, which carries no precipitation signal
    pub precipitation_probability: f64,
    /// Relative humidity percentage, when available
    pub humidity: Option<f64>,
    /// Wind speed in m/s, when available
    pub wind_speed: Option<f64>,
    /// Wind direction in degrees, when available
    pub wind_direction_deg: Option<f64>,
    /// Cloud cover percentage, when available
    pub cloud_cover_pct: Option<f64>,
    /// Visibility in meters, when available
    pub visibility_meters: Option<f64>,
    /// Rain volume over the slot in millimeters, when available
    pub rain_volume_mm: Option<f64>,
    /// Local day of week (0 = Sunday); join key for day grouping in the UI
    pub day_of_week: u8,
    /// Local calendar date; join key for day grouping in the UI
    pub date_key: String,
}
