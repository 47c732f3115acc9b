//! Skycast - Print daily and hourly forecast views
//!
//! Reads a provider forecast response from a JSON file and prints the
//! derived daily or hourly view to stdout. Fetching the response is left
//! to whatever put the file on disk.

use std::fs;

use chrono::Utc;
use clap::Parser;

use skycast::cli::{Cli, RunConfig, View};
use skycast::daily::aggregate_daily;
use skycast::data::{DailyForecast, ForecastResponse, HourlyEntry};
use skycast::hourly::project_hourly;

/// Short day names indexed by day-of-week (0 = Sunday)
const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

fn day_name(day_of_week: u8) -> &'static str {
    DAY_NAMES
        .get(usize::from(day_of_week))
        .copied()
        .unwrap_or("???")
}

/// Formats one daily forecast as a display line
fn daily_line(day: &DailyForecast) -> String {
    format!(
        "{} {}  {} {}  {}° / {}°",
        day_name(day.day_of_week),
        day.date_key,
        day.icon,
        day.description,
        day.max_temp,
        day.min_temp
    )
}

/// Formats one hourly entry as a display line
fn hourly_line(entry: &HourlyEntry) -> String {
    format!(
        "{:>5}  {} {}  {}°  {}%",
        entry.display_time,
        entry.icon,
        entry.description,
        entry.temperature.round() as i64,
        (entry.precipitation_probability * 100.0).round() as i64
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = RunConfig::from_cli(&cli)?;

    let json = fs::read_to_string(&config.input)?;
    let samples = ForecastResponse::from_json(&json)?.into_samples()?;

    match config.view {
        View::Daily => {
            for day in aggregate_daily(&samples, config.offset_seconds, None, None) {
                println!("{}", daily_line(&day));
            }
        }
        View::Hourly => {
            let now = config.now.unwrap_or_else(|| Utc::now().timestamp());
            for entry in project_hourly(&samples, config.offset_seconds, None, now) {
                println!("{}", hourly_line(&entry));
            }
        }
    }

    Ok(())
}
