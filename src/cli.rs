//! Command-line interface parsing for Skycast
//!
//! This module handles parsing of CLI arguments using clap, including the
//! --view flag selecting which derived forecast view to print.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified view name is not recognized
    #[error("Invalid view: '{0}'. Valid views: daily, hourly")]
    InvalidView(String),
}

/// The derived forecast view to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// One line per local calendar day
    Daily,
    /// One line per future 3-hour sample
    Hourly,
}

impl View {
    /// Parses user input into a View.
    ///
    /// Matching is case-insensitive and supports short aliases:
    /// - "daily" | "day" | "d" -> Daily
    /// - "hourly" | "hour" | "h" -> Hourly
    ///
    /// Returns `None` if the input doesn't match any view.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<View> {
        match s.to_lowercase().trim() {
            "daily" | "day" | "d" => Some(View::Daily),
            "hourly" | "hour" | "h" => Some(View::Hourly),
            _ => None,
        }
    }
}

/// Skycast - Derive daily and hourly views from 3-hour forecast samples
#[derive(Parser, Debug)]
#[command(name = "skycast")]
#[command(about = "Daily and hourly forecast views from 3-hour weather samples")]
#[command(version)]
pub struct Cli {
    /// Path to a provider forecast response JSON file
    pub input: PathBuf,

    /// City timezone offset in seconds from UTC
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub offset_seconds: i64,

    /// View to print: daily or hourly
    #[arg(long, value_name = "VIEW", default_value = "daily")]
    pub view: String,

    /// Epoch seconds to treat as "now" for the hourly filter
    /// (defaults to the wall clock)
    #[arg(long, allow_hyphen_values = true)]
    pub now: Option<i64>,
}

/// Configuration derived from CLI arguments for a run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Input file to read the provider response from
    pub input: PathBuf,
    /// City timezone offset in seconds from UTC
    pub offset_seconds: i64,
    /// Which view to print
    pub view: View,
    /// Explicit "now" capture, if supplied
    pub now: Option<i64>,
}

/// Parses a view string argument into a View enum.
///
/// # Arguments
/// * `s` - The view string from CLI
///
/// # Returns
/// * `Ok(View)` if the string matches a valid view
/// * `Err(CliError::InvalidView)` if the string doesn't match
pub fn parse_view_arg(s: &str) -> Result<View, CliError> {
    View::from_str(s).ok_or_else(|| CliError::InvalidView(s.to_string()))
}

impl RunConfig {
    /// Creates a RunConfig from parsed CLI arguments.
    ///
    /// # Arguments
    /// * `cli` - The parsed CLI struct
    ///
    /// # Returns
    /// * `Ok(RunConfig)` with appropriate settings
    /// * `Err(CliError)` if an invalid view was specified
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        Ok(RunConfig {
            input: cli.input.clone(),
            offset_seconds: cli.offset_seconds,
            view: parse_view_arg(&cli.view)?,
            now: cli.now,
        })
    }
}
