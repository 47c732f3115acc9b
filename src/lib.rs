//! Skycast Library
//!
//! Derives daily and hourly forecast views from a provider's 3-hour
//! weather samples, plus the day-part classification used for background
//! selection. Exposed as a library for the CLI binary and integration
//! tests.

pub mod cli;
pub mod clock;
pub mod daily;
pub mod data;
pub mod daypart;
pub mod hourly;
pub mod icons;
