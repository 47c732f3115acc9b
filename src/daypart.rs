//! Day-part classification for background selection
//!
//! Splits the day into Day / Afternoon / Night around the local sunset.
//! Sunrise and sunset alone under-represent the visual transition, so the
//! afternoon band runs from 30 minutes before sunset through 60 minutes
//! after it, both ends inclusive, approximating dusk lighting without
//! astronomical twilight math. Night begins the minute after the band.

use serde::{Deserialize, Serialize};

use crate::clock::LocalMoment;

/// Minutes before sunset at which the afternoon band begins.
pub const AFTERNOON_LEAD_MINUTES: i32 = 30;

/// Minutes after sunset still counted as afternoon; night begins after.
pub const NIGHT_LAG_MINUTES: i32 = 60;

/// Coarse time-of-day bucket used to pick a background presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayPart {
    Day,
    Afternoon,
    Night,
}

/// Classifies a moment into a [`DayPart`].
///
/// Both moments must already be in local terms (offset applied by the
/// caller via [`crate::clock::local_moment`]). When either is missing the
/// classification falls back to the coarse daytime flag.
///
/// Minute arithmetic does not wrap across midnight, so sunsets before
/// 00:30 or after 23:30 local time push the bands outside `[0, 1440)`.
/// The upstream source never handled that case and this crate keeps the
/// behaviour.
pub fn classify_day_part(
    is_daytime: bool,
    now: Option<&LocalMoment>,
    sunset: Option<&LocalMoment>,
) -> DayPart {
    let (now, sunset) = match (now, sunset) {
        (Some(now), Some(sunset)) => (now, sunset),
        _ => {
            return if is_daytime {
                DayPart::Day
            } else {
                DayPart::Night
            };
        }
    };

    let now_minutes = now.minute_of_day();
    let sunset_minutes = sunset.minute_of_day();
    let afternoon_start = sunset_minutes - AFTERNOON_LEAD_MINUTES;
    let afternoon_end = sunset_minutes + NIGHT_LAG_MINUTES;

    if now_minutes >= afternoon_start && now_minutes <= afternoon_end {
        DayPart::Afternoon
    } else if is_daytime && now_minutes < afternoon_start {
        DayPart::Day
    } else {
        DayPart::Night
    }
}
