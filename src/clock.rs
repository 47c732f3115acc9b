//! Local-time conversion via flat timezone offsets
//!
//! The upstream weather provider tags every city with a plain offset in
//! seconds from UTC. Local calendar fields are simulated by adding that
//! offset to a UTC instant and reading the shifted instant's UTC fields,
//! so no timezone database is involved. DST transitions are therefore not
//! modelled; a local date can be off by the DST skew twice a year, which
//! matches the upstream behaviour this crate mirrors.

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Epochs below this magnitude are interpreted as seconds and scaled to
/// milliseconds. Upstream historically delivered both encodings.
const MILLIS_THRESHOLD: i64 = 10_000_000_000;

/// Calendar fields of an instant, shifted into a city's local time.
///
/// All fields are derived from the epoch and offset at construction;
/// the struct is never built by hand outside of tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalMoment {
    /// Normalized epoch in seconds (UTC, before the offset is applied)
    pub epoch_seconds: i64,
    /// Timezone offset in seconds from UTC
    pub offset_seconds: i64,
    /// Local hour of day (0-23)
    pub hour: u8,
    /// Local minute (0-59)
    pub minute: u8,
    /// Local second (0-59)
    pub second: u8,
    /// Local calendar date in `YYYY-MM-DD` form
    pub date_key: String,
    /// Local day of week (0 = Sunday, 6 = Saturday)
    pub day_of_week: u8,
}

impl LocalMoment {
    /// Formats the local time as `HH:MM`.
    pub fn hhmm(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    /// Formats the local time as `HH:MM:SS`.
    pub fn hhmmss(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }

    /// Minute of the local day (`hour * 60 + minute`).
    pub fn minute_of_day(&self) -> i32 {
        i32::from(self.hour) * 60 + i32::from(self.minute)
    }
}

/// Converts a UTC epoch plus a flat offset into local calendar fields.
///
/// The epoch may be expressed in seconds or milliseconds; magnitudes below
/// 10^10 are treated as seconds. Total over all finite inputs: values that
/// fall outside chrono's representable range clamp to the Unix epoch
/// rather than panicking.
pub fn local_moment(epoch: i64, offset_seconds: i64) -> LocalMoment {
    let millis = if epoch < MILLIS_THRESHOLD {
        epoch.saturating_mul(1000)
    } else {
        epoch
    };
    let shifted = millis.saturating_add(offset_seconds.saturating_mul(1000));
    let local: DateTime<Utc> =
        DateTime::from_timestamp_millis(shifted).unwrap_or(DateTime::UNIX_EPOCH);

    LocalMoment {
        epoch_seconds: millis.div_euclid(1000),
        offset_seconds,
        hour: local.hour() as u8,
        minute: local.minute() as u8,
        second: local.second() as u8,
        date_key: local.format("%Y-%m-%d").to_string(),
        day_of_week: local.weekday().num_days_from_sunday() as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_epoch_utc() {
        let moment = local_moment(0, 0);
        assert_eq!(moment.hour, 0);
        assert_eq!(moment.minute, 0);
        assert_eq!(moment.second, 0);
        assert_eq!(moment.date_key, "1970-01-01");
        assert_eq!(moment.day_of_week, 4); // Thursday
    }

    #[test]
    fn test_positive_offset_shifts_calendar_fields() {
        // 2023-11-14T22:13:20 UTC with a +05:30 offset lands on the 15th
        let moment = local_moment(1_700_000_000, 19_800);
        assert_eq!(moment.hour, 3);
        assert_eq!(moment.minute, 43);
        assert_eq!(moment.second, 20);
        assert_eq!(moment.date_key, "2023-11-15");
        assert_eq!(moment.day_of_week, 3); // Wednesday
    }

    #[test]
    fn test_negative_offset_crosses_midnight_backwards() {
        let moment = local_moment(0, -3600);
        assert_eq!(moment.hour, 23);
        assert_eq!(moment.date_key, "1969-12-31");
        assert_eq!(moment.day_of_week, 3); // Wednesday
    }

    #[test]
    fn test_millisecond_epoch_auto_detected() {
        let from_seconds = local_moment(1_700_000_000, 0);
        let from_millis = local_moment(1_700_000_000_000, 0);
        assert_eq!(from_seconds, from_millis);
        assert_eq!(from_seconds.epoch_seconds, 1_700_000_000);
    }

    #[test]
    fn test_extreme_epoch_does_not_panic() {
        let moment = local_moment(i64::MAX, i64::MAX);
        // Out-of-range instants clamp to the Unix epoch
        assert_eq!(moment.date_key, "1970-01-01");
        let moment = local_moment(i64::MIN, i64::MIN);
        assert_eq!(moment.date_key, "1970-01-01");
    }

    #[test]
    fn test_hhmm_formats_with_leading_zeros() {
        // 2024-07-26T10:00:00 UTC
        let moment = local_moment(1_721_988_000, 0);
        assert_eq!(moment.hhmm(), "10:00");
        assert_eq!(moment.hhmmss(), "10:00:00");

        let moment = local_moment(1_700_000_000, 19_800);
        assert_eq!(moment.hhmm(), "03:43");
        assert_eq!(moment.hhmmss(), "03:43:20");
    }

    #[test]
    fn test_minute_of_day() {
        let moment = local_moment(1_700_000_000, 19_800); // 03:43 local
        assert_eq!(moment.minute_of_day(), 3 * 60 + 43);
    }

    #[test]
    fn test_day_of_week_is_sunday_based() {
        // 2024-07-26 is a Friday
        let moment = local_moment(1_721_988_000, 0);
        assert_eq!(moment.day_of_week, 5);
    }
}
