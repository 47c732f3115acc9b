//! Hourly forecast projection
//!
//! Maps the provider's future 3-hour samples into rows for a scrolling
//! hourly display. The first future row is labelled "Now" and, when a
//! live current-conditions snapshot is supplied, its weather fields come
//! from the live reading instead of the nearest discrete sample.

use crate::clock::local_moment;
use crate::data::{CurrentConditions, ForecastSample, HourlyEntry};
use crate::icons::weather_emoji;

/// First local hour treated as day for the binary hourly icon split.
pub const DAY_START_HOUR: u8 = 6;

/// First local hour treated as night again. The hourly icon only needs a
/// day/night split, not the sunset-relative bands in [`crate::daypart`].
pub const DAY_END_HOUR: u8 = 20;

/// Projects raw samples into hourly display entries.
///
/// Samples strictly before `now_epoch_seconds` are dropped; nothing is
/// backfilled. Order is preserved. The caller captures "now" once and
/// passes it in, which keeps the projection a pure function.
pub fn project_hourly(
    samples: &[ForecastSample],
    offset_seconds: i64,
    live: Option<&CurrentConditions>,
    now_epoch_seconds: i64,
) -> Vec<HourlyEntry> {
    samples
        .iter()
        .filter(|sample| sample.epoch_seconds >= now_epoch_seconds)
        .enumerate()
        .map(|(index, sample)| {
            let moment = local_moment(sample.epoch_seconds, offset_seconds);
            let display_time = if index == 0 {
                "Now".to_string()
            } else {
                format!("{:02}:00", moment.hour)
            };

            if index == 0 {
                if let Some(live) = live {
                    // Live conditions win for the present moment; no
                    // precipitation signal comes with them.
                    return HourlyEntry {
                        display_time,
                        epoch_seconds: sample.epoch_seconds,
                        temperature: live.temperature,
                        feels_like: Some(live.feels_like),
                        description: live.description.clone(),
                        weather_id: live.weather_id,
                        icon: live.icon.clone(),
                        precipitation_probability: 0.0,
                        humidity: Some(live.humidity),
                        wind_speed: Some(live.wind_speed),
                        wind_direction_deg: None,
                        cloud_cover_pct: Some(live.cloud_cover_pct),
                        visibility_meters: live.visibility_meters,
                        rain_volume_mm: None,
                        day_of_week: moment.day_of_week,
                        date_key: moment.date_key,
                    };
                }
            }

            let is_day = (DAY_START_HOUR..DAY_END_HOUR).contains(&moment.hour);

            HourlyEntry {
                display_time,
                epoch_seconds: sample.epoch_seconds,
                temperature: sample.temperature,
                feels_like: sample.feels_like,
                description: sample.description.clone(),
                weather_id: sample.weather_id,
                icon: weather_emoji(sample.weather_id, is_day).to_string(),
                precipitation_probability: sample.precipitation_probability,
                humidity: Some(sample.humidity),
                wind_speed: Some(sample.wind_speed),
                wind_direction_deg: sample.wind_direction_deg,
                cloud_cover_pct: Some(sample.cloud_cover_pct),
                visibility_meters: sample.visibility_meters,
                rain_volume_mm: sample.rain_volume_mm,
                day_of_week: moment.day_of_week,
                date_key: moment.date_key,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2024-07-26T00:00:00 UTC, a Friday
    const BASE: i64 = 1_721_952_000;
    const HOUR: i64 = 3600;

    fn sample_at(epoch: i64, weather_id: u16, temperature: f64) -> ForecastSample {
        ForecastSample {
            epoch_seconds: epoch,
            temperature,
            feels_like: Some(temperature + 0.5),
            weather_id,
            description: format!("condition {}", weather_id),
            humidity: 60.0,
            wind_speed: 3.0,
            wind_direction_deg: Some(180.0),
            cloud_cover_pct: 40.0,
            visibility_meters: Some(10_000.0),
            rain_volume_mm: None,
            precipitation_probability: 0.2,
        }
    }

    fn live() -> CurrentConditions {
        CurrentConditions {
            temperature: 19.5,
            feels_like: 19.0,
            description: "light rain".to_string(),
            weather_id: 500,
            icon: "🌧️".to_string(),
            humidity: 85.0,
            wind_speed: 6.0,
            cloud_cover_pct: 95.0,
            visibility_meters: Some(7_000.0),
        }
    }

    #[test]
    fn test_past_samples_are_dropped() {
        let samples = vec![
            sample_at(BASE - 3 * HOUR, 800, 15.0),
            sample_at(BASE, 800, 16.0),
            sample_at(BASE + 3 * HOUR, 801, 17.0),
        ];

        // "now" one hour past the second sample: only the third survives
        let entries = project_hourly(&samples, 0, None, BASE + HOUR);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].epoch_seconds, BASE + 3 * HOUR);
    }

    #[test]
    fn test_sample_at_now_is_kept() {
        let samples = vec![sample_at(BASE, 800, 16.0)];
        let entries = project_hourly(&samples, 0, None, BASE);
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_first_entry_is_labelled_now() {
        let samples = vec![
            sample_at(BASE + 12 * HOUR, 800, 22.0),
            sample_at(BASE + 15 * HOUR, 801, 23.0),
        ];

        let entries = project_hourly(&samples, 0, None, BASE);
        assert_eq!(entries[0].display_time, "Now");
        assert_eq!(entries[1].display_time, "15:00");
    }

    #[test]
    fn test_display_hour_uses_local_time() {
        // 12:00 UTC with a +05:30 offset reads 17:30 local, floored to 17:00
        let samples = vec![
            sample_at(BASE + 9 * HOUR, 800, 22.0),
            sample_at(BASE + 12 * HOUR, 800, 22.0),
        ];

        let entries = project_hourly(&samples, 19_800, None, BASE);
        assert_eq!(entries[1].display_time, "17:00");
    }

    #[test]
    fn test_live_override_replaces_first_entry_fields() {
        let samples = vec![
            sample_at(BASE + 12 * HOUR, 800, 22.0),
            sample_at(BASE + 15 * HOUR, 801, 23.0),
        ];

        let live = live();
        let entries = project_hourly(&samples, 0, Some(&live), BASE);

        let first = &entries[0];
        assert_eq!(first.display_time, "Now");
        assert!((first.temperature - 19.5).abs() < 0.01);
        assert_eq!(first.feels_like, Some(19.0));
        assert_eq!(first.description, "light rain");
        assert_eq!(first.weather_id, 500);
        assert_eq!(first.icon, "🌧️");
        assert_eq!(first.humidity, Some(85.0));
        assert_eq!(first.wind_speed, Some(6.0));
        assert_eq!(first.cloud_cover_pct, Some(95.0));
        assert_eq!(first.visibility_meters, Some(7_000.0));
        // No live signal for these
        assert!(first.wind_direction_deg.is_none());
        assert!(first.rain_volume_mm.is_none());
        assert!((first.precipitation_probability - 0.0).abs() < f64::EPSILON);

        // The underlying slot epoch and calendar keys stay from the sample
        assert_eq!(first.epoch_seconds, BASE + 12 * HOUR);
        assert_eq!(first.date_key, "2024-07-26");

        // Second entry is untouched by the override
        assert_eq!(entries[1].weather_id, 801);
        assert!((entries[1].precipitation_probability - 0.2).abs() < 0.001);
    }

    #[test]
    fn test_first_entry_without_live_uses_sample_fields() {
        let samples = vec![sample_at(BASE + 12 * HOUR, 800, 22.0)];
        let entries = project_hourly(&samples, 0, None, BASE);

        let first = &entries[0];
        assert_eq!(first.display_time, "Now");
        assert!((first.temperature - 22.0).abs() < 0.01);
        assert_eq!(first.weather_id, 800);
        assert!((first.precipitation_probability - 0.2).abs() < 0.001);
    }

    #[test]
    fn test_day_night_window_for_icons() {
        // 03:00 local is night, 12:00 local is day, 21:00 local is night
        let samples = vec![
            sample_at(BASE + 3 * HOUR, 800, 15.0),
            sample_at(BASE + 12 * HOUR, 800, 22.0),
            sample_at(BASE + 21 * HOUR, 800, 18.0),
        ];

        let entries = project_hourly(&samples, 0, None, BASE - HOUR);
        // First entry still goes through the window rule when no live
        // override is supplied
        assert_eq!(entries[0].icon, "🌙");
        assert_eq!(entries[1].icon, "☀️");
        assert_eq!(entries[2].icon, "🌙");
    }

    #[test]
    fn test_entries_carry_day_grouping_keys() {
        let samples = vec![
            sample_at(BASE + 21 * HOUR, 800, 18.0),
            sample_at(BASE + 24 * HOUR, 801, 16.0),
        ];

        let entries = project_hourly(&samples, 0, None, BASE);
        assert_eq!(entries[0].date_key, "2024-07-26");
        assert_eq!(entries[0].day_of_week, 5); // Friday
        assert_eq!(entries[1].date_key, "2024-07-27");
        assert_eq!(entries[1].day_of_week, 6); // Saturday
    }

    #[test]
    fn test_projection_is_deterministic() {
        let samples: Vec<ForecastSample> = (0..8)
            .map(|i| sample_at(BASE + i * 3 * HOUR, 800, 20.0))
            .collect();

        let first = project_hourly(&samples, 3600, Some(&live()), BASE);
        let second = project_hourly(&samples, 3600, Some(&live()), BASE);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.display_time, b.display_time);
            assert_eq!(a.epoch_seconds, b.epoch_seconds);
            assert_eq!(a.icon, b.icon);
        }

        // A later "now" only shrinks the set from the front
        let later = project_hourly(&samples, 3600, Some(&live()), BASE + 7 * HOUR);
        assert_eq!(later.len(), first.len() - 3);
        assert_eq!(later[0].display_time, "Now");
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let entries = project_hourly(&[], 0, Some(&live()), BASE);
        assert!(entries.is_empty());
    }
}
