//! Daily forecast aggregation
//!
//! Groups 3-hour samples by local calendar date and reduces each group to
//! a min/max temperature range plus one representative condition. The
//! earliest group ("today") can absorb a live temperature reading and a
//! live condition override supplied by the caller.

use std::collections::BTreeMap;

use crate::clock::local_moment;
use crate::data::{CurrentSummary, DailyForecast, ForecastSample};
use crate::icons::weather_emoji;

/// First local hour of the midday preference window (inclusive).
pub const MIDDAY_START_HOUR: u8 = 12;

/// Last local hour of the midday preference window (inclusive).
pub const MIDDAY_END_HOUR: u8 = 15;

/// All samples of one local calendar day, in chronological order.
#[derive(Debug)]
struct DayBucket {
    day_of_week: u8,
    date_key: String,
    temps: Vec<f64>,
    conditions: Vec<ConditionSample>,
}

/// The condition triple retained per sample for representative selection.
#[derive(Debug)]
struct ConditionSample {
    weather_id: u16,
    description: String,
    local_hour: u8,
}

/// The condition chosen to represent a whole day.
#[derive(Debug, Clone)]
struct Representative {
    weather_id: u16,
    description: String,
}

/// Inputs a selector strategy sees for one day group.
struct SelectorContext<'a> {
    bucket: &'a DayBucket,
    /// Whether this is the earliest group in the output
    is_today: bool,
    live: Option<&'a CurrentSummary>,
}

/// A pure representative-selection strategy; returns `None` to pass the
/// decision to the next strategy in [`SELECTORS`].
type Selector = fn(&SelectorContext) -> Option<Representative>;

/// Selection strategies in priority order. The plurality fallback always
/// produces a result for a non-empty group, so the chain never comes up
/// empty in practice.
const SELECTORS: &[Selector] = &[today_override, midday_preference, plurality_fallback];

/// Aggregates raw samples into one forecast per local calendar day.
///
/// Groups are sorted ascending by date and never truncated: every
/// distinct date key present in the input yields an entry. An empty
/// input yields an empty output.
///
/// `live_temperature` joins the earliest group's temperature list before
/// min/max are taken, so today's range reflects the live reading. `live`
/// replaces the earliest group's representative condition outright.
pub fn aggregate_daily(
    samples: &[ForecastSample],
    offset_seconds: i64,
    live_temperature: Option<f64>,
    live: Option<&CurrentSummary>,
) -> Vec<DailyForecast> {
    // BTreeMap keyed by YYYY-MM-DD keeps groups in date order for free
    let mut buckets: BTreeMap<String, DayBucket> = BTreeMap::new();

    for sample in samples {
        let moment = local_moment(sample.epoch_seconds, offset_seconds);
        let bucket = buckets
            .entry(moment.date_key.clone())
            .or_insert_with(|| DayBucket {
                day_of_week: moment.day_of_week,
                date_key: moment.date_key.clone(),
                temps: Vec::new(),
                conditions: Vec::new(),
            });

        bucket.temps.push(sample.temperature);
        bucket.conditions.push(ConditionSample {
            weather_id: sample.weather_id,
            description: sample.description.clone(),
            local_hour: moment.hour,
        });
    }

    let mut days: Vec<DayBucket> = buckets.into_values().collect();

    // Today's range should reflect the live reading even though it did
    // not come from a 3-hour sample
    if let (Some(temperature), Some(today)) = (live_temperature, days.first_mut()) {
        today.temps.push(temperature);
    }

    days.iter()
        .enumerate()
        .map(|(index, bucket)| {
            let context = SelectorContext {
                bucket,
                is_today: index == 0,
                live,
            };
            let representative = SELECTORS
                .iter()
                .find_map(|selector| selector(&context))
                .unwrap_or(Representative {
                    weather_id: 0,
                    description: String::new(),
                });

            let max = bucket.temps.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let min = bucket.temps.iter().cloned().fold(f64::INFINITY, f64::min);

            DailyForecast {
                day_of_week: bucket.day_of_week,
                date_key: bucket.date_key.clone(),
                min_temp: min.round() as i32,
                max_temp: max.round() as i32,
                weather_id: representative.weather_id,
                description: representative.description.clone(),
                // Daily summary icons are never rendered in a night variant
                icon: weather_emoji(representative.weather_id, true).to_string(),
            }
        })
        .collect()
}

/// Live conditions are definitionally more representative of today than
/// any 3-hour sample.
fn today_override(context: &SelectorContext) -> Option<Representative> {
    if !context.is_today {
        return None;
    }
    context.live.map(|live| Representative {
        weather_id: live.weather_id,
        description: live.description.clone(),
    })
}

/// Prefers the first sample whose local hour falls in the midday window;
/// midday conditions read as the most representative of the day.
fn midday_preference(context: &SelectorContext) -> Option<Representative> {
    context
        .bucket
        .conditions
        .iter()
        .find(|c| c.local_hour >= MIDDAY_START_HOUR && c.local_hour <= MIDDAY_END_HOUR)
        .map(|c| Representative {
            weather_id: c.weather_id,
            description: c.description.clone(),
        })
}

/// Falls back to the most frequent condition id; ties go to the id seen
/// earliest in the day.
fn plurality_fallback(context: &SelectorContext) -> Option<Representative> {
    let conditions = &context.bucket.conditions;

    // Counts in first-occurrence order so ties resolve chronologically
    let mut counts: Vec<(u16, usize)> = Vec::new();
    for condition in conditions {
        match counts.iter_mut().find(|(id, _)| *id == condition.weather_id) {
            Some(entry) => entry.1 += 1,
            None => counts.push((condition.weather_id, 1)),
        }
    }

    let mut winner: Option<(u16, usize)> = None;
    for &(id, count) in &counts {
        if winner.map_or(true, |(_, best)| count > best) {
            winner = Some((id, count));
        }
    }
    let (winner_id, _) = winner?;

    conditions
        .iter()
        .find(|c| c.weather_id == winner_id)
        .map(|c| Representative {
            weather_id: c.weather_id,
            description: c.description.clone(),
        })
}
