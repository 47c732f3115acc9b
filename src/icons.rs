//! Weather condition icon mapping
//!
//! Maps provider condition ids to display emoji. The id ranges follow the
//! OpenWeatherMap convention: 2xx thunderstorm, 3xx drizzle, 5xx rain,
//! 6xx snow, 7xx atmosphere, 800 clear, 80x clouds. Clear sky and the
//! partly-cloudy ids (801-803) carry a night variant; overcast and
//! everything below 800 render the same around the clock.

/// Returns the display emoji for a condition id.
///
/// `is_day` only affects clear sky and the partly-cloudy ids; scattered
/// clouds (802) share the few-clouds icon, broken clouds (803) get the
/// heavier sun-behind-cloud.
pub fn weather_emoji(weather_id: u16, is_day: bool) -> &'static str {
    match weather_id {
        200..=299 => "⛈️",
        300..=399 => "🌦️",
        500..=599 => "🌧️",
        600..=699 => "❄️",
        700..=799 => "🌫️",
        800 => {
            if is_day {
                "☀️"
            } else {
                "🌙"
            }
        }
        801 | 802 => {
            if is_day {
                "🌤️"
            } else {
                "☁️"
            }
        }
        803 => {
            if is_day {
                "⛅"
            } else {
                "☁️"
            }
        }
        804.. => "☁️",
        _ => "☀️",
    }
}
