//! Conference days and the display strings derived from timestamps.

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;

use crate::error::{BreakgendaError, BreakgendaResult};
use crate::session::offset_instant;

/// Midnight (epoch ms) of each day the schedule covers, in display order.
pub const DAYS: [i64; 2] = [1667606400000, 1667692800000];

/// The day the filter starts on.
pub fn default_day() -> i64 {
    DAYS[0]
}

pub fn parse_timezone(name: &str) -> BreakgendaResult<Tz> {
    name.parse::<Tz>()
        .map_err(|_| BreakgendaError::Timezone(name.to_string()))
}

fn local(timestamp_ms: i64, tz: Tz) -> Option<DateTime<Tz>> {
    tz.timestamp_millis_opt(timestamp_ms).single()
}

/// Long day label used on session cards, e.g. "Saturday, November 5".
pub fn format_day(timestamp_ms: i64, tz: Tz) -> String {
    local(timestamp_ms, tz)
        .map(|dt| dt.format("%A, %B %-d").to_string())
        .unwrap_or_default()
}

/// Short day label used by the day selector, e.g. "Saturday, Nov 5".
pub fn format_day_option(timestamp_ms: i64, tz: Tz) -> String {
    local(timestamp_ms, tz)
        .map(|dt| dt.format("%A, %b %-d").to_string())
        .unwrap_or_default()
}

/// 12-hour clock time without leading zero or AM/PM, e.g. "9:00".
pub fn format_clock(timestamp_ms: i64, tz: Tz) -> String {
    local(timestamp_ms, tz)
        .map(|dt| dt.format("%-I:%M").to_string())
        .unwrap_or_default()
}

/// "start - end" for a session window given as minute offsets from its day.
pub fn format_time_range(start_date: i64, start_minute: i64, end_minute: i64, tz: Tz) -> String {
    format!(
        "{} - {}",
        format_clock(offset_instant(start_date, start_minute), tz),
        format_clock(offset_instant(start_date, end_minute), tz)
    )
}

/// Accepts either an epoch-ms timestamp or a YYYY-MM-DD date (midnight in `tz`).
pub fn parse_day(input: &str, tz: Tz) -> Option<i64> {
    if let Ok(timestamp) = input.parse::<i64>() {
        return Some(timestamp);
    }

    let date = chrono::NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    tz.from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.timestamp_millis())
}
