//! Shared formatting utilities for the GestureFlow views.

use chrono::{DateTime, Local, TimeZone};

/// Format a Unix timestamp (milliseconds) as a local wall-clock time.
///
/// Returns "HH:MM:SS", or "--:--:--" if the timestamp is out of range.
pub fn format_clock_time(timestamp_ms: i64) -> String {
    match DateTime::from_timestamp_millis(timestamp_ms) {
        Some(utc) => format_clock_time_in(&utc.with_timezone(&Local)),
        None => "--:--:--".to_string(),
    }
}

fn format_clock_time_in<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%H:%M:%S").to_string()
}

/// Format a Unix timestamp (milliseconds) as a relative time string.
///
/// Returns strings like "just now", "5s ago", "3m ago", "2h ago".
pub fn format_relative(timestamp_ms: i64, now_ms: i64) -> String {
    let diff_ms = now_ms - timestamp_ms;

    if diff_ms < 1000 {
        "just now".to_string()
    } else if diff_ms < 60_000 {
        format!("{}s ago", diff_ms / 1000)
    } else if diff_ms < 3_600_000 {
        format!("{}m ago", diff_ms / 60_000)
    } else {
        format!("{}h ago", diff_ms / 3_600_000)
    }
}

/// Format a confidence in [0, 1] as a whole percentage ("87%").
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.0}%", (confidence * 100.0).clamp(0.0, 100.0))
}

/// Singular/plural count ("1 time", "3 times").
pub fn format_times(count: usize) -> String {
    if count == 1 {
        "1 time".to_string()
    } else {
        format!("{} times", count)
    }
}
