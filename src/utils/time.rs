//! Time utilities: millisecond clocks and human readable timestamps.

use chrono::{DateTime, Local, Utc};

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Render a millisecond timestamp in local time.
/// Small values (replayed relative clocks) are shown as offsets instead.
pub fn format_millis(ms: i64) -> String {
    if ms.abs() < 1_000_000_000_000 {
        return format!("t+{}", format_elapsed(ms));
    }
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ms.to_string())
}

pub fn format_elapsed(ms: i64) -> String {
    let sign = if ms < 0 { "-" } else { "" };
    let m = ms.unsigned_abs();
    if m < 1_000 {
        format!("{}{} ms", sign, m)
    } else if m < 60_000 {
        format!("{}{:.1} s", sign, m as f64 / 1000.0)
    } else {
        format!("{}{}m {:02}s", sign, m / 60_000, (m % 60_000) / 1000)
    }
}
