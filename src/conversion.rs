//! Cell-level conversion utilities
//!
//! Contains the position split, timestamp parsing and the lenient numeric
//! coercion used when mapping FlightRadar24 rows to G1000 rows.

use chrono::{DateTime, NaiveDateTime};

/// Naive timestamp layouts accepted after RFC 3339 fails
const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Leniently coerce a cell to a number
///
/// Blank, non-numeric, NaN and infinite values all become `None` so the
/// output cell is left empty instead of failing the file.
pub fn coerce_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Render a number for the G1000 CSV
///
/// Integral values keep one decimal (`24.0`), everything else uses the
/// shortest representation that round-trips (`29.92`, `-122.3321`).
pub fn format_numeric(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Split a `"<lat>,<lon>"` cell
///
/// Returns `None` when the cell is not exactly two comma-separated parts.
/// Each part is coerced leniently, so `"abc,-122.3"` gives `(None, Some(-122.3))`.
pub fn split_position(raw: &str) -> Option<(Option<f64>, Option<f64>)> {
    let mut parts = raw.split(',');
    let lat = parts.next()?;
    let lon = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((coerce_numeric(lat), coerce_numeric(lon)))
}

/// Parse an ISO-8601 timestamp into its wall-clock date and time
///
/// Timestamps carrying an offset are kept in that offset, no timezone
/// conversion happens.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_local());
    }

    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
}

/// Format a timestamp as the G1000 `Lcl Date` and `Lcl Time` cells
pub fn split_timestamp(timestamp: &NaiveDateTime) -> (String, String) {
    (
        timestamp.format("%Y-%m-%d").to_string(),
        timestamp.format("%H:%M:%S").to_string(),
    )
}
