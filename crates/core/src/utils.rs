use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};

/// Renders a rate with exactly two fractional digits
pub fn format_rate(rate: f64) -> String {
    format!("{:.2}", rate)
}

/// Converts a UTC instant to a local-timezone string for logs
pub fn format_timestamp_to_local(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S %Z").to_string()
}

/// Parses a timestamp string into a UTC instant
/// Supports various formats: RFC 3339, ISO 8601 without offset, SQLite datetime, date only.
/// Inputs without an offset are taken as UTC.
pub fn parse_timestamp(timestamp_str: &str) -> Option<DateTime<Utc>> {
    let timestamp_str = timestamp_str.trim();
    if timestamp_str.is_empty() {
        return None;
    }

    // e.g. "2025-12-16T10:30:00Z" or "2025-12-16T10:30:00+00:00"
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp_str) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive_dt) = NaiveDateTime::parse_from_str(timestamp_str, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive_dt.and_utc());
    }

    // SQLite datetime, e.g. "2025-12-16 10:30:00"
    if let Ok(naive_dt) = NaiveDateTime::parse_from_str(timestamp_str, "%Y-%m-%d %H:%M:%S") {
        return Some(naive_dt.and_utc());
    }

    // Date only - midnight UTC
    if let Ok(date) = NaiveDate::parse_from_str(timestamp_str, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive_dt| naive_dt.and_utc());
    }

    None
}
