//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a front-matter date string in the formats blog posts use.
///
/// Date-only values are taken at midnight. Offsets in RFC 3339 values
/// are dropped after converting to UTC so posts compare on one timeline.
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.naive_utc())
}

/// Format a date with a strftime pattern
pub fn format_date(date: &NaiveDateTime, format: &str) -> String {
    date.format(format).to_string()
}

/// Format a raw front-matter date for display, falling back to the raw text
pub fn display_date(raw: &str, format: &str) -> String {
    match parse_date(raw) {
        Some(date) => format_date(&date, format),
        None => raw.trim().to_string(),
    }
}
