//! Date handling for values coming from the server.
//!
//! The server may encode dates as ISO dates, RFC 3339 timestamps, naive
//! timestamps or HTTP dates (`Mon, 15 Jan 1990 00:00:00 GMT`). Stored values
//! are never rewritten: these helpers only produce text for display or for a
//! date input.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use chrono_tz::Tz;

enum Parsed {
    Instant(DateTime<FixedOffset>),
    Local(NaiveDateTime),
    Date(NaiveDate),
}

fn parse(raw: &str) -> Option<Parsed> {
    let raw = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(Parsed::Instant(instant));
    }
    if let Ok(instant) = DateTime::parse_from_rfc2822(raw) {
        return Some(Parsed::Instant(instant));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(local) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Parsed::Local(local));
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(Parsed::Date)
}

/// Value for a date input (`YYYY-MM-DD`).
pub fn input_date(raw: &str) -> String {
    let date = match parse(raw) {
        Some(Parsed::Instant(instant)) => instant.date_naive(),
        Some(Parsed::Local(local)) => local.date(),
        Some(Parsed::Date(date)) => date,
        None => return raw.split('T').next().unwrap_or_default().to_string(),
    };
    date.format("%Y-%m-%d").to_string()
}

/// Localized calendar date (`dd/mm/yyyy`) in `tz`. Unparseable input is
/// shown as received.
pub fn display_date(raw: &str, tz: Tz) -> String {
    let date = match parse(raw) {
        // DATE columns arrive as midnight GMT and must not shift a day.
        Some(Parsed::Instant(instant))
            if instant.offset().local_minus_utc() == 0 && is_midnight(instant.time()) =>
        {
            instant.date_naive()
        }
        Some(Parsed::Instant(instant)) => instant.with_timezone(&tz).date_naive(),
        Some(Parsed::Local(local)) => local.date(),
        Some(Parsed::Date(date)) => date,
        None => return raw.to_string(),
    };
    date.format("%d/%m/%Y").to_string()
}

fn is_midnight(time: NaiveTime) -> bool {
    time.num_seconds_from_midnight() == 0 && time.nanosecond() == 0
}
