//! Parsing of user-typed dates and times.

use chrono::{NaiveDate, NaiveTime};

/// Parse a `dd/MM/yyyy` date. Zero padding is required.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    let b = text.as_bytes();
    let shaped = b.len() == 10
        && b[2] == b'/'
        && b[5] == b'/'
        && b
            .iter()
            .enumerate()
            .all(|(i, c)| i == 2 || i == 5 || c.is_ascii_digit());
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(text, "%d/%m/%Y").ok()
}

/// Parse an `HHmm` (or `HH:mm`) time of day.
pub fn parse_time(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    let digits: String = match text.len() {
        4 => text.to_string(),
        5 if text.as_bytes()[2] == b':' => text.replacen(':', "", 1),
        _ => return None,
    };
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour = digits[..2].parse().ok()?;
    let minute = digits[2..].parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}
