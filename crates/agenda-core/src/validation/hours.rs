//! Business hours and the quarter-hour grid.

use chrono::{NaiveTime, Timelike};

/// First hour appointments may start.
pub const OPENING_HOUR: u32 = 8;

/// Closing hour. Appointments may end at exactly this hour but never start at it.
pub const CLOSING_HOUR: u32 = 19;

/// Appointment times must fall on multiples of this many minutes.
pub const SLOT_MINUTES: u32 = 15;

/// Generic open check: `OPENING_HOUR <= hour <= CLOSING_HOUR`.
///
/// Inclusive of the closing hour; the start and end checks below narrow it.
pub fn is_open(time: NaiveTime) -> bool {
    (OPENING_HOUR..=CLOSING_HOUR).contains(&time.hour())
}

pub fn is_on_grid(time: NaiveTime) -> bool {
    time.minute() % SLOT_MINUTES == 0 && time.second() == 0
}

/// An appointment may start at this time: open and before the closing hour.
pub fn is_valid_start(time: NaiveTime) -> bool {
    is_open(time) && time.hour() < CLOSING_HOUR
}

/// An appointment may end at this time: open and no later than the closing hour.
pub fn is_valid_end(time: NaiveTime) -> bool {
    is_open(time) && (time.hour() < CLOSING_HOUR || time.minute() == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_is_open_inclusive_of_closing_hour() {
        assert!(!is_open(t(7, 45)));
        assert!(is_open(t(8, 0)));
        assert!(is_open(t(19, 30)));
        assert!(!is_open(t(20, 0)));
    }

    #[test]
    fn test_grid() {
        assert!(is_on_grid(t(9, 0)));
        assert!(is_on_grid(t(9, 45)));
        assert!(!is_on_grid(t(9, 5)));
    }

    #[test]
    fn test_closing_hour_asymmetry() {
        assert!(is_valid_start(t(18, 45)));
        assert!(!is_valid_start(t(19, 0)));
        assert!(is_valid_end(t(19, 0)));
        assert!(!is_valid_end(t(19, 15)));
    }
}
