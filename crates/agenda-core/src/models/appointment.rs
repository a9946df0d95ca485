//! Appointment models.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A booked appointment.
///
/// `start_time < end_time`, both on the quarter-hour grid and within
/// business hours. The patient is referenced by CPF only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Appointment {
    /// CPF of the patient
    pub patient_cpf: String,
    /// Calendar date
    pub date: NaiveDate,
    /// Start time (inclusive)
    pub start_time: NaiveTime,
    /// End time (exclusive)
    pub end_time: NaiveTime,
}

impl Appointment {
    /// The instant the appointment begins.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    /// Length in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_and_duration() {
        let appt = Appointment {
            patient_cpf: "57219947038".into(),
            date: NaiveDate::from_ymd_opt(2030, 5, 2).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(9, 45, 0).unwrap(),
        };
        assert_eq!(appt.starts_at().to_string(), "2030-05-02 09:00:00");
        assert_eq!(appt.duration_minutes(), 45);
    }
}
