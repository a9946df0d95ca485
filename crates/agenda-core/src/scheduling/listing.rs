//! Listing filters and display rows for the appointment schedule.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Appointment;

/// Which appointments to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentFilter {
    All,
    /// Both bounds inclusive.
    Range { from: NaiveDate, to: NaiveDate },
}

/// One display row. `date_label` is `None` when the row shares its date
/// with the row above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    pub date_label: Option<NaiveDate>,
    pub appointment: Appointment,
}

/// Label an already-ordered list for grouped display.
pub fn label_rows(appointments: Vec<Appointment>) -> Vec<ScheduleRow> {
    let mut previous = None;
    appointments
        .into_iter()
        .map(|appointment| {
            let date_label = (previous != Some(appointment.date)).then_some(appointment.date);
            previous = Some(appointment.date);
            ScheduleRow {
                date_label,
                appointment,
            }
        })
        .collect()
}
