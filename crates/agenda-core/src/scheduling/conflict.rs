//! Overlap and "is this past?" reasoning.

use chrono::NaiveDateTime;

use super::FutureAppointmentCheck;
use crate::clock::SharedClock;
use crate::db::AppointmentStore;
use crate::error::ScheduleResult;
use crate::models::Appointment;

/// True when both appointments fall on the same date and their half-open
/// `[start, end)` intervals intersect.
pub fn overlaps(a: &Appointment, b: &Appointment) -> bool {
    if a.date != b.date {
        return false;
    }
    !(a.start_time >= b.end_time || a.end_time <= b.start_time)
}

/// True when the appointment's date+start instant is at or before `now`.
pub fn is_past_at(appointment: &Appointment, now: NaiveDateTime) -> bool {
    appointment.starts_at() <= now
}

/// Checks candidates against the stored schedule.
#[derive(Clone)]
pub struct ConflictDetector<'a> {
    store: &'a dyn AppointmentStore,
    clock: SharedClock,
}

impl<'a> ConflictDetector<'a> {
    pub fn new(store: &'a dyn AppointmentStore, clock: SharedClock) -> Self {
        Self { store, clock }
    }

    pub fn is_past(&self, appointment: &Appointment) -> bool {
        is_past_at(appointment, self.clock.now())
    }

    /// First stored appointment that overlaps `candidate`, if any.
    pub fn find_overlap(&self, candidate: &Appointment) -> ScheduleResult<Option<Appointment>> {
        Ok(self
            .store
            .find_all_appointments()?
            .into_iter()
            .find(|existing| overlaps(candidate, existing)))
    }
}

impl FutureAppointmentCheck for ConflictDetector<'_> {
    fn next_appointment(&self, cpf: &str) -> ScheduleResult<Option<Appointment>> {
        let now = self.clock.now();
        Ok(self
            .store
            .find_appointments(cpf)?
            .into_iter()
            .filter(|a| !is_past_at(a, now))
            .min_by_key(Appointment::starts_at))
    }
}
