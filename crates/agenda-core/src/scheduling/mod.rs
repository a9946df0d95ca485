//! Cross-entity scheduling rules.
//!
//! The two controllers never reference each other. The appointment side
//! asks "does this patient exist?" through [`PatientExistenceCheck`], and
//! the patient side asks "is this patient booked?" through
//! [`FutureAppointmentCheck`].

mod conflict;
mod controller;
mod listing;
mod patients;

pub use conflict::*;
pub use controller::*;
pub use listing::*;
pub use patients::*;

use crate::db::PatientStore;
use crate::error::ScheduleResult;
use crate::models::Appointment;

/// Read-only view: is a patient registered?
pub trait PatientExistenceCheck {
    fn patient_exists(&self, cpf: &str) -> ScheduleResult<bool>;
}

impl<T: PatientStore + ?Sized> PatientExistenceCheck for T {
    fn patient_exists(&self, cpf: &str) -> ScheduleResult<bool> {
        Ok(self.find_patient(cpf)?.is_some())
    }
}

/// Read-only view: does a patient have an appointment still to come?
pub trait FutureAppointmentCheck {
    /// The patient's earliest appointment that has not started yet.
    fn next_appointment(&self, cpf: &str) -> ScheduleResult<Option<Appointment>>;

    fn has_future_appointment(&self, cpf: &str) -> ScheduleResult<bool> {
        Ok(self.next_appointment(cpf)?.is_some())
    }
}
