//! Patient registration, removal and listing.

use serde::Serialize;
use tracing::{debug, info};

use super::FutureAppointmentCheck;
use crate::builders::PatientBuilder;
use crate::clock::SharedClock;
use crate::db::PatientStore;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{Appointment, Patient, PatientOrder};

/// A patient with the data the patient report shows next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientListing {
    pub patient: Patient,
    pub age: i32,
    pub next_appointment: Option<Appointment>,
}

/// Drives a [`PatientBuilder`] session and guards removal of patients
/// with appointments still to come.
pub struct PatientController<'a> {
    store: &'a dyn PatientStore,
    schedule: &'a dyn FutureAppointmentCheck,
    clock: SharedClock,
    builder: PatientBuilder,
}

impl<'a> PatientController<'a> {
    pub fn new(
        store: &'a dyn PatientStore,
        schedule: &'a dyn FutureAppointmentCheck,
        clock: SharedClock,
    ) -> Self {
        Self {
            store,
            schedule,
            builder: PatientBuilder::with_clock(clock.clone()),
            clock,
        }
    }

    /// Accept a CPF that is valid and not yet registered.
    pub fn set_cpf(&mut self, cpf: &str) -> ScheduleResult<()> {
        if self.store.find_patient(cpf)?.is_some() {
            debug!(cpf, "registration rejected: duplicate CPF");
            return Err(ScheduleError::DuplicateIdentifier);
        }
        self.builder.set_cpf(cpf)
    }

    pub fn set_name(&mut self, name: &str) -> ScheduleResult<()> {
        self.builder.set_name(name)
    }

    pub fn set_birth_date(&mut self, text: &str) -> ScheduleResult<()> {
        self.builder.set_birth_date(text)
    }

    pub fn clear(&mut self) {
        self.builder.clear();
    }

    /// Build the patient and persist it.
    pub fn commit_patient(&mut self) -> ScheduleResult<Patient> {
        let patient = self.builder.build()?;
        if self.store.find_patient(patient.cpf())?.is_some() {
            return Err(ScheduleError::DuplicateIdentifier);
        }
        self.store.save_patient(&patient)?;
        info!(cpf = patient.cpf(), "patient registered");
        Ok(patient)
    }

    /// Delete a patient and their appointment history. Refused while the
    /// patient still has an appointment to come.
    pub fn remove_patient(&self, cpf: &str) -> ScheduleResult<()> {
        if self.store.find_patient(cpf)?.is_none() {
            return Err(ScheduleError::PatientNotRegistered);
        }
        if self.schedule.has_future_appointment(cpf)? {
            debug!(cpf, "removal rejected: patient has a future appointment");
            return Err(ScheduleError::PatientAlreadyScheduled);
        }
        self.store.delete_patient(cpf)?;
        info!(cpf, "patient removed");
        Ok(())
    }

    pub fn list_patients(&self, order: PatientOrder) -> ScheduleResult<Vec<PatientListing>> {
        let today = self.clock.today();
        self.store
            .list_patients(order)?
            .into_iter()
            .map(|patient| -> ScheduleResult<PatientListing> {
                Ok(PatientListing {
                    age: patient.age_on(today),
                    next_appointment: self.schedule.next_appointment(patient.cpf())?,
                    patient,
                })
            })
            .collect()
    }
}
