//! Appointment booking, cancellation and listing.

use chrono::NaiveDate;
use tracing::{debug, info};

use super::{AppointmentFilter, ConflictDetector, FutureAppointmentCheck, PatientExistenceCheck};
use crate::builders::AppointmentBuilder;
use crate::clock::SharedClock;
use crate::db::AppointmentStore;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::Appointment;
use crate::validation::{parse_date, parse_time};

/// Drives an [`AppointmentBuilder`] session and applies the schedule-wide
/// rules: the patient must exist, may hold only one future appointment,
/// and no two appointments may overlap.
pub struct SchedulingController<'a> {
    store: &'a dyn AppointmentStore,
    patients: &'a dyn PatientExistenceCheck,
    detector: ConflictDetector<'a>,
    clock: SharedClock,
    builder: AppointmentBuilder,
}

impl<'a> SchedulingController<'a> {
    pub fn new(
        store: &'a dyn AppointmentStore,
        patients: &'a dyn PatientExistenceCheck,
        clock: SharedClock,
    ) -> Self {
        Self {
            store,
            patients,
            detector: ConflictDetector::new(store, clock.clone()),
            builder: AppointmentBuilder::with_clock(clock.clone()),
            clock,
        }
    }

    pub fn detector(&self) -> &ConflictDetector<'a> {
        &self.detector
    }

    /// Accept a patient that is registered and not already booked.
    pub fn set_patient_cpf(&mut self, cpf: &str) -> ScheduleResult<()> {
        if !self.patients.patient_exists(cpf)? {
            debug!(cpf, "booking rejected: patient not registered");
            return Err(ScheduleError::PatientNotRegistered);
        }
        if self.detector.has_future_appointment(cpf)? {
            debug!(cpf, "booking rejected: patient already scheduled");
            return Err(ScheduleError::PatientAlreadyScheduled);
        }
        self.builder.set_patient_cpf(cpf);
        Ok(())
    }

    pub fn set_date(&mut self, text: &str) -> ScheduleResult<()> {
        self.builder.set_date(text)
    }

    pub fn set_start_time(&mut self, text: &str) -> ScheduleResult<()> {
        self.builder.set_start_time(text)
    }

    pub fn set_end_time(&mut self, text: &str) -> ScheduleResult<()> {
        self.builder.set_end_time(text)
    }

    pub fn clear(&mut self) {
        self.builder.clear();
    }

    /// Build the appointment, re-check it against the stored schedule and
    /// persist it.
    ///
    /// The patient check is repeated because the schedule may have changed
    /// since `set_patient_cpf`.
    pub fn commit_appointment(&mut self) -> ScheduleResult<Appointment> {
        let appointment = self.builder.build()?;

        if self.detector.has_future_appointment(&appointment.patient_cpf)? {
            debug!(cpf = %appointment.patient_cpf, "commit rejected: patient already scheduled");
            return Err(ScheduleError::PatientAlreadyScheduled);
        }
        if let Some(existing) = self.detector.find_overlap(&appointment)? {
            debug!(
                date = %appointment.date,
                start = %appointment.start_time,
                conflicting_cpf = %existing.patient_cpf,
                "commit rejected: overlapping appointment"
            );
            return Err(ScheduleError::Overlapping);
        }

        self.store.save_appointment(&appointment)?;
        info!(
            cpf = %appointment.patient_cpf,
            date = %appointment.date,
            start = %appointment.start_time,
            end = %appointment.end_time,
            "appointment booked"
        );
        Ok(appointment)
    }

    /// Cancel a future appointment identified by patient, `dd/MM/yyyy`
    /// date and `HHmm` start time.
    pub fn cancel_appointment(
        &self,
        cpf: &str,
        date_text: &str,
        start_time_text: &str,
    ) -> ScheduleResult<()> {
        if !self.patients.patient_exists(cpf)? {
            return Err(ScheduleError::PatientNotRegistered);
        }
        let date = parse_date(date_text).ok_or(ScheduleError::InvalidDate)?;
        let start_time = parse_time(start_time_text).ok_or(ScheduleError::InvalidTime)?;

        // Appointments already due cannot be cancelled.
        if date.and_time(start_time) <= self.clock.now() {
            debug!(cpf, %date, %start_time, "cancel rejected: appointment not in the future");
            return Err(ScheduleError::AppointmentNotFound);
        }
        if self.store.delete_appointment(cpf, date, start_time)? == 0 {
            return Err(ScheduleError::AppointmentNotFound);
        }
        info!(cpf, %date, %start_time, "appointment cancelled");
        Ok(())
    }

    /// Appointments ordered by date then start time.
    pub fn list_appointments(&self, filter: AppointmentFilter) -> ScheduleResult<Vec<Appointment>> {
        let appointments = match filter {
            AppointmentFilter::All => self.store.find_all_appointments()?,
            AppointmentFilter::Range { from, to } => {
                self.store.find_appointments_in_range(from, to)?
            }
        };
        Ok(appointments)
    }
}

impl FutureAppointmentCheck for SchedulingController<'_> {
    fn next_appointment(&self, cpf: &str) -> ScheduleResult<Option<Appointment>> {
        self.detector.next_appointment(cpf)
    }
}

/// Parse a `dd/MM/yyyy` date outside a builder session. With a reference
/// date, the parsed date must not precede it.
pub fn validate_date_text(text: &str, reference: Option<NaiveDate>) -> ScheduleResult<NaiveDate> {
    let date = parse_date(text).ok_or(ScheduleError::InvalidDate)?;
    match reference {
        Some(start) if date < start => Err(ScheduleError::EndBeforeStart),
        _ => Ok(date),
    }
}
