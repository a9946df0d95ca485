//! Appointment builder.

use chrono::{NaiveDate, NaiveTime};

use crate::clock::{system_clock, SharedClock};
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::Appointment;
use crate::validation::{
    is_on_grid, is_open, is_valid_end, is_valid_start, parse_date, parse_time,
};

/// Accumulates patient CPF, date, start and end time.
///
/// The end time depends on the start time, which depends on the date.
/// Re-setting a field drops the fields that depend on it, since they
/// were validated against the old value.
pub struct AppointmentBuilder {
    clock: SharedClock,
    patient_cpf: Option<String>,
    date: Option<NaiveDate>,
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
}

impl AppointmentBuilder {
    pub fn new() -> Self {
        Self::with_clock(system_clock())
    }

    pub fn with_clock(clock: SharedClock) -> Self {
        Self {
            clock,
            patient_cpf: None,
            date: None,
            start_time: None,
            end_time: None,
        }
    }

    /// Stored as given; existence is checked by the controller.
    pub fn set_patient_cpf(&mut self, cpf: &str) {
        self.patient_cpf = Some(cpf.to_string());
    }

    /// Parse a `dd/MM/yyyy` date that is today or later.
    pub fn set_date(&mut self, text: &str) -> ScheduleResult<()> {
        let date = parse_date(text).ok_or(ScheduleError::InvalidDate)?;
        let now = self.clock.now();
        if date < now.date() {
            return Err(ScheduleError::PastDate);
        }
        if date == now.date() && !is_open(now.time()) {
            return Err(ScheduleError::TodayClosed);
        }
        self.date = Some(date);
        self.start_time = None;
        self.end_time = None;
        Ok(())
    }

    /// Parse an `HHmm` start time on the grid, inside business hours and
    /// not already past.
    pub fn set_start_time(&mut self, text: &str) -> ScheduleResult<()> {
        let date = self.date.ok_or(ScheduleError::MissingDate)?;
        let time = parse_slot(text)?;
        if !is_valid_start(time) {
            return Err(ScheduleError::ClosedHours);
        }
        let now = self.clock.now();
        if date == now.date() && time < now.time() {
            return Err(ScheduleError::PastTime);
        }
        self.start_time = Some(time);
        self.end_time = None;
        Ok(())
    }

    /// Parse an `HHmm` end time on the grid, no later than closing and
    /// after the start time.
    pub fn set_end_time(&mut self, text: &str) -> ScheduleResult<()> {
        self.date.ok_or(ScheduleError::MissingDate)?;
        let start = self.start_time.ok_or(ScheduleError::MissingStartTime)?;
        let time = parse_slot(text)?;
        if !is_valid_end(time) {
            return Err(ScheduleError::ClosedHours);
        }
        if time <= start {
            return Err(ScheduleError::EndBeforeOrEqualStart);
        }
        self.end_time = Some(time);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.patient_cpf = None;
        self.date = None;
        self.start_time = None;
        self.end_time = None;
    }

    /// Produce the appointment and reset the builder.
    pub fn build(&mut self) -> ScheduleResult<Appointment> {
        let (Some(patient_cpf), Some(date), Some(start_time), Some(end_time)) =
            (&self.patient_cpf, self.date, self.start_time, self.end_time)
        else {
            return Err(ScheduleError::IncompleteAppointment);
        };
        let appointment = Appointment {
            patient_cpf: patient_cpf.clone(),
            date,
            start_time,
            end_time,
        };
        self.clear();
        Ok(appointment)
    }
}

impl Default for AppointmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_slot(text: &str) -> ScheduleResult<NaiveTime> {
    let time = parse_time(text).ok_or(ScheduleError::InvalidTime)?;
    if !is_on_grid(time) {
        return Err(ScheduleError::OffGrid);
    }
    Ok(time)
}
