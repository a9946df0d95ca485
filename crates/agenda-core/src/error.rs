//! Domain error kinds.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::DbError;

/// Every failure a builder or controller can report.
///
/// The set is closed: callers match on it to pick a message, and the
/// serialized form is the bare variant name.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleError {
    // Field validation
    #[error("Invalid CPF")]
    InvalidIdentifier,

    #[error("Name must have at least 5 characters")]
    InvalidName,

    #[error("Invalid birth date")]
    InvalidBirthDate,

    #[error("Patient must be at least 13 years old")]
    InsufficientAge,

    #[error("Invalid date")]
    InvalidDate,

    #[error("Date is in the past")]
    PastDate,

    #[error("Office is closed for the rest of today")]
    TodayClosed,

    #[error("Date must be set first")]
    MissingDate,

    #[error("Start time must be set first")]
    MissingStartTime,

    #[error("Invalid time")]
    InvalidTime,

    #[error("Time must be a multiple of 15 minutes")]
    OffGrid,

    #[error("Time is outside business hours")]
    ClosedHours,

    #[error("Time is in the past")]
    PastTime,

    #[error("End time must be after start time")]
    EndBeforeOrEqualStart,

    #[error("End date must not precede start date")]
    EndBeforeStart,

    // Entity level
    #[error("Patient data is incomplete")]
    IncompletePatient,

    #[error("Appointment data is incomplete")]
    IncompleteAppointment,

    // Cross-entity / storage
    #[error("CPF already registered")]
    DuplicateIdentifier,

    #[error("Patient not registered")]
    PatientNotRegistered,

    #[error("Patient already has a future appointment")]
    PatientAlreadyScheduled,

    #[error("Appointment overlaps an existing one")]
    Overlapping,

    #[error("Appointment not found")]
    AppointmentNotFound,

    #[error("Storage failure")]
    StorageFailure,
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;

impl From<DbError> for ScheduleError {
    fn from(e: DbError) -> Self {
        tracing::warn!(error = %e, "storage call failed");
        ScheduleError::StorageFailure
    }
}

/// Tagged result handed to the console layer.
///
/// Serializes as `{"success":true,"value":...}` or
/// `{"success":false,"error":"Kind"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ScheduleError>,
}

impl<T> From<ScheduleResult<T>> for Outcome<T> {
    fn from(result: ScheduleResult<T>) -> Self {
        match result {
            Ok(value) => Self {
                success: true,
                value: Some(value),
                error: None,
            },
            Err(error) => Self {
                success: false,
                value: None,
                error: Some(error),
            },
        }
    }
}

impl<T: Serialize> Outcome<T> {
    /// Render as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
