//! Patient builder.

use crate::clock::{system_clock, SharedClock};
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{age_in_years, Patient};
use crate::validation::{parse_date, validate_cpf, MIN_AGE_YEARS, MIN_NAME_LEN};

use chrono::NaiveDate;

/// Accumulates CPF, name and birth date. Fields may be set in any order
/// and overwritten.
pub struct PatientBuilder {
    clock: SharedClock,
    cpf: Option<String>,
    name: Option<String>,
    birth_date: Option<NaiveDate>,
}

impl PatientBuilder {
    pub fn new() -> Self {
        Self::with_clock(system_clock())
    }

    pub fn with_clock(clock: SharedClock) -> Self {
        Self {
            clock,
            cpf: None,
            name: None,
            birth_date: None,
        }
    }

    pub fn set_cpf(&mut self, cpf: &str) -> ScheduleResult<()> {
        if !validate_cpf(cpf) {
            return Err(ScheduleError::InvalidIdentifier);
        }
        self.cpf = Some(cpf.to_string());
        Ok(())
    }

    pub fn set_name(&mut self, name: &str) -> ScheduleResult<()> {
        if name.chars().count() < MIN_NAME_LEN {
            return Err(ScheduleError::InvalidName);
        }
        self.name = Some(name.to_string());
        Ok(())
    }

    /// Parse a `dd/MM/yyyy` birth date and require the minimum age.
    pub fn set_birth_date(&mut self, text: &str) -> ScheduleResult<()> {
        let birth = parse_date(text).ok_or(ScheduleError::InvalidBirthDate)?;
        if age_in_years(birth, self.clock.today()) < MIN_AGE_YEARS {
            return Err(ScheduleError::InsufficientAge);
        }
        self.birth_date = Some(birth);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cpf = None;
        self.name = None;
        self.birth_date = None;
    }

    /// Produce the patient and reset the builder.
    pub fn build(&mut self) -> ScheduleResult<Patient> {
        let (Some(cpf), Some(name), Some(birth_date)) = (&self.cpf, &self.name, self.birth_date)
        else {
            return Err(ScheduleError::IncompletePatient);
        };
        let patient = Patient::new(cpf.clone(), name.clone(), birth_date);
        self.clear();
        Ok(patient)
    }
}

impl Default for PatientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use std::sync::Arc;

    fn builder() -> PatientBuilder {
        let now = NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        PatientBuilder::with_clock(Arc::new(FixedClock(now)))
    }

    #[test]
    fn test_build_complete_patient() {
        let mut b = builder();
        b.set_cpf("57219947038").unwrap();
        b.set_name("Matheus").unwrap();
        b.set_birth_date("30/12/2001").unwrap();

        let patient = b.build().unwrap();
        assert_eq!(patient.cpf(), "57219947038");
        assert_eq!(patient.name, "Matheus");
        assert_eq!(patient.birth_date.to_string(), "2001-12-30");

        // Builder is reset after a successful build
        assert_eq!(b.build(), Err(ScheduleError::IncompletePatient));
    }

    #[test]
    fn test_field_errors() {
        let mut b = builder();
        assert_eq!(b.set_cpf("57219947039"), Err(ScheduleError::InvalidIdentifier));
        assert_eq!(b.set_name("Ana"), Err(ScheduleError::InvalidName));
        assert_eq!(b.set_birth_date("31/02/2001"), Err(ScheduleError::InvalidBirthDate));
        assert_eq!(b.set_birth_date("17/10/2013"), Err(ScheduleError::InsufficientAge));
        assert_eq!(b.set_birth_date("16/10/2013"), Ok(()));
    }

    #[test]
    fn test_failed_setter_keeps_previous_value() {
        let mut b = builder();
        b.set_name("Matheus").unwrap();
        assert!(b.set_name("Bob").is_err());
        b.set_cpf("57219947038").unwrap();
        b.set_birth_date("30/12/2001").unwrap();
        assert_eq!(b.build().unwrap().name, "Matheus");
    }

    #[test]
    fn test_incomplete() {
        let mut b = builder();
        b.set_cpf("57219947038").unwrap();
        b.set_name("Matheus").unwrap();
        assert_eq!(b.build(), Err(ScheduleError::IncompletePatient));
    }

    #[test]
    fn test_clear_twice_then_build_fails() {
        let mut b = builder();
        b.set_cpf("57219947038").unwrap();
        b.clear();
        b.clear();
        assert_eq!(b.build(), Err(ScheduleError::IncompletePatient));
    }
}
