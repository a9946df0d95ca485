//! Patient models.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A registered patient.
///
/// Only produced by [`crate::builders::PatientBuilder::build`], so every
/// field has already passed validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Patient {
    /// 11-digit CPF, checksum-valid
    cpf: String,
    /// Full name
    pub name: String,
    /// Date of birth
    pub birth_date: NaiveDate,
}

impl Patient {
    pub(crate) fn new(cpf: String, name: String, birth_date: NaiveDate) -> Self {
        Self {
            cpf,
            name,
            birth_date,
        }
    }

    /// The patient's CPF. Immutable once the patient exists.
    pub fn cpf(&self) -> &str {
        &self.cpf
    }

    /// Age in whole years on `today`.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        age_in_years(self.birth_date, today)
    }
}

/// Whole years elapsed between `birth` and `today`. Negative for future births.
pub fn age_in_years(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years
}

/// Sort key for patient listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatientOrder {
    ByCpf,
    ByName,
}
