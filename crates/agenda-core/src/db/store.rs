//! Storage traits consumed by the scheduling controllers.

use chrono::{NaiveDate, NaiveTime};

use super::{Database, DbResult};
use crate::models::{Appointment, Patient, PatientOrder};

/// Patient persistence.
pub trait PatientStore {
    fn find_patient(&self, cpf: &str) -> DbResult<Option<Patient>>;
    fn save_patient(&self, patient: &Patient) -> DbResult<()>;
    fn delete_patient(&self, cpf: &str) -> DbResult<bool>;
    fn list_patients(&self, order: PatientOrder) -> DbResult<Vec<Patient>>;
}

/// Appointment persistence. Lists come back ordered by date, then start time.
pub trait AppointmentStore {
    fn find_appointments(&self, cpf: &str) -> DbResult<Vec<Appointment>>;
    fn find_all_appointments(&self) -> DbResult<Vec<Appointment>>;
    fn find_appointments_in_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DbResult<Vec<Appointment>>;
    fn save_appointment(&self, appointment: &Appointment) -> DbResult<()>;
    fn delete_appointment(
        &self,
        cpf: &str,
        date: NaiveDate,
        start_time: NaiveTime,
    ) -> DbResult<usize>;
}

impl PatientStore for Database {
    fn find_patient(&self, cpf: &str) -> DbResult<Option<Patient>> {
        self.get_patient(cpf)
    }

    fn save_patient(&self, patient: &Patient) -> DbResult<()> {
        self.insert_patient(patient)
    }

    fn delete_patient(&self, cpf: &str) -> DbResult<bool> {
        Database::delete_patient(self, cpf)
    }

    fn list_patients(&self, order: PatientOrder) -> DbResult<Vec<Patient>> {
        Database::list_patients(self, order)
    }
}

impl AppointmentStore for Database {
    fn find_appointments(&self, cpf: &str) -> DbResult<Vec<Appointment>> {
        self.list_patient_appointments(cpf)
    }

    fn find_all_appointments(&self) -> DbResult<Vec<Appointment>> {
        self.list_appointments()
    }

    fn find_appointments_in_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DbResult<Vec<Appointment>> {
        self.list_appointments_between(from, to)
    }

    fn save_appointment(&self, appointment: &Appointment) -> DbResult<()> {
        self.insert_appointment(appointment)
    }

    fn delete_appointment(
        &self,
        cpf: &str,
        date: NaiveDate,
        start_time: NaiveTime,
    ) -> DbResult<usize> {
        Database::delete_appointment(self, cpf, date, start_time)
    }
}
