//! Appointment database operations.

use chrono::{NaiveDate, NaiveTime};
use rusqlite::{params, Row};

use super::{Database, DbResult};
use crate::models::Appointment;

const COLUMNS: &str = "patient_cpf, date, start_time, end_time";

fn appointment_from_row(row: &Row<'_>) -> rusqlite::Result<Appointment> {
    Ok(Appointment {
        patient_cpf: row.get(0)?,
        date: row.get(1)?,
        start_time: row.get(2)?,
        end_time: row.get(3)?,
    })
}

impl Database {
    /// Insert a new appointment.
    pub fn insert_appointment(&self, appointment: &Appointment) -> DbResult<()> {
        self.conn.execute(
            &format!("INSERT INTO appointments ({COLUMNS}) VALUES (?1, ?2, ?3, ?4)"),
            params![
                appointment.patient_cpf,
                appointment.date,
                appointment.start_time,
                appointment.end_time,
            ],
        )?;
        Ok(())
    }

    /// All appointments of one patient, earliest first.
    pub fn list_patient_appointments(&self, cpf: &str) -> DbResult<Vec<Appointment>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COLUMNS} FROM appointments WHERE patient_cpf = ? ORDER BY date, start_time"
        ))?;
        let rows = stmt.query_map([cpf], appointment_from_row)?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// All appointments, ordered by date then start time.
    pub fn list_appointments(&self) -> DbResult<Vec<Appointment>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COLUMNS} FROM appointments ORDER BY date, start_time"
        ))?;
        let rows = stmt.query_map([], appointment_from_row)?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Appointments with `from <= date <= to`, ordered by date then start time.
    pub fn list_appointments_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DbResult<Vec<Appointment>> {
        let mut stmt = self.conn.prepare(&format!(
            r#"
            SELECT {COLUMNS} FROM appointments
            WHERE date BETWEEN ?1 AND ?2
            ORDER BY date, start_time
            "#
        ))?;
        let rows = stmt.query_map(params![from, to], appointment_from_row)?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Delete the appointment keyed by (patient, date, start time).
    /// Returns the number of rows removed.
    pub fn delete_appointment(
        &self,
        cpf: &str,
        date: NaiveDate,
        start_time: NaiveTime,
    ) -> DbResult<usize> {
        let rows_affected = self.conn.execute(
            "DELETE FROM appointments WHERE patient_cpf = ?1 AND date = ?2 AND start_time = ?3",
            params![cpf, date, start_time],
        )?;
        Ok(rows_affected)
    }
}
