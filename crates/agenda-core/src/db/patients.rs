//! Patient database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::{Patient, PatientOrder};

fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<Patient> {
    Ok(Patient::new(row.get(0)?, row.get(1)?, row.get(2)?))
}

impl Database {
    /// Insert a new patient. Fails on a duplicate CPF.
    pub fn insert_patient(&self, patient: &Patient) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO patients (cpf, name, birth_date)
            VALUES (?1, ?2, ?3)
            "#,
            params![patient.cpf(), patient.name, patient.birth_date],
        )?;
        Ok(())
    }

    /// Get a patient by CPF.
    pub fn get_patient(&self, cpf: &str) -> DbResult<Option<Patient>> {
        self.conn
            .query_row(
                r#"
                SELECT cpf, name, birth_date
                FROM patients
                WHERE cpf = ?
                "#,
                [cpf],
                patient_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all patients in the given order.
    pub fn list_patients(&self, order: PatientOrder) -> DbResult<Vec<Patient>> {
        let sql = match order {
            PatientOrder::ByCpf => "SELECT cpf, name, birth_date FROM patients ORDER BY cpf",
            PatientOrder::ByName => {
                "SELECT cpf, name, birth_date FROM patients ORDER BY name, cpf"
            }
        };
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map([], patient_from_row)?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Delete a patient. Their appointments go with them.
    pub fn delete_patient(&self, cpf: &str) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM patients WHERE cpf = ?", [cpf])?;
        Ok(rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn setup_db() -> Database {
        Database::open_in_memory().unwrap()
    }

    fn patient(cpf: &str, name: &str) -> Patient {
        Patient::new(
            cpf.into(),
            name.into(),
            NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
        )
    }

    #[test]
    fn test_insert_and_get() {
        let db = setup_db();
        let p = patient("57219947038", "Matheus");
        db.insert_patient(&p).unwrap();

        let retrieved = db.get_patient("57219947038").unwrap().unwrap();
        assert_eq!(retrieved, p);
        assert!(db.get_patient("52998224725").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_cpf_rejected() {
        let db = setup_db();
        db.insert_patient(&patient("57219947038", "Matheus")).unwrap();
        assert!(db.insert_patient(&patient("57219947038", "Mariana")).is_err());
    }

    #[test]
    fn test_list_orders() {
        let db = setup_db();
        db.insert_patient(&patient("57219947038", "Alberto")).unwrap();
        db.insert_patient(&patient("11144477735", "Zuleica")).unwrap();
        db.insert_patient(&patient("52998224725", "Bernardo")).unwrap();

        let by_cpf: Vec<_> = db
            .list_patients(PatientOrder::ByCpf)
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(by_cpf, vec!["Zuleica", "Bernardo", "Alberto"]);

        let by_name: Vec<_> = db
            .list_patients(PatientOrder::ByName)
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(by_name, vec!["Alberto", "Bernardo", "Zuleica"]);
    }

    #[test]
    fn test_delete_patient() {
        let db = setup_db();
        db.insert_patient(&patient("57219947038", "Matheus")).unwrap();
        assert!(db.delete_patient("57219947038").unwrap());
        assert!(!db.delete_patient("57219947038").unwrap());
    }
}
