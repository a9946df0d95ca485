//! SQLite schema definition.

/// Complete database schema for the scheduler.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Patients
-- ============================================================================

CREATE TABLE IF NOT EXISTS patients (
    cpf TEXT PRIMARY KEY CHECK (length(cpf) = 11),
    name TEXT NOT NULL,
    birth_date TEXT NOT NULL,                    -- YYYY-MM-DD
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_patients_name ON patients(name);

-- ============================================================================
-- Appointments
-- ============================================================================

CREATE TABLE IF NOT EXISTS appointments (
    patient_cpf TEXT NOT NULL REFERENCES patients(cpf) ON DELETE CASCADE,
    date TEXT NOT NULL,                          -- YYYY-MM-DD
    start_time TEXT NOT NULL,                    -- HH:MM:SS
    end_time TEXT NOT NULL,                      -- HH:MM:SS
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    PRIMARY KEY (patient_cpf, date, start_time),
    CHECK (start_time < end_time)
);

CREATE INDEX IF NOT EXISTS idx_appointments_date ON appointments(date, start_time);
"#;
