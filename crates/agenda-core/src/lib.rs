//! Agenda Core Library
//!
//! Patient registration and appointment scheduling with calendar-wide
//! consistency rules.
//!
//! # Data flow
//!
//! ```text
//! raw text ─▶ Builder setters ─▶ build() ─▶ Controller checks ─▶ Database
//!             (field rules)      (complete?)  (exists, duplicate,
//!                                              overlap, one future
//!                                              appointment per patient)
//! ```
//!
//! # Scheduling rules
//!
//! - Business hours 08:00–19:00; appointments start before 19:00 and may
//!   end at exactly 19:00.
//! - Times on a 15-minute grid; no booking in the past.
//! - Same-date appointments may not overlap (half-open intervals).
//! - A patient holds at most one appointment that has not started yet.
//!
//! # Modules
//!
//! - [`validation`]: CPF checksum, date/time parsing, business hours
//! - [`builders`]: staged patient and appointment construction
//! - [`scheduling`]: conflict detection and the two controllers
//! - [`db`]: SQLite storage behind the store traits
//! - [`models`]: Domain types (Patient, Appointment)

pub mod builders;
pub mod clock;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod scheduling;
pub mod validation;

// Re-export commonly used types
pub use builders::{AppointmentBuilder, PatientBuilder};
pub use clock::{Clock, FixedClock, SharedClock, SystemClock};
pub use config::Config;
pub use db::{AppointmentStore, Database, PatientStore};
pub use error::{Outcome, ScheduleError, ScheduleResult};
pub use models::{Appointment, Patient, PatientOrder};
pub use scheduling::{
    AppointmentFilter, ConflictDetector, FutureAppointmentCheck, PatientController,
    PatientExistenceCheck, SchedulingController,
};
pub use validation::validate_cpf;
