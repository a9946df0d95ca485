//! Domain models for the scheduling system.

mod appointment;
mod patient;

pub use appointment::*;
pub use patient::*;
