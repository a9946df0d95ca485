//! Staged builders that turn raw user input into validated entities.
//!
//! Each setter validates one field and stores it on success. `build()`
//! checks completeness, produces the entity and resets the builder.

mod appointment;
mod patient;

pub use appointment::*;
pub use patient::*;
