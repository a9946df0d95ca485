//! Field-level validation: CPF checksum, text parsing, business hours.

mod cpf;
mod hours;
mod parse;

pub use cpf::*;
pub use hours::*;
pub use parse::*;

/// Minimum accepted patient name length.
pub const MIN_NAME_LEN: usize = 5;

/// Minimum patient age, in whole years, at registration.
pub const MIN_AGE_YEARS: i32 = 13;
