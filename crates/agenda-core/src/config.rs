//! Process configuration read from the environment.

use std::env;
use std::path::PathBuf;

use crate::db::{Database, DbResult};

pub const APP_NAME: &str = "agenda";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable naming the SQLite file.
pub const DATABASE_PATH_VAR: &str = "AGENDA_DATABASE_PATH";

/// Environment variable holding the fallback log filter.
pub const LOG_FILTER_VAR: &str = "AGENDA_LOG";

const DEFAULT_DATABASE_PATH: &str = "agenda.db";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_path: PathBuf,
    /// Used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Read the configuration, falling back to defaults for unset or empty
    /// variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            database_path: get(DATABASE_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            log_filter: get(LOG_FILTER_VAR).unwrap_or(defaults.log_filter),
        }
    }

    pub fn open_database(&self) -> DbResult<Database> {
        Database::open(&self.database_path)
    }
}
