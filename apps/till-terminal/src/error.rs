//! # Terminal Error Type
//!
//! Errors that stop the terminal from starting or from talking to the
//! cashier. Mistyped commands and unknown products are not errors here: the
//! session answers them with a message and keeps going.
//!
//! ```text
//! env var ──► ConfigError ─┐
//! catalog ──► CoreError ───┼──► AppError ──► main prints it, exit code 1
//! stdin   ──► io::Error ───┘
//! ```

use std::path::PathBuf;

use thiserror::Error;
use till_core::CoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Could not read catalog {path}: {source}")]
    CatalogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A `TILL_*` variable is present but unusable.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{key}={value:?}: {reason}")]
pub struct ConfigError {
    pub key: String,
    pub value: String,
    pub reason: String,
}

impl ConfigError {
    pub fn new(key: &str, value: &str, reason: impl Into<String>) -> Self {
        ConfigError {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = AppError::from(ConfigError::new("TILL_TAX_RATE", "abc", "not a number"));
        assert_eq!(
            err.to_string(),
            "Configuration error: TILL_TAX_RATE=\"abc\": not a number"
        );
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err = AppError::from(CoreError::DuplicateProduct("p-1".to_string()));
        assert_eq!(err.to_string(), "Duplicate product id in catalog: p-1");
    }
}
