//! Errors raised by the checked update APIs.

use thiserror::Error;

/// Errors that can occur when building or applying an updater.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UpdateError {
    #[error("Field name must not be empty")]
    EmptyField,

    #[error("Field '{field}' holds a non-finite value ({value})")]
    NonFinite { field: String, value: f64 },
}
