//! Store construction errors.

use crate::core::UpdateError;
use thiserror::Error;

/// Errors that can occur when building a store.
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("Initial container has {} invalid field(s)", .0.len())]
    InvalidInitial(Vec<UpdateError>),
}
