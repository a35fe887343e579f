//! Core container and updater types.
//!
//! This module contains the pure functional core:
//! - Immutable numeric containers
//! - Curried field updaters
//! - The `Transform` seam and transform pipelines
//!
//! Nothing in this module holds mutable state. Stores live in
//! [`crate::store`].

mod container;
mod error;
mod macros;
mod pipeline;
mod transform;
mod updater;

pub use container::{Container, Iter};
pub use error::UpdateError;
pub use pipeline::Pipeline;
pub use transform::{identity, Transform};
pub use updater::{change_state, change_state_by, FieldUpdater, Updater};
