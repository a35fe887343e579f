//! Stateful shell around the pure core.
//!
//! A store owns one current [`Container`](crate::core::Container) and
//! exposes a single apply operation that threads it through a transform
//! and commits the result.
//!
//! - [`Store`] / [`create_store`]: single owner, no locking
//! - [`SharedStore`]: cloneable handle, apply runs under a mutex
//! - [`StoreBuilder`]: starting container, label and validation

pub mod builder;
pub mod error;
mod local;
pub mod metadata;
mod shared;

pub use builder::StoreBuilder;
pub use error::StoreError;
pub use local::{create_store, Store};
pub use metadata::StoreMetadata;
pub use shared::SharedStore;
