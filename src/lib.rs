//! Tally: pure curried state updates and a single-slot store
//!
//! Tally follows the "pure core, imperative shell" split. The core is made
//! of immutable containers and pure updater functions; the only mutable
//! state lives in a store, which accepts transforms and commits their
//! results one at a time.
//!
//! # Core Concepts
//!
//! - **Container**: mapping from field name to numeric value, never mutated in place
//! - **Updater**: curried function fixing a field, then an amount, then taking a container
//! - **Store**: holds one current container and exposes a single apply operation
//!
//! # Example
//!
//! ```rust
//! use tally::core::change_state;
//! use tally::store::create_store;
//!
//! let feed = change_state("soil");
//! let blue_food = feed.by(5.0);
//! let green_food = feed.by(10.0);
//!
//! let mut state_control = create_store();
//!
//! let fed_plant = state_control(&blue_food);
//! assert_eq!(fed_plant.get("soil"), Some(5.0));
//!
//! let plant_fed_again = state_control(&green_food);
//! assert_eq!(plant_fed_again.get("soil"), Some(15.0));
//! ```

pub mod core;
pub mod store;

// Re-export commonly used types
pub use core::{change_state, Container, Pipeline, Transform, UpdateError, Updater};
pub use store::{create_store, SharedStore, Store, StoreBuilder};
