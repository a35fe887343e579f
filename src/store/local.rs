//! Single-slot state store for one owner.

use crate::core::{Container, Transform};
use crate::store::builder::StoreBuilder;
use crate::store::metadata::StoreMetadata;
use tracing::{debug, warn};

/// Holds exactly one current container and replaces it through `apply`.
///
/// The current value is always the result of the most recent successful
/// apply, or the empty container if nothing has been applied yet.
///
/// # Example
///
/// ```rust
/// use tally::core::change_state;
/// use tally::store::Store;
///
/// let mut store = Store::new();
///
/// let fed = store.apply(&change_state("soil").by(5.0));
/// assert_eq!(fed.get("soil"), Some(5.0));
///
/// let fed_again = store.apply(&change_state("soil").by(10.0));
/// assert_eq!(fed_again.get("soil"), Some(15.0));
/// ```
#[derive(Debug, Default)]
pub struct Store {
    current: Container,
    metadata: StoreMetadata,
}

impl Store {
    /// Create a store holding the empty container.
    pub fn new() -> Self {
        Self::with_parts(Container::new(), None)
    }

    /// Start configuring a store.
    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    pub(crate) fn with_parts(initial: Container, label: Option<String>) -> Self {
        Self {
            current: initial,
            metadata: StoreMetadata::new(label),
        }
    }

    /// Get the current container (pure)
    pub fn current(&self) -> &Container {
        &self.current
    }

    /// Get store metadata (pure)
    pub fn metadata(&self) -> &StoreMetadata {
        &self.metadata
    }

    /// Thread the current container through `transform` and commit the result.
    ///
    /// Returns the new container. The store keeps its own copy, so changes
    /// made to the returned value never reach the store.
    pub fn apply<T>(&mut self, transform: &T) -> Container
    where
        T: Transform + ?Sized,
    {
        let next = transform.transform(&self.current);
        self.commit(next)
    }

    /// Apply a fallible transform.
    ///
    /// On `Err` nothing is committed and the error is returned unchanged.
    pub fn try_apply<F, E>(&mut self, transform: F) -> Result<Container, E>
    where
        F: FnOnce(&Container) -> Result<Container, E>,
    {
        match transform(&self.current) {
            Ok(next) => Ok(self.commit(next)),
            Err(err) => {
                warn!(
                    store_id = %self.metadata.id,
                    label = ?self.metadata.label,
                    revision = self.metadata.revision,
                    "Transform failed, current state kept"
                );
                Err(err)
            }
        }
    }

    /// Turn the store into its apply function.
    ///
    /// The returned closure owns the store; calling it is the only way to
    /// reach the container from then on.
    pub fn into_fn(mut self) -> impl FnMut(&dyn Transform) -> Container {
        move |transform: &dyn Transform| self.apply(transform)
    }

    fn commit(&mut self, next: Container) -> Container {
        self.current = next.clone();
        self.metadata.record_commit();
        debug!(
            store_id = %self.metadata.id,
            label = ?self.metadata.label,
            revision = self.metadata.revision,
            fields = next.len(),
            "Committed new state"
        );
        next
    }
}

/// Create a fresh store and return its apply function.
///
/// Every call yields an independent store over a private, empty container.
///
/// # Example
///
/// ```rust
/// use tally::core::change_state;
/// use tally::store::create_store;
///
/// let mut state_control = create_store();
///
/// state_control(&change_state("soil").by(5.0));
/// let plant = state_control(&change_state("light").by(3.0));
///
/// assert_eq!(plant.get("soil"), Some(5.0));
/// assert_eq!(plant.get("light"), Some(3.0));
/// ```
pub fn create_store() -> impl FnMut(&dyn Transform) -> Container {
    Store::new().into_fn()
}
