//! Store handle for callers on several threads.

use crate::core::{Container, Transform};
use crate::store::local::Store;
use crate::store::metadata::StoreMetadata;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle to one shared store slot.
///
/// `apply` holds the lock for the whole read-transform-replace sequence, so
/// concurrent applies never interleave or lose updates. Clones share the
/// same slot; [`SharedStore::new`] creates an independent one.
///
/// # Example
///
/// ```rust
/// use tally::core::change_state;
/// use tally::store::SharedStore;
/// use std::thread;
///
/// let store = SharedStore::new();
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let store = store.clone();
///         thread::spawn(move || {
///             store.apply(&change_state("water").increment());
///         })
///     })
///     .collect();
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(store.current().get("water"), Some(4.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<Store>>,
}

impl SharedStore {
    pub fn new() -> Self {
        Self::from_store(Store::new())
    }

    pub(crate) fn from_store(store: Store) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Snapshot of the current container.
    pub fn current(&self) -> Container {
        self.inner.lock().current().clone()
    }

    /// Snapshot of the store metadata.
    pub fn metadata(&self) -> StoreMetadata {
        self.inner.lock().metadata().clone()
    }

    /// Apply `transform` atomically and return the committed container.
    pub fn apply<T>(&self, transform: &T) -> Container
    where
        T: Transform + ?Sized,
    {
        self.inner.lock().apply(transform)
    }

    /// Apply a fallible transform atomically. On `Err` nothing is committed.
    pub fn try_apply<F, E>(&self, transform: F) -> Result<Container, E>
    where
        F: FnOnce(&Container) -> Result<Container, E>,
    {
        self.inner.lock().try_apply(transform)
    }
}
