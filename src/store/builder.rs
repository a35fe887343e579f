//! Builder for configuring stores.

use crate::core::Container;
use crate::store::error::StoreError;
use crate::store::local::Store;
use crate::store::shared::SharedStore;

/// Builder for constructing stores with a fluent API.
///
/// Without any configuration it builds the same empty store as
/// [`Store::new`].
///
/// # Example
///
/// ```rust
/// use tally::container;
/// use tally::store::StoreBuilder;
///
/// let store = StoreBuilder::new()
///     .initial(container! { "soil" => 2.0 })
///     .label("fern")
///     .build()
///     .unwrap();
///
/// assert_eq!(store.current().get("soil"), Some(2.0));
/// assert_eq!(store.metadata().label.as_deref(), Some("fern"));
/// ```
#[derive(Debug)]
pub struct StoreBuilder {
    initial: Option<Container>,
    label: Option<String>,
    validate_initial: bool,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self {
            initial: None,
            label: None,
            validate_initial: true,
        }
    }

    /// Set the starting container (defaults to empty).
    pub fn initial(mut self, container: Container) -> Self {
        self.initial = Some(container);
        self
    }

    /// Name the store in log events.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Reject a starting container with non-finite values (default: on).
    pub fn validate_initial(mut self, enabled: bool) -> Self {
        self.validate_initial = enabled;
        self
    }

    /// Build a single-owner store.
    /// Returns an error if the initial container fails validation.
    pub fn build(self) -> Result<Store, StoreError> {
        let initial = self.initial.unwrap_or_default();

        if self.validate_initial {
            initial.check().map_err(StoreError::InvalidInitial)?;
        }

        Ok(Store::with_parts(initial, self.label))
    }

    /// Build a store handle that can be shared across threads.
    pub fn build_shared(self) -> Result<SharedStore, StoreError> {
        self.build().map(SharedStore::from_store)
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
