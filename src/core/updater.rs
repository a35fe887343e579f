//! Curried field updaters.
//!
//! An updater is built in three stages, each taking one argument:
//!
//! 1. [`change_state`] fixes the field name and yields a [`FieldUpdater`].
//! 2. [`FieldUpdater::by`] fixes the increment and yields an [`Updater`].
//! 3. [`Updater::apply`] takes a container and yields the updated container.
//!
//! Each stage is an immutable value, so a partially specialized updater can
//! be stored and reused as a factory for more specific ones.

use super::container::Container;
use super::error::UpdateError;
use super::transform::Transform;

/// First stage: fix the field to update.
///
/// # Example
///
/// ```rust
/// use tally::core::{change_state, Container};
///
/// let feed = change_state("soil");
/// let blue_food = feed.by(5.0);
/// let green_food = feed.by(10.0);
///
/// let plant = Container::new();
/// let plant = blue_food.apply(&plant);
/// let plant = green_food.apply(&plant);
///
/// assert_eq!(plant.get("soil"), Some(15.0));
/// ```
pub fn change_state(field: impl Into<String>) -> FieldUpdater {
    FieldUpdater {
        field: field.into(),
    }
}

/// Uncurried form: add `amount` to `field` in one call.
///
/// Equivalent to `change_state(field).by(amount).apply(container)`.
pub fn change_state_by(container: &Container, field: &str, amount: f64) -> Container {
    container.with(field, container.value_or_zero(field) + amount)
}

/// An updater with its field fixed and its amount still open.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldUpdater {
    field: String,
}

impl FieldUpdater {
    /// Fix the field, rejecting an empty name.
    pub fn try_new(field: impl Into<String>) -> Result<Self, UpdateError> {
        let field = field.into();
        if field.is_empty() {
            return Err(UpdateError::EmptyField);
        }
        Ok(Self { field })
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Second stage: fix the amount added on every application.
    ///
    /// `amount` may be negative, zero or fractional.
    pub fn by(&self, amount: f64) -> Updater {
        Updater {
            field: self.field.clone(),
            amount,
        }
    }

    /// Shorthand for `by(1.0)`.
    pub fn increment(&self) -> Updater {
        self.by(1.0)
    }

    /// Closure form of the second stage.
    pub fn into_fn(self) -> impl Fn(f64) -> Updater + Clone + Send + Sync {
        move |amount| self.by(amount)
    }
}

/// A fully specialized updater: adds a fixed amount to a fixed field.
///
/// Updaters are stateless. Applying one to many containers gives
/// independent results.
#[derive(Clone, Debug, PartialEq)]
pub struct Updater {
    field: String,
    amount: f64,
}

impl Updater {
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Third stage: produce the updated container.
    ///
    /// The result equals `container` except for the updater's field, which
    /// becomes its previous value (zero if absent) plus the amount. The
    /// input is not modified.
    pub fn apply(&self, container: &Container) -> Container {
        change_state_by(container, &self.field, self.amount)
    }

    /// Like [`Updater::apply`], but refuses to produce a non-finite value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::{change_state, Container, UpdateError};
    ///
    /// let overflow = change_state("soil").by(f64::MAX);
    /// let plant = Container::from([("soil", f64::MAX)]);
    ///
    /// assert!(matches!(
    ///     overflow.checked_apply(&plant),
    ///     Err(UpdateError::NonFinite { .. })
    /// ));
    /// ```
    pub fn checked_apply(&self, container: &Container) -> Result<Container, UpdateError> {
        let value = container.value_or_zero(&self.field) + self.amount;
        if !value.is_finite() {
            return Err(UpdateError::NonFinite {
                field: self.field.clone(),
                value,
            });
        }
        Ok(container.with(self.field.as_str(), value))
    }

    /// Closure form of the third stage.
    pub fn into_fn(self) -> impl Fn(&Container) -> Container + Clone + Send + Sync {
        move |container: &Container| self.apply(container)
    }
}

impl Transform for Updater {
    fn transform(&self, container: &Container) -> Container {
        self.apply(container)
    }
}
