//! Numeric state containers.
//!
//! A container maps field names to numeric values. Containers are treated
//! as immutable values: every update produces a fresh container and leaves
//! the original untouched.

use super::error::UpdateError;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Snapshot of an entity's numeric state.
///
/// Fields that are not present read as zero through [`Container::value_or_zero`],
/// but presence is always decided by key existence. A stored `0.0` is a present
/// value and is never confused with a missing one.
///
/// # Example
///
/// ```rust
/// use tally::core::Container;
///
/// let plant = Container::new().with("soil", 5.0);
///
/// assert_eq!(plant.get("soil"), Some(5.0));
/// assert_eq!(plant.get("water"), None);
/// assert_eq!(plant.value_or_zero("water"), 0.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Container {
    fields: BTreeMap<String, f64>,
}

impl Container {
    /// Create an empty container (every field implicitly zero).
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Look up a field, distinguishing "absent" from any stored value.
    pub fn get(&self, field: &str) -> Option<f64> {
        self.fields.get(field).copied()
    }

    /// Read a field, treating an absent field as zero.
    pub fn value_or_zero(&self, field: &str) -> f64 {
        self.get(field).unwrap_or(0.0)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(field, value)` pairs in field order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.fields.iter(),
        }
    }

    /// Iterate over field names in order.
    pub fn fields(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    /// Return a new container with `field` set to `value`.
    ///
    /// This is a pure function - every existing entry is copied and exactly
    /// one entry is inserted or overwritten. `self` is not modified.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::Container;
    ///
    /// let before = Container::new().with("light", 1.0);
    /// let after = before.with("light", 2.0);
    ///
    /// assert_eq!(before.get("light"), Some(1.0)); // Original unchanged
    /// assert_eq!(after.get("light"), Some(2.0));
    /// ```
    pub fn with(&self, field: impl Into<String>, value: f64) -> Self {
        let mut fields = self.fields.clone();
        fields.insert(field.into(), value);
        Self { fields }
    }

    /// Check every entry, accumulating ALL non-finite values.
    ///
    /// Returns `Validation::Success(())` when every value is finite, and
    /// `Validation::Failure` listing each offending field otherwise.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<UpdateError>> {
        let checks: Vec<Validation<(), NonEmptyVec<UpdateError>>> = self
            .iter()
            .map(|(field, value)| {
                if value.is_finite() {
                    Validation::success(())
                } else {
                    Validation::fail(UpdateError::NonFinite {
                        field: field.to_string(),
                        value,
                    })
                }
            })
            .collect();

        if checks.is_empty() {
            return Validation::success(());
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Same as [`Container::validate`], collapsed into a `Result`.
    pub fn check(&self) -> Result<(), Vec<UpdateError>> {
        match self.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
        }
    }
}

/// Iterator over the entries of a [`Container`].
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, f64>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, f64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), *v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = (&'a str, f64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Container {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>, const N: usize> From<[(K, f64); N]> for Container {
    fn from(entries: [(K, f64); N]) -> Self {
        entries.into_iter().collect()
    }
}
