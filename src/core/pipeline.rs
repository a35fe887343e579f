//! Ordered composition of transforms.

use super::container::Container;
use super::transform::Transform;
use std::fmt;
use std::sync::Arc;

/// A sequence of transforms applied left to right.
///
/// A pipeline is itself a [`Transform`], so it can be handed to a store as a
/// single unit. An empty pipeline returns an equal copy of its input.
///
/// # Example
///
/// ```rust
/// use tally::core::{change_state, Container, Pipeline, Transform};
///
/// let daily_care = Pipeline::new()
///     .then(change_state("water").increment())
///     .then(change_state("light").by(2.0));
///
/// let plant = daily_care.transform(&Container::new());
/// assert_eq!(plant.get("water"), Some(1.0));
/// assert_eq!(plant.get("light"), Some(2.0));
/// ```
#[derive(Clone, Default)]
pub struct Pipeline {
    steps: Vec<Arc<dyn Transform + Send + Sync>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step, returning the extended pipeline.
    pub fn then<T>(mut self, step: T) -> Self
    where
        T: Transform + Send + Sync + 'static,
    {
        self.steps.push(Arc::new(step));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Transform for Pipeline {
    fn transform(&self, container: &Container) -> Container {
        self.steps
            .iter()
            .fold(container.clone(), |acc, step| step.transform(&acc))
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("steps", &self.steps.len())
            .finish()
    }
}
