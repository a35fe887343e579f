//! The transform seam between updaters and stores.

use super::container::Container;

/// A pure function from one container to the next.
///
/// Anything a store can apply is a `Transform`. Closures of the form
/// `Fn(&Container) -> Container` implement it automatically, as do
/// [`Updater`](super::Updater) and [`Pipeline`](super::Pipeline).
///
/// Implementations must be pure: the input is borrowed immutably and the
/// result is a fresh container.
pub trait Transform {
    fn transform(&self, container: &Container) -> Container;
}

impl<F> Transform for F
where
    F: Fn(&Container) -> Container,
{
    fn transform(&self, container: &Container) -> Container {
        self(container)
    }
}

/// Transform that returns an equal copy of its input.
///
/// Applying it to a store reads the current state without changing it.
pub fn identity() -> impl Transform + Clone + Send + Sync {
    |container: &Container| container.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_transforms() {
        let double_soil =
            |c: &Container| c.with("soil", c.value_or_zero("soil") * 2.0);
        let container = Container::from([("soil", 4.0)]);

        assert_eq!(double_soil.transform(&container).get("soil"), Some(8.0));
    }

    #[test]
    fn identity_returns_equal_copy() {
        let container = Container::from([("soil", 4.0), ("light", 1.0)]);
        let result = identity().transform(&container);

        assert_eq!(result, container);
    }
}
