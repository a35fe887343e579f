//! Macros for ergonomic container construction.

/// Build a [`Container`](crate::core::Container) from `field => value` pairs.
///
/// # Example
///
/// ```
/// use tally::container;
///
/// let plant = container! {
///     "soil" => 15.0,
///     "light" => 3.0,
/// };
///
/// assert_eq!(plant.get("soil"), Some(15.0));
/// assert_eq!(plant.len(), 2);
/// ```
#[macro_export]
macro_rules! container {
    () => {
        $crate::core::Container::new()
    };
    (
        $($field:expr => $value:expr),+ $(,)?
    ) => {
        <$crate::core::Container as ::std::iter::FromIterator<(::std::string::String, f64)>>::from_iter([
            $((::std::string::String::from($field), ($value) as f64)),+
        ])
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Container;

    #[test]
    fn container_macro_builds_entries() {
        let plant = container! {
            "soil" => 5.0,
            "water" => 2,
        };

        assert_eq!(plant.get("soil"), Some(5.0));
        assert_eq!(plant.get("water"), Some(2.0));
        assert_eq!(plant.len(), 2);
    }

    #[test]
    fn container_macro_accepts_no_entries() {
        let empty: Container = container! {};
        assert!(empty.is_empty());
    }

    #[test]
    fn later_entries_overwrite_earlier_ones() {
        let plant = container! { "soil" => 1.0, "soil" => 4.0 };
        assert_eq!(plant.get("soil"), Some(4.0));
    }
}
