//! Property-based tests for updaters and stores.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use tally::core::{change_state, Container, Pipeline, Transform};
use tally::store::{Store, StoreBuilder};

const FIELDS: [&str; 4] = ["soil", "water", "light", "warmth"];

prop_compose! {
    fn arbitrary_field()(index in 0..FIELDS.len()) -> &'static str {
        FIELDS[index]
    }
}

prop_compose! {
    fn arbitrary_amount()(amount in -1_000.0f64..1_000.0) -> f64 {
        amount
    }
}

prop_compose! {
    fn arbitrary_container()(
        entries in prop::collection::vec((arbitrary_field(), arbitrary_amount()), 0..4)
    ) -> Container {
        entries.into_iter().collect()
    }
}

proptest! {
    #[test]
    fn zero_increment_keeps_value(container in arbitrary_container(), field in arbitrary_field()) {
        let result = change_state(field).by(0.0).apply(&container);
        prop_assert_eq!(result.value_or_zero(field), container.value_or_zero(field));
    }

    #[test]
    fn absent_field_becomes_amount(container in arbitrary_container(), amount in arbitrary_amount()) {
        let result = change_state("absent").by(amount).apply(&container);
        prop_assert_eq!(result.get("absent"), Some(amount));
    }

    #[test]
    fn other_fields_are_unchanged(
        container in arbitrary_container(),
        field in arbitrary_field(),
        amount in arbitrary_amount(),
    ) {
        let result = change_state(field).by(amount).apply(&container);

        for (other, value) in &container {
            if other != field {
                prop_assert_eq!(result.get(other), Some(value));
            }
        }
        for other in result.fields() {
            prop_assert!(other == field || container.contains(other));
        }
    }

    #[test]
    fn apply_is_pure(
        container in arbitrary_container(),
        field in arbitrary_field(),
        amount in arbitrary_amount(),
    ) {
        let snapshot = container.clone();
        let updater = change_state(field).by(amount);

        let first = updater.apply(&container);
        let second = updater.apply(&container);

        // Original container unchanged
        prop_assert_eq!(&container, &snapshot);
        // Same input, same output
        prop_assert_eq!(first, second);
    }

    #[test]
    fn distinct_fields_commute(container in arbitrary_container(), a in arbitrary_amount(), b in arbitrary_amount()) {
        let x = change_state("x").by(a);
        let y = change_state("y").by(b);

        prop_assert_eq!(x.apply(&y.apply(&container)), y.apply(&x.apply(&container)));
    }

    #[test]
    fn store_accumulates_increments(amounts in prop::collection::vec(-100i32..100, 1..20)) {
        let mut store = Store::new();
        let mut expected = 0.0;

        for amount in &amounts {
            expected += f64::from(*amount);
            let result = store.apply(&change_state("soil").by(f64::from(*amount)));
            prop_assert_eq!(result.get("soil"), Some(expected));
            prop_assert_eq!(store.current(), &result);
        }

        prop_assert_eq!(store.metadata().revision, amounts.len() as u64);
    }

    #[test]
    fn stores_do_not_share_state(amount in arbitrary_amount()) {
        let mut a = Store::new();
        let b = Store::new();

        a.apply(&change_state("soil").by(amount));
        prop_assert!(b.current().is_empty());
    }

    #[test]
    fn pipeline_matches_sequential_applies(
        initial in arbitrary_container(),
        steps in prop::collection::vec((arbitrary_field(), arbitrary_amount()), 0..6),
    ) {
        let mut store = StoreBuilder::new().initial(initial.clone()).build().unwrap();
        let mut pipeline = Pipeline::new();

        for (field, amount) in &steps {
            let updater = change_state(*field).by(*amount);
            store.apply(&updater);
            pipeline = pipeline.then(updater);
        }

        prop_assert_eq!(&pipeline.transform(&initial), store.current());
    }
}
