//! Plant Care
//!
//! This example walks through curried updaters and a closure-held store.
//!
//! Key concepts:
//! - Staged application: field, then amount, then container
//! - Partially specialized updaters reused as factories
//! - A store that threads its current state through each transform
//!
//! Run with: cargo run --example plant_care

use tally::core::{change_state, Container, Pipeline};
use tally::store::{create_store, StoreBuilder};

fn show(label: &str, plant: &Container) {
    let json = serde_json::to_string(plant).unwrap_or_else(|e| e.to_string());
    println!("  {label}: {json}");
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Plant Care Example ===\n");

    // Function factories for each kind of care
    let feed = change_state("soil");
    let hydrate = change_state("water");
    let give_light = change_state("light");

    // Drill down to fully specialized updaters
    let blue_food = feed.by(5.0);
    let green_food = feed.by(10.0);
    let yucky_food = feed.by(-5.0);

    println!("Pure updates:");
    let plant = Container::new();
    show("blue food", &blue_food.apply(&plant));
    show("hydrate", &hydrate.increment().apply(&plant));
    show("original", &plant);
    println!();

    println!("Stored state:");
    let mut state_control = create_store();
    show("fed plant", &state_control(&blue_food));
    show("plant fed again", &state_control(&green_food));
    show("plant in the sun", &state_control(&give_light.by(3.0)));
    show("bad food", &state_control(&yucky_food));
    println!();

    println!("Daily routine as one transform:");
    let daily_care = Pipeline::new()
        .then(hydrate.increment())
        .then(give_light.by(2.0));

    match StoreBuilder::new().label("fern").build() {
        Ok(mut fern) => {
            for day in 1..=3 {
                show(&format!("day {day}"), &fern.apply(&daily_care));
            }
            println!("  revisions: {}", fern.metadata().revision);
        }
        Err(e) => println!("  could not build store: {e}"),
    }

    println!("\n=== Example Complete ===");
}
