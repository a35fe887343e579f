//! Shared Store
//!
//! This example shows a store shared between threads.
//!
//! Key concepts:
//! - Cloneable store handles backed by one slot
//! - Atomic read-transform-replace under a mutex
//! - Failed transforms commit nothing
//!
//! Run with: cargo run --example shared_counter

use std::thread;
use tally::core::{change_state, Container};
use tally::store::StoreBuilder;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== Shared Store Example ===\n");

    let store = match StoreBuilder::new()
        .initial(Container::from([("water", 0.0)]))
        .label("greenhouse")
        .build_shared()
    {
        Ok(store) => store,
        Err(e) => {
            println!("could not build store: {e}");
            return;
        }
    };

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let store = store.clone();
            thread::spawn(move || {
                let hydrate = change_state("water").increment();
                for _ in 0..25 {
                    store.apply(&hydrate);
                }
                println!("  worker {worker} done");
            })
        })
        .collect();

    for handle in handles {
        if handle.join().is_err() {
            println!("  a worker panicked");
        }
    }

    println!("\nWater after 100 increments: {:?}", store.current().get("water"));

    // Overflow is rejected and the stored value is kept
    let flood = change_state("water").by(f64::INFINITY);
    match store.try_apply(|plant| flood.checked_apply(plant)) {
        Ok(plant) => println!("Unexpected commit: {plant:?}"),
        Err(e) => println!("Rejected: {e}"),
    }
    println!("Water is still: {:?}", store.current().get("water"));
    println!("Revisions: {}", store.metadata().revision);

    println!("\n=== Example Complete ===");
}
