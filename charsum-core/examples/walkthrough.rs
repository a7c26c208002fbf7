//! Walkthrough of the character-sum table
//!
//! Demonstrates:
//! - Growth from a single slot
//! - Duplicate insertion landing in a later slot
//! - Cascading growth when the table is full
//! - Lookups after growth
//!
//! Run with `RUST_LOG=charsum_core=debug` to see each growth event.

use charsum_core::logger::initialize_logger;
use charsum_core::{CharSumTable, Result};

fn main() -> Result<()> {
    initialize_logger();

    let mut table = CharSumTable::new(1)?;
    let keys = [
        "AaAaAaA",
        "LongTestCaseToGetHighHashCode",
        "Qwerty101",
        "user12345",
    ];

    // Each key's value is its own hash
    let values: Vec<String> = keys.iter().map(|key| table.hash(key).to_string()).collect();
    for (key, value) in keys.iter().zip(&values) {
        table.insert(value.as_str(), *key);
    }
    println!("Original Hash Table");
    table.display();

    println!("Collision Check");
    table.insert(values[1].as_str(), keys[1]);
    table.display();

    println!("\nTable Resize Check");
    table.insert("Bananas", "favorite_fruit");
    table.insert("Apples", "worst_fruit");
    table.insert("Peaches", "average_fruit");
    table.display();

    for key in [
        "user12345",
        "favorite_fruit",
        "average_fruit",
        "LongTestCaseToGetHighHashCode",
    ] {
        match table.lookup(key) {
            Some(value) => println!("{}: {}", key, value),
            None => println!("{}: not found", key),
        }
    }

    println!(
        "\ncapacity {} | occupied {} | load factor {:.2}",
        table.capacity(),
        table.len(),
        table.load_factor()
    );

    Ok(())
}
