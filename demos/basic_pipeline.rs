//! Basic Pipeline
//!
//! This example builds a few pipelines out of the primitive stages.
//!
//! Key concepts:
//! - Stages compose in data-flow order with `then` or `pipeline!`
//! - The same pipeline runs over any ordered source
//! - A halting stage stops the source, even an infinite one
//! - A `Driver` reports what a run consumed
//!
//! Run with: cargo run --example basic_pipeline

use tracing::Level;
use transducers::reducers::{fold, into_vec, partition};
use transducers::xform::{filter, map, take, with_index};
use transducers::{pipeline, transduce, Driver, Transducer};

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    println!("=== Basic Pipeline Example ===\n");

    let incremented = transduce(map(|x: i32| x + 1).then(take(2)), into_vec(), vec![3, 7, 9]);
    println!("map(+1) then take(2) over [3, 7, 9]: {:?}", incremented);

    let sum = transduce(
        filter(|x: &i32| x % 2 == 0),
        fold(0, |acc: i32, x: i32| acc + x),
        1..=5,
    );
    println!("sum of evens in 1..=5: {}", sum);

    let squares = transduce(
        pipeline!(map(|x: u64| x * x), filter(|x: &u64| x % 3 == 1), take(4)),
        into_vec(),
        1..,
    );
    println!("first four squares = 1 mod 3: {:?}", squares);

    let (short, long) = transduce(
        with_index(),
        partition(
            |(_, w): &(usize, &str)| w.len() <= 3,
            into_vec(),
            into_vec(),
        ),
        "the quick brown fox".split(' '),
    );
    println!("short words: {:?}, long words: {:?}", short, long);

    println!("\n--- Driving with a limit ---");
    let driver = match Driver::builder().limit(100).build() {
        Ok(driver) => driver,
        Err(e) => {
            eprintln!("invalid driver configuration: {}", e);
            return;
        }
    };

    match driver.transduce(take(10), into_vec(), 0..) {
        Ok(report) => println!(
            "output {:?}, consumed {}, halted {}",
            report.output, report.consumed, report.halted
        ),
        Err(e) => println!("run failed: {}", e),
    }

    match driver.transduce(map(|x: u32| x), into_vec(), 0..1000) {
        Ok(report) => println!("unexpected success after {} elements", report.consumed),
        Err(e) => println!("run failed as expected: {}", e),
    }

    println!("\n=== Example Complete ===");
}
