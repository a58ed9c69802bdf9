//! Custom Stages
//!
//! This example extends the primitive library with user-defined stages.
//!
//! Key concepts:
//! - `reducer` builds a terminal stage from init/step/finish functions
//! - `transducer` builds a stateful stage that can emit many values per input
//! - Machines run the same stages in push/pull form
//! - `stage` turns any machine into a transducer
//!
//! Run with: cargo run --example custom_stages

use tracing::Level;
use transducers::builder::{reducer, simple_transducer, transducer};
use transducers::machine::{self, stage, Machine};
use transducers::reducers::into_vec;
use transducers::xform::map;
use transducers::{transduce, Reply, Transducer};

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::TRACE).init();

    println!("=== Custom Stages Example ===\n");

    // Run-length encoding: consecutive duplicates become (count, value).
    let rle = transducer(
        None,
        |run: Option<(usize, char)>, c: char, out| match run {
            Some((n, prev)) if prev == c => Reply::Continue(Some((n + 1, prev))),
            Some(done) => {
                out.emit(done);
                Reply::Continue(Some((1, c)))
            }
            None => Reply::Continue(Some((1, c))),
        },
        |run, out| {
            if let Some(done) = run {
                out.emit(done);
            }
        },
    );
    let encoded = transduce(rle, into_vec(), "aaabccdddd".chars());
    println!("run-length encoded: {:?}", encoded);

    // Decoding is just the primitive repeat stage.
    let decoded: String = transduce(transducers::xform::repeat(), into_vec(), encoded)
        .into_iter()
        .collect();
    println!("decoded: {}", decoded);

    // Budgeted sum: halt once the budget is spent.
    let budget = reducer(
        (0u32, Vec::new()),
        |(spent, mut items): (u32, Vec<u32>), cost: u32| {
            if spent + cost > 20 {
                Reply::Halt((spent, items))
            } else {
                items.push(cost);
                Reply::Continue((spent + cost, items))
            }
        },
        |(spent, items)| format!("spent {} on {:?}", spent, items),
    );
    println!("{}", transduce(map(|x: u32| x * 2), budget, 1..));

    // Differences between neighbours.
    let deltas = simple_transducer(None, |prev: Option<i64>, x: i64, out| {
        if let Some(p) = prev {
            out.emit(x - p);
        }
        Reply::Continue(Some(x))
    });
    println!(
        "deltas: {:?}",
        transduce(deltas, into_vec(), [1, 4, 9, 16, 25])
    );

    println!("\n--- Machines ---");
    let m = machine::flatten::<Vec<i32>>()
        .pipe(machine::map(|x: i32| x * 10))
        .pipe(machine::take(4));
    println!(
        "pulled: {:?}",
        machine::run(m, vec![vec![1, 2], vec![], vec![3, 4, 5]])
    );

    let xform = stage(machine::reverse()).then(map(|x: i32| -x));
    println!("staged reverse: {:?}", transduce(xform, into_vec(), 1..=5));

    println!("\n=== Example Complete ===");
}
