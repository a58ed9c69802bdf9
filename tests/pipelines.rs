//! End-to-end pipeline scenarios.

use std::cell::RefCell;
use std::collections::BTreeSet;
use transducers::builder::{simple_transducer, transducer, Emitter};
use transducers::drive::{DriveError, Driver};
use transducers::machine::{self, stage};
use transducers::reducers::{count, first, fold, into_vec, last, partition, try_into_vec};
use transducers::stepper::{reduce, Seq};
use transducers::xform::{
    concat, drop, filter, flatten, intersperse, map, repeat, reverse, take, with_count,
    with_index,
};
use transducers::{pipeline, transduce, Reply, Transducer};

#[test]
fn map_then_take() {
    let out = transduce(map(|x: i32| x + 1).then(take(2)), into_vec(), vec![3, 7, 9]);
    assert_eq!(out, vec![4, 8]);
}

#[test]
fn filter_even_then_sum() {
    let out = transduce(
        filter(|x: &i32| x % 2 == 0),
        fold(0, |acc: i32, x: i32| acc + x),
        1..=5,
    );
    assert_eq!(out, 6);
}

#[test]
fn concat_flattens_one_level() {
    let nested = vec![vec![1, 2], vec![3], vec![], vec![4]];
    assert_eq!(transduce(concat(Seq), into_vec(), nested), vec![1, 2, 3, 4]);
}

#[test]
fn with_index_pairs_from_zero() {
    let out = transduce(with_index(), into_vec(), vec![1, 2, 3]);
    assert_eq!(out, vec![(0, 1), (1, 2), (2, 3)]);
}

#[test]
fn halt_stops_an_infinite_source() {
    let drawn = RefCell::new(Vec::new());
    let source = (0..).inspect(|x| drawn.borrow_mut().push(*x));

    let out = transduce(
        pipeline!(filter(|x: &u32| x % 5 == 0), map(|x: u32| x / 5), take(3)),
        into_vec(),
        source,
    );

    assert_eq!(out, vec![0, 1, 2]);
    assert_eq!(*drawn.borrow(), (0..=10u32).collect::<Vec<_>>());
}

#[test]
fn stages_between_halt_and_terminal_still_flush() {
    let out = transduce(take(3).then(reverse()), into_vec(), 1..);
    assert_eq!(out, vec![3, 2, 1]);
}

#[test]
fn drop_then_count_with_count() {
    let (split, seen) = transduce(
        drop(2).then(with_count()),
        partition(|x: &i32| x % 2 == 0, count(), count()),
        vec![10, 11, 12, 13, 14],
    );
    assert_eq!(split, (2, 1));
    assert_eq!(seen, 3);
}

#[test]
fn repeat_then_intersperse_builds_a_string() {
    let out = transduce(
        repeat().then(intersperse('-')),
        fold(String::new(), |mut s: String, c: char| {
            s.push(c);
            s
        }),
        vec![(2, 'a'), (0, 'z'), (1, 'b')],
    );
    assert_eq!(out, "a-a-b");
}

#[test]
fn parsing_halts_on_first_error() {
    let out = transduce(
        map(|s: &str| s.trim().parse::<u8>()),
        try_into_vec(),
        " 1, 2,300, 4".split(','),
    );
    assert!(out.is_err());

    let ok = transduce(map(|s: &str| s.parse::<u8>()), try_into_vec(), ["7", "8"]);
    assert_eq!(ok, Ok(vec![7, 8]));
}

#[test]
fn sets_are_stepped_in_their_natural_order() {
    let set: BTreeSet<char> = "transducer".chars().collect();
    let out = reduce(&Seq, take(3).apply(into_vec()), set);
    assert_eq!(out, vec!['a', 'c', 'd']);
}

#[test]
fn first_and_last_capture_single_values() {
    assert_eq!(transduce(filter(|x: &i32| *x > 2), first(), 1..), Some(3));
    assert_eq!(
        transduce(flatten(), last(), vec![vec![1], vec![2, 3]]),
        Some(3)
    );
    assert_eq!(transduce(take(0), last::<i32>(), 1..), None);
}

#[test]
fn custom_window_transducer() {
    // Sliding sums over windows of three.
    let windows = transducer(
        Vec::new(),
        |mut window: Vec<i32>, x: i32, out: &mut Emitter<i32>| {
            window.push(x);
            if window.len() > 3 {
                window.remove(0);
            }
            if window.len() == 3 {
                out.emit(window.iter().sum());
            }
            Reply::Continue(window)
        },
        |_window, _out| {},
    );

    let out = transduce(windows, into_vec(), 1..=6);
    assert_eq!(out, vec![6, 9, 12, 15]);
}

#[test]
fn custom_stage_mixed_with_machines() {
    let chunks = simple_transducer(0usize, |n: usize, line: &str, out| {
        for word in line.split_whitespace() {
            out.emit(word.len());
        }
        Reply::Continue(n + 1)
    });

    let xform = chunks.then(stage(machine::filter(|len: &usize| *len > 3)));
    let out = transduce(xform, into_vec(), ["the quick brown", "fox jumps", "over"]);
    assert_eq!(out, vec![5, 5, 5, 4]);
}

#[test]
fn driver_reports_and_bounds_runs() {
    let driver = Driver::builder().limit(5).build().unwrap();

    let report = driver
        .transduce(pipeline!(map(|x: i32| x * 2), take(3)), into_vec(), 1..)
        .unwrap();
    assert_eq!(report.output, vec![2, 4, 6]);
    assert_eq!(report.consumed, 3);
    assert!(report.halted);

    let err = driver.transduce(pipeline!(), count(), 0..6).unwrap_err();
    assert_eq!(err, DriveError::LimitExceeded { limit: 5 });
}
