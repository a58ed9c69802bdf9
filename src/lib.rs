//! Transducers: composable, collection-agnostic reduction stages
//!
//! A transducer is a data-transformation stage (map, filter, take, fold, ...)
//! that knows nothing about where its elements come from or where they go.
//! Stages compose into one fused pipeline that processes elements one at a
//! time, builds no intermediate collections, and stops pulling from the
//! source as soon as any stage halts.
//!
//! # Core Concepts
//!
//! - **Reducer**: a value-threaded stage with `step`, `finish` and
//!   `is_halted`; every step answers with a [`Reply`]
//! - **Transducer**: wraps a downstream reducer into a new reducer; chained
//!   with [`Transducer::then`] or the [`pipeline!`] macro
//! - **Stepper**: feeds a collection into a reducer and honors halts
//! - **Machine**: the same stages in push/pull form, see [`machine`]
//!
//! # Example
//!
//! ```rust
//! use transducers::reducers::{fold, into_vec};
//! use transducers::xform::{filter, map, take};
//! use transducers::{transduce, Transducer};
//!
//! let firsts = transduce(map(|x: i32| x + 1).then(take(2)), into_vec(), vec![3, 7, 9]);
//! assert_eq!(firsts, vec![4, 8]);
//!
//! let sum = transduce(filter(|x: &i32| x % 2 == 0), fold(0, |a: i32, x: i32| a + x), 1..=5);
//! assert_eq!(sum, 6);
//!
//! // Halting reaches the source: an infinite range is fine.
//! let squares = transduce(map(|x: u64| x * x).then(take(3)), into_vec(), 1..);
//! assert_eq!(squares, vec![1, 4, 9]);
//! ```

pub mod builder;
pub mod core;
pub mod drive;
pub mod machine;
pub mod reducers;
pub mod stepper;
pub mod xform;

// Re-export commonly used types
pub use builder::{reducer, simple_transducer, transducer, BuildError, DriverBuilder, Emitter};
pub use core::{compose, identity, Compose, Identity, Queue, Reducer, Reply, ReplyTag, Transducer};
pub use drive::{DriveError, Driver, Report};
pub use stepper::{reduce, transduce, Seq, Stepper};
