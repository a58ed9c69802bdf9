//! Push/pull machines: an explicit-status encoding of pipeline stages.
//!
//! Where a [`Reducer`](crate::Reducer) is driven by its source, a
//! [`Machine`] is driven by its consumer. Inputs are pushed in with
//! [`Machine::feed`]; the consumer then asks for the machine's [`Status`]
//! with [`Machine::poll`], and nothing is computed until it does.
//!
//! Two machines compose into a [`Pipe`]. Any machine can be turned into a
//! transducer with [`stage`], so both encodings interoperate.
//!
//! # Protocol
//!
//! - `poll` reports `Producing(v)` once per value, `Waiting` when the
//!   machine needs more input, and `Terminated` once it will never produce
//!   again.
//! - `Signal::End` is fed at most once, after the last item. A machine that
//!   has received `End` must never report `Waiting` again.
//! - Items fed after `End` are ignored, and feeding a terminated machine
//!   is a no-op.
//!
//! # Example
//!
//! ```rust
//! use transducers::machine::{self, Machine};
//!
//! let m = machine::map(|x: u32| x * 3)
//!     .pipe(machine::filter(|x: &u32| x % 2 == 0))
//!     .pipe(machine::take(2));
//!
//! assert_eq!(machine::run(m, 1..), vec![6, 12]);
//! ```

mod bridge;
mod pipe;
mod stages;

pub use bridge::{stage, Staged, StagedReducer};
pub use pipe::Pipe;
pub use stages::{
    filter, flatten, map, repeat, reverse, take, FilterMachine, FlattenMachine, MapMachine,
    RepeatMachine, ReverseMachine, TakeMachine,
};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Input to a machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal<T> {
    /// One element.
    Item(T),

    /// The source is exhausted.
    End,
}

/// What a machine reports when polled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status<T> {
    /// Finished for good.
    Terminated,

    /// Needs more input before it can make progress.
    Waiting,

    /// Emits one value.
    Producing(T),
}

impl<T> Status<T> {
    pub fn is_terminated(&self) -> bool {
        matches!(self, Status::Terminated)
    }

    pub fn is_waiting(&self) -> bool {
        matches!(self, Status::Waiting)
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Status::Producing(value) => Some(value),
            _ => None,
        }
    }
}

/// A stage driven by its consumer.
pub trait Machine {
    type In;
    type Out;

    /// Push one signal into the machine.
    fn feed(&mut self, signal: Signal<Self::In>);

    /// Report the next status, advancing the machine.
    fn poll(&mut self) -> Status<Self::Out>;

    /// Compose with `next`, which consumes this machine's output.
    fn pipe<M>(self, next: M) -> Pipe<Self, M>
    where
        Self: Sized,
        M: Machine<In = Self::Out>,
    {
        Pipe::new(self, next)
    }
}

/// Drive `machine` with `items` and collect everything it produces.
///
/// Items are fed one at a time, only while the machine is waiting; `End`
/// is fed once the source runs dry. An infinite source is safe as long as
/// the machine terminates.
pub fn run<M, I>(mut machine: M, items: I) -> Vec<M::Out>
where
    M: Machine,
    I: IntoIterator<Item = M::In>,
{
    let mut items = items.into_iter();
    let mut out = Vec::new();
    let mut ended = false;

    loop {
        match machine.poll() {
            Status::Producing(value) => out.push(value),
            Status::Terminated => break,
            Status::Waiting if ended => {
                warn!("machine kept waiting after end of input, treating it as terminated");
                break;
            }
            Status::Waiting => match items.next() {
                Some(item) => machine.feed(Signal::Item(item)),
                None => {
                    machine.feed(Signal::End);
                    ended = true;
                }
            },
        }
    }

    out
}
