//! Running machines inside reducer pipelines.

use super::{Machine, Signal, Status};
use crate::core::{Reducer, Reply, Transducer};
use tracing::{trace, warn};

/// Transducer wrapping a [`Machine`]; built by [`stage`].
#[derive(Clone, Debug)]
pub struct Staged<M> {
    machine: M,
}

/// Reducer feeding each element into a machine and its output downstream.
pub struct StagedReducer<M, R>
where
    M: Machine,
{
    machine: M,
    down: R,
    held: Option<M::Out>,
    closed: bool,
}

enum Drained {
    Waiting { produced: bool },
    Terminated,
    Halted,
}

/// Forward `held`, then everything `machine` produces, until it waits.
fn drain<M, R>(machine: &mut M, held: Option<M::Out>, mut down: R) -> (R, Drained)
where
    M: Machine,
    R: Reducer<M::Out>,
{
    let mut produced = false;
    let mut status = match held {
        Some(value) => Status::Producing(value),
        None => machine.poll(),
    };

    loop {
        match status {
            Status::Producing(value) => match down.step(value) {
                Reply::Halt(halted) => return (halted, Drained::Halted),
                Reply::Continue(next) => {
                    produced = true;
                    down = next;
                }
                Reply::Empty(next) => down = next,
            },
            Status::Waiting => return (down, Drained::Waiting { produced }),
            Status::Terminated => return (down, Drained::Terminated),
        }
        status = machine.poll();
    }
}

impl<M> Transducer for Staged<M>
where
    M: Machine,
{
    type Reducer<R> = StagedReducer<M, R>;

    /// The machine is polled once up front: one that terminates before any
    /// input (such as `take(0)`) yields an already-halted reducer, and a
    /// value produced before any input is held for the first step.
    fn apply<R>(self, downstream: R) -> StagedReducer<M, R> {
        let mut machine = self.machine;
        let (held, closed) = match machine.poll() {
            Status::Producing(value) => (Some(value), false),
            Status::Waiting => (None, false),
            Status::Terminated => (None, true),
        };

        StagedReducer {
            machine,
            down: downstream,
            held,
            closed,
        }
    }
}

impl<M, R> Reducer<M::In> for StagedReducer<M, R>
where
    M: Machine,
    R: Reducer<M::Out>,
{
    type Output = R::Output;

    fn step(self, input: M::In) -> Reply<Self> {
        if Reducer::<M::In>::is_halted(&self) {
            return Reply::Halt(self);
        }

        let StagedReducer {
            mut machine,
            mut down,
            held,
            ..
        } = self;

        let mut produced = false;
        if held.is_some() {
            let (next, drained) = drain(&mut machine, held, down);
            down = next;
            match drained {
                Drained::Waiting { produced: reached } => produced = reached,
                Drained::Terminated | Drained::Halted => return close(machine, down),
            }
        }

        machine.feed(Signal::Item(input));
        let (down, drained) = drain(&mut machine, None, down);

        match drained {
            Drained::Waiting { produced: now } => {
                let next = StagedReducer {
                    machine,
                    down,
                    held: None,
                    closed: false,
                };
                if produced || now {
                    Reply::Continue(next)
                } else {
                    Reply::Empty(next)
                }
            }
            Drained::Terminated | Drained::Halted => close(machine, down),
        }
    }

    fn finish(self) -> R::Output {
        let StagedReducer {
            mut machine,
            down,
            held,
            closed,
        } = self;
        if closed || down.is_halted() {
            return down.finish();
        }

        let (down, drained) = drain(&mut machine, held, down);
        let down = match drained {
            Drained::Waiting { .. } => {
                machine.feed(Signal::End);
                let (down, drained) = drain(&mut machine, None, down);
                if let Drained::Waiting { .. } = drained {
                    warn!("stage kept waiting after end of input, treating it as terminated");
                }
                down
            }
            Drained::Terminated | Drained::Halted => down,
        };
        down.finish()
    }

    fn is_halted(&self) -> bool {
        self.closed || self.down.is_halted()
    }
}

fn close<M, R>(machine: M, down: R) -> Reply<StagedReducer<M, R>>
where
    M: Machine,
{
    trace!("staged machine closed");
    Reply::Halt(StagedReducer {
        machine,
        down,
        held: None,
        closed: true,
    })
}

/// Use `machine` as a transducer stage.
///
/// # Example
///
/// ```rust
/// use transducers::machine::{self, stage};
/// use transducers::reducers::into_vec;
/// use transducers::xform::map;
/// use transducers::{transduce, Transducer};
///
/// let xform = map(|x: i32| vec![x; 2])
///     .then(stage(machine::flatten()))
///     .then(stage(machine::take(3)));
/// assert_eq!(transduce(xform, into_vec(), 1..), vec![1, 1, 2]);
/// ```
pub fn stage<M: Machine>(machine: M) -> Staged<M> {
    Staged { machine }
}
