use crate::core::{Reducer, Reply, Transducer};
use tracing::trace;

/// Position of a [`TakeReducer`] in its state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TakeState {
    /// `k > 0` more elements will be forwarded.
    Remaining(usize),

    /// Every further step is a no-op.
    Halted,
}

impl TakeState {
    fn new(n: usize) -> Self {
        if n == 0 {
            TakeState::Halted
        } else {
            TakeState::Remaining(n)
        }
    }
}

/// Transducer forwarding at most `n` elements, then halting.
#[derive(Clone, Copy, Debug)]
pub struct Take {
    n: usize,
}

#[derive(Clone, Debug)]
pub struct TakeReducer<R> {
    state: TakeState,
    down: R,
}

impl<R> TakeReducer<R> {
    pub fn state(&self) -> TakeState {
        self.state
    }
}

impl Transducer for Take {
    type Reducer<R> = TakeReducer<R>;

    /// `take(0)` is halted from construction, so a driver draws nothing.
    fn apply<R>(self, downstream: R) -> TakeReducer<R> {
        TakeReducer {
            state: TakeState::new(self.n),
            down: downstream,
        }
    }
}

impl<T, R> Reducer<T> for TakeReducer<R>
where
    R: Reducer<T>,
{
    type Output = R::Output;

    fn step(self, input: T) -> Reply<Self> {
        let TakeReducer { state, down } = self;
        let remaining = match state {
            TakeState::Remaining(k) if !down.is_halted() => k,
            _ => {
                return Reply::Halt(TakeReducer {
                    state: TakeState::Halted,
                    down,
                })
            }
        };

        let reply = down.step(input);
        if remaining == 1 || reply.is_halted() {
            trace!(remaining, "take halting");
            return Reply::Halt(TakeReducer {
                state: TakeState::Halted,
                down: reply.into_state(),
            });
        }

        reply.map(|down| TakeReducer {
            state: TakeState::Remaining(remaining - 1),
            down,
        })
    }

    fn finish(self) -> R::Output {
        self.down.finish()
    }

    fn is_halted(&self) -> bool {
        self.state == TakeState::Halted || self.down.is_halted()
    }
}

pub fn take(n: usize) -> Take {
    Take { n }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::{first, into_vec};
    use crate::stepper::transduce;
    use std::cell::Cell;

    #[test]
    fn takes_prefix() {
        assert_eq!(transduce(take(2), into_vec(), vec![3, 7, 9]), vec![3, 7]);
        assert_eq!(transduce(take(5), into_vec(), vec![3, 7]), vec![3, 7]);
    }

    #[test]
    fn take_zero_is_halted_before_first_step() {
        let reducer = take(0).apply(into_vec::<u8>());
        assert_eq!(reducer.state(), TakeState::Halted);
        assert!(reducer.is_halted());

        let drawn = Cell::new(0);
        let out = transduce(
            take(0),
            into_vec(),
            (0..).inspect(|_| drawn.set(drawn.get() + 1)),
        );
        assert_eq!(out, Vec::<i32>::new());
        assert_eq!(drawn.get(), 0);
    }

    #[test]
    fn walks_remaining_states_down_to_halted() {
        let reducer = take(3).apply(into_vec());
        assert_eq!(reducer.state(), TakeState::Remaining(3));

        let reply = reducer.step('a');
        assert_eq!(reply.state().state(), TakeState::Remaining(2));
        let reply = reply.into_state().step('b');
        assert_eq!(reply.state().state(), TakeState::Remaining(1));
        let reply = reply.into_state().step('c');
        assert!(reply.is_halted());
        assert_eq!(reply.state().state(), TakeState::Halted);

        let reply = reply.into_state().step('d');
        assert!(reply.is_halted());
        assert_eq!(reply.into_state().finish(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn halts_when_downstream_halts_first() {
        let reply = take(10).apply(first()).step(1);
        assert!(reply.is_halted());
        assert_eq!(reply.state().state(), TakeState::Halted);
    }
}
