use crate::core::{Reducer, Reply, Transducer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropState {
    /// `k > 0` more elements will be discarded.
    Skipping(usize),
    Passing,
}

/// Transducer discarding the first `n` elements.
#[derive(Clone, Copy, Debug)]
pub struct DropPrefix {
    n: usize,
}

#[derive(Clone, Debug)]
pub struct DropReducer<R> {
    state: DropState,
    down: R,
}

impl Transducer for DropPrefix {
    type Reducer<R> = DropReducer<R>;

    fn apply<R>(self, downstream: R) -> DropReducer<R> {
        let state = if self.n == 0 {
            DropState::Passing
        } else {
            DropState::Skipping(self.n)
        };
        DropReducer {
            state,
            down: downstream,
        }
    }
}

impl<T, R> Reducer<T> for DropReducer<R>
where
    R: Reducer<T>,
{
    type Output = R::Output;

    fn step(self, input: T) -> Reply<Self> {
        let DropReducer { state, down } = self;
        if down.is_halted() {
            return Reply::Halt(DropReducer { state, down });
        }

        match state {
            DropState::Skipping(k) => {
                let state = if k == 1 {
                    DropState::Passing
                } else {
                    DropState::Skipping(k - 1)
                };
                Reply::Empty(DropReducer { state, down })
            }
            DropState::Passing => down.step(input).map(|down| DropReducer { state, down }),
        }
    }

    fn finish(self) -> R::Output {
        self.down.finish()
    }

    fn is_halted(&self) -> bool {
        self.down.is_halted()
    }
}

pub fn drop(n: usize) -> DropPrefix {
    DropPrefix { n }
}
