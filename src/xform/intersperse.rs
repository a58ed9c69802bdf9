use crate::core::{Reducer, Reply, Transducer};

/// Transducer emitting a separator between consecutive elements.
#[derive(Clone, Debug)]
pub struct Intersperse<T> {
    sep: T,
}

#[derive(Clone, Debug)]
pub struct IntersperseReducer<T, R> {
    sep: T,
    started: bool,
    down: R,
}

impl<T> Transducer for Intersperse<T> {
    type Reducer<R> = IntersperseReducer<T, R>;

    fn apply<R>(self, downstream: R) -> IntersperseReducer<T, R> {
        IntersperseReducer {
            sep: self.sep,
            started: false,
            down: downstream,
        }
    }
}

impl<T, R> Reducer<T> for IntersperseReducer<T, R>
where
    T: Clone,
    R: Reducer<T>,
{
    type Output = R::Output;

    fn step(self, input: T) -> Reply<Self> {
        let IntersperseReducer { sep, started, down } = self;
        if down.is_halted() {
            return Reply::Halt(IntersperseReducer { sep, started, down });
        }

        let down = if started {
            match down.step(sep.clone()) {
                Reply::Halt(down) => {
                    return Reply::Halt(IntersperseReducer { sep, started, down });
                }
                reply => reply.into_state(),
            }
        } else {
            down
        };

        down.step(input).map(|down| IntersperseReducer {
            sep,
            started: true,
            down,
        })
    }

    fn finish(self) -> R::Output {
        self.down.finish()
    }

    fn is_halted(&self) -> bool {
        self.down.is_halted()
    }
}

pub fn intersperse<T>(sep: T) -> Intersperse<T> {
    Intersperse { sep }
}
