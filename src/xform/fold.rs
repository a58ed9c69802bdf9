use crate::core::{Reducer, Reply, Transducer};

/// Transducer accumulating every element and emitting the accumulator once,
/// when the pipeline finishes.
///
/// Mid-stream steps reply `Empty`: nothing reaches the downstream reducer
/// until `finish`.
#[derive(Clone, Debug)]
pub struct Fold<A, F> {
    init: A,
    f: F,
}

#[derive(Clone, Debug)]
pub struct FoldReducer<A, F, R> {
    acc: A,
    f: F,
    down: R,
}

impl<A, F> Transducer for Fold<A, F> {
    type Reducer<R> = FoldReducer<A, F, R>;

    fn apply<R>(self, downstream: R) -> FoldReducer<A, F, R> {
        FoldReducer {
            acc: self.init,
            f: self.f,
            down: downstream,
        }
    }
}

impl<T, A, F, R> Reducer<T> for FoldReducer<A, F, R>
where
    F: FnMut(A, T) -> A,
    R: Reducer<A>,
{
    type Output = R::Output;

    fn step(self, input: T) -> Reply<Self> {
        let FoldReducer { acc, mut f, down } = self;
        if down.is_halted() {
            return Reply::Halt(FoldReducer { acc, f, down });
        }

        let acc = f(acc, input);
        Reply::Empty(FoldReducer { acc, f, down })
    }

    fn finish(self) -> R::Output {
        self.down.absorb(self.acc).finish()
    }

    fn is_halted(&self) -> bool {
        self.down.is_halted()
    }
}

pub fn fold<A, F>(init: A, f: F) -> Fold<A, F> {
    Fold { init, f }
}
