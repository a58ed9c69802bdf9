use crate::core::{Reducer, Reply, Transducer};
use std::marker::PhantomData;

/// Transducer buffering every element and emitting them last-first when
/// the pipeline finishes.
///
/// Only meaningful for finite sources: on an infinite one nothing is ever
/// emitted.
pub struct Reverse<T> {
    _items: PhantomData<fn() -> T>,
}

#[derive(Clone, Debug)]
pub struct ReverseReducer<T, R> {
    buffer: Vec<T>,
    down: R,
}

impl<T> Transducer for Reverse<T> {
    type Reducer<R> = ReverseReducer<T, R>;

    fn apply<R>(self, downstream: R) -> ReverseReducer<T, R> {
        ReverseReducer {
            buffer: Vec::new(),
            down: downstream,
        }
    }
}

impl<T, R> Reducer<T> for ReverseReducer<T, R>
where
    R: Reducer<T>,
{
    type Output = R::Output;

    fn step(mut self, input: T) -> Reply<Self> {
        if self.down.is_halted() {
            return Reply::Halt(self);
        }

        self.buffer.push(input);
        Reply::Empty(self)
    }

    fn finish(self) -> R::Output {
        let mut down = self.down;
        for item in self.buffer.into_iter().rev() {
            if down.is_halted() {
                break;
            }
            down = down.absorb(item);
        }
        down.finish()
    }

    fn is_halted(&self) -> bool {
        self.down.is_halted()
    }
}

pub fn reverse<T>() -> Reverse<T> {
    Reverse {
        _items: PhantomData,
    }
}
