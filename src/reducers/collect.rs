//! Accumulating terminal reducers.

use crate::core::{Reducer, Reply};

/// Collects every element into a `Vec`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntoVec<T> {
    items: Vec<T>,
}

impl<T> IntoVec<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Reducer<T> for IntoVec<T> {
    type Output = Vec<T>;

    fn step(mut self, input: T) -> Reply<Self> {
        self.items.push(input);
        Reply::Continue(self)
    }

    fn finish(self) -> Vec<T> {
        self.items
    }

    fn is_halted(&self) -> bool {
        false
    }
}

/// Counts elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Count {
    seen: usize,
}

impl<T> Reducer<T> for Count {
    type Output = usize;

    fn step(self, _input: T) -> Reply<Self> {
        Reply::Continue(Self {
            seen: self.seen + 1,
        })
    }

    fn finish(self) -> usize {
        self.seen
    }

    fn is_halted(&self) -> bool {
        false
    }
}

/// Folds every element into an accumulator; the accumulator is the output.
#[derive(Clone, Debug)]
pub struct Fold<A, F> {
    acc: A,
    f: F,
}

impl<A, F> Fold<A, F> {
    pub fn new(init: A, f: F) -> Self {
        Self { acc: init, f }
    }
}

impl<T, A, F> Reducer<T> for Fold<A, F>
where
    F: FnMut(A, T) -> A,
{
    type Output = A;

    fn step(self, input: T) -> Reply<Self> {
        let Fold { acc, mut f } = self;
        let acc = f(acc, input);
        Reply::Continue(Fold { acc, f })
    }

    fn finish(self) -> A {
        self.acc
    }

    fn is_halted(&self) -> bool {
        false
    }
}
