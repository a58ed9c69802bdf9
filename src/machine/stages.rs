//! Primitive machines.
//!
//! Every stage queues what it is fed and only does work when polled.

use super::{Machine, Signal, Status};
use crate::core::Queue;
use std::marker::PhantomData;

/// Transforms each input.
pub struct MapMachine<F, A, B> {
    f: F,
    pending: Queue<A>,
    ended: bool,
    _out: PhantomData<fn() -> B>,
}

impl<F, A, B> Machine for MapMachine<F, A, B>
where
    F: FnMut(A) -> B,
{
    type In = A;
    type Out = B;

    fn feed(&mut self, signal: Signal<A>) {
        match signal {
            Signal::Item(x) if !self.ended => self.pending.push(x),
            Signal::Item(_) => {}
            Signal::End => self.ended = true,
        }
    }

    fn poll(&mut self) -> Status<B> {
        match self.pending.pop() {
            Some(x) => Status::Producing((self.f)(x)),
            None if self.ended => Status::Terminated,
            None => Status::Waiting,
        }
    }
}

pub fn map<F, A, B>(f: F) -> MapMachine<F, A, B>
where
    F: FnMut(A) -> B,
{
    MapMachine {
        f,
        pending: Queue::new(),
        ended: false,
        _out: PhantomData,
    }
}

/// Passes inputs satisfying a predicate.
pub struct FilterMachine<P, T> {
    pred: P,
    pending: Queue<T>,
    ended: bool,
}

impl<P, T> Machine for FilterMachine<P, T>
where
    P: FnMut(&T) -> bool,
{
    type In = T;
    type Out = T;

    fn feed(&mut self, signal: Signal<T>) {
        match signal {
            Signal::Item(x) if !self.ended => self.pending.push(x),
            Signal::Item(_) => {}
            Signal::End => self.ended = true,
        }
    }

    fn poll(&mut self) -> Status<T> {
        while let Some(x) = self.pending.pop() {
            if (self.pred)(&x) {
                return Status::Producing(x);
            }
        }

        if self.ended {
            Status::Terminated
        } else {
            Status::Waiting
        }
    }
}

pub fn filter<P, T>(pred: P) -> FilterMachine<P, T>
where
    P: FnMut(&T) -> bool,
{
    FilterMachine {
        pred,
        pending: Queue::new(),
        ended: false,
    }
}

/// Passes the first `n` inputs, then terminates.
pub struct TakeMachine<T> {
    remaining: usize,
    pending: Queue<T>,
    ended: bool,
}

impl<T> TakeMachine<T> {
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<T> Machine for TakeMachine<T> {
    type In = T;
    type Out = T;

    fn feed(&mut self, signal: Signal<T>) {
        if self.remaining == 0 {
            return;
        }

        match signal {
            Signal::Item(x) if !self.ended => self.pending.push(x),
            Signal::Item(_) => {}
            Signal::End => self.ended = true,
        }
    }

    fn poll(&mut self) -> Status<T> {
        if self.remaining == 0 {
            return Status::Terminated;
        }

        match self.pending.pop() {
            Some(x) => {
                self.remaining -= 1;
                Status::Producing(x)
            }
            None if self.ended => Status::Terminated,
            None => Status::Waiting,
        }
    }
}

/// `take(0)` reports `Terminated` on its first poll, before asking for input.
pub fn take<T>(n: usize) -> TakeMachine<T> {
    TakeMachine {
        remaining: n,
        pending: Queue::new(),
        ended: false,
    }
}

/// Emits the elements of each collection-valued input, lazily.
pub struct FlattenMachine<C>
where
    C: IntoIterator,
{
    current: Option<C::IntoIter>,
    pending: Queue<C>,
    ended: bool,
}

impl<C> Machine for FlattenMachine<C>
where
    C: IntoIterator,
{
    type In = C;
    type Out = C::Item;

    fn feed(&mut self, signal: Signal<C>) {
        match signal {
            Signal::Item(c) if !self.ended => self.pending.push(c),
            Signal::Item(_) => {}
            Signal::End => self.ended = true,
        }
    }

    fn poll(&mut self) -> Status<C::Item> {
        loop {
            if let Some(iter) = self.current.as_mut() {
                if let Some(x) = iter.next() {
                    return Status::Producing(x);
                }
                self.current = None;
            }

            match self.pending.pop() {
                Some(c) => self.current = Some(c.into_iter()),
                None if self.ended => return Status::Terminated,
                None => return Status::Waiting,
            }
        }
    }
}

pub fn flatten<C>() -> FlattenMachine<C>
where
    C: IntoIterator,
{
    FlattenMachine {
        current: None,
        pending: Queue::new(),
        ended: false,
    }
}

/// For each `(count, value)` input, emits `value` `count` times.
pub struct RepeatMachine<T> {
    current: Option<(usize, T)>,
    pending: Queue<(usize, T)>,
    ended: bool,
}

impl<T: Clone> Machine for RepeatMachine<T> {
    type In = (usize, T);
    type Out = T;

    fn feed(&mut self, signal: Signal<(usize, T)>) {
        match signal {
            Signal::Item(pair) if !self.ended => self.pending.push(pair),
            Signal::Item(_) => {}
            Signal::End => self.ended = true,
        }
    }

    fn poll(&mut self) -> Status<T> {
        loop {
            match self.current.take() {
                Some((0, _)) => {}
                Some((1, value)) => return Status::Producing(value),
                Some((n, value)) => {
                    self.current = Some((n - 1, value.clone()));
                    return Status::Producing(value);
                }
                None => match self.pending.pop() {
                    Some(pair) => self.current = Some(pair),
                    None if self.ended => return Status::Terminated,
                    None => return Status::Waiting,
                },
            }
        }
    }
}

pub fn repeat<T: Clone>() -> RepeatMachine<T> {
    RepeatMachine {
        current: None,
        pending: Queue::new(),
        ended: false,
    }
}

/// Buffers everything and emits it in reverse once the input ends.
pub struct ReverseMachine<T> {
    stack: Vec<T>,
    ended: bool,
}

impl<T> Machine for ReverseMachine<T> {
    type In = T;
    type Out = T;

    fn feed(&mut self, signal: Signal<T>) {
        match signal {
            Signal::Item(x) if !self.ended => self.stack.push(x),
            Signal::Item(_) => {}
            Signal::End => self.ended = true,
        }
    }

    fn poll(&mut self) -> Status<T> {
        if !self.ended {
            return Status::Waiting;
        }

        match self.stack.pop() {
            Some(x) => Status::Producing(x),
            None => Status::Terminated,
        }
    }
}

pub fn reverse<T>() -> ReverseMachine<T> {
    ReverseMachine {
        stack: Vec::new(),
        ended: false,
    }
}
