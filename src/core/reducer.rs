//! The reducer and transducer protocol.
//!
//! A [`Reducer`] is threaded by value: every step consumes it and hands back
//! the next version wrapped in a [`Reply`]. A [`Transducer`] wraps one
//! reducer into another, so a pipeline is built outside-in from the terminal
//! reducer and fed inside-out from the source.

use super::compose::Compose;
use super::reply::Reply;

/// A stage that ingests elements one at a time and produces a result on
/// demand.
///
/// # Contract
///
/// - `step` on a halted reducer is a no-op that returns `Reply::Halt(self)`.
/// - `Reply::Halt(r)` always carries an `r` for which `is_halted()` is true;
///   `Continue` and `Empty` carry a reducer that still accepts input.
/// - `finish` can be called at any time, before the first element or after a
///   halt, and yields the best result for what has been seen.
///
/// # Example
///
/// ```rust
/// use transducers::reducers::into_vec;
/// use transducers::Reducer;
///
/// let collect = into_vec::<i32>();
/// let collect = collect.step(1).into_state();
/// let collect = collect.step(2).into_state();
/// assert_eq!(collect.finish(), vec![1, 2]);
/// ```
pub trait Reducer<In>: Sized {
    /// Result produced by `finish`.
    type Output;

    /// Ingest one element, returning the next reducer.
    fn step(self, input: In) -> Reply<Self>;

    /// Produce the result from the current state.
    fn finish(self) -> Self::Output;

    /// True exactly when `step` would be a no-op.
    fn is_halted(&self) -> bool;

    /// Wrap this reducer in the reply matching its halted state.
    fn start(self) -> Reply<Self> {
        if self.is_halted() {
            Reply::Halt(self)
        } else {
            Reply::Continue(self)
        }
    }

    /// Step and drop the signal. Used when flushing buffered output on
    /// finish, where a downstream halt only means the rest is discarded.
    fn absorb(self, input: In) -> Self {
        self.step(input).into_state()
    }
}

/// A transformation from one reducer into another.
///
/// The input and output element types are not named on the trait: they are
/// fixed by the [`Reducer`] implementations of `Self::Reducer<R>`, so a
/// mismatched pipeline is rejected at compile time.
pub trait Transducer: Sized {
    /// Reducer produced by wrapping a downstream `R`.
    type Reducer<R>;

    /// Wrap `downstream`, producing the composite reducer.
    ///
    /// If `downstream` is already halted, the composite starts halted too.
    fn apply<R>(self, downstream: R) -> Self::Reducer<R>;

    /// Chain `next` after this stage in data-flow order.
    ///
    /// ```rust
    /// use transducers::xform::{map, take};
    /// use transducers::reducers::into_vec;
    /// use transducers::{transduce, Transducer};
    ///
    /// let pipeline = map(|x: i32| x + 1).then(take(2));
    /// assert_eq!(transduce(pipeline, into_vec(), vec![3, 7, 9]), vec![4, 8]);
    /// ```
    fn then<N>(self, next: N) -> Compose<Self, N>
    where
        N: Transducer,
    {
        Compose::new(self, next)
    }
}
