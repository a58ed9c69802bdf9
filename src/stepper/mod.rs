//! Steppers: drivers that feed a collection into a step function.
//!
//! A stepper applies a per-element step function to every element of a
//! collection in order and stops the moment the step function halts. It is
//! the only place a pipeline touches a concrete collection.

use crate::core::{Reducer, Reply, Transducer};
use tracing::trace;

/// Drives a step function across a collection of type `C`.
///
/// # Contract
///
/// - elements are passed to `f` in the collection's natural order;
/// - if `init` is already `Halt`, no element is drawn and `init` is returned;
/// - after `f` returns `Halt`, no further element is drawn;
/// - an empty collection returns `init` unchanged.
pub trait Stepper<C> {
    type Item;

    fn step<S, F>(&self, f: F, init: Reply<S>, collection: C) -> Reply<S>
    where
        F: FnMut(S, Self::Item) -> Reply<S>;
}

/// Stepper for ordered sequences: anything that is `IntoIterator`.
///
/// Covers vectors, slices, arrays, ranges and infinite iterators alike; an
/// infinite source is only safe when some stage is guaranteed to halt.
#[derive(Clone, Copy, Debug, Default)]
pub struct Seq;

impl<C> Stepper<C> for Seq
where
    C: IntoIterator,
{
    type Item = C::Item;

    fn step<S, F>(&self, f: F, init: Reply<S>, collection: C) -> Reply<S>
    where
        F: FnMut(S, C::Item) -> Reply<S>,
    {
        step_iter(f, init, collection)
    }
}

/// Apply `f` to each element of `items` in order, short-circuiting on halt.
///
/// An `Empty` reply does not stop the walk: the next element is fed to the
/// state it carries. A trailing `Empty` is returned unchanged.
///
/// # Example
///
/// ```rust
/// use transducers::stepper::step_iter;
/// use transducers::Reply;
///
/// let reply = step_iter(
///     |sum, x: u32| if sum + x > 5 { Reply::Halt(sum) } else { Reply::Continue(sum + x) },
///     Reply::Continue(0),
///     1..,
/// );
/// assert_eq!(reply, Reply::Halt(3));
/// ```
pub fn step_iter<I, S, F>(mut f: F, init: Reply<S>, items: I) -> Reply<S>
where
    I: IntoIterator,
    F: FnMut(S, I::Item) -> Reply<S>,
{
    if init.is_halted() {
        return init;
    }

    let mut reply = init;
    for item in items {
        reply = f(reply.into_state(), item);
        if reply.is_halted() {
            trace!("step function halted, source no longer drawn");
            return reply;
        }
    }
    reply
}

/// Drive `reducer` across `collection` with `stepper`, then finish it.
///
/// # Example
///
/// ```rust
/// use transducers::reducers::into_vec;
/// use transducers::stepper::{reduce, Seq};
/// use transducers::xform::with_index;
/// use transducers::Transducer;
///
/// let out = reduce(&Seq, with_index().apply(into_vec()), [1, 2, 3]);
/// assert_eq!(out, vec![(0, 1), (1, 2), (2, 3)]);
/// ```
pub fn reduce<St, C, R>(stepper: &St, reducer: R, collection: C) -> R::Output
where
    St: Stepper<C>,
    R: Reducer<St::Item>,
{
    stepper
        .step(|r: R, x| r.step(x), reducer.start(), collection)
        .into_state()
        .finish()
}

/// Apply `xform` to `reducer` and reduce `items` with the [`Seq`] stepper.
pub fn transduce<T, R, I>(
    xform: T,
    reducer: R,
    items: I,
) -> <T::Reducer<R> as Reducer<I::Item>>::Output
where
    T: Transducer,
    I: IntoIterator,
    T::Reducer<R>: Reducer<I::Item>,
{
    reduce(&Seq, xform.apply(reducer), items)
}
