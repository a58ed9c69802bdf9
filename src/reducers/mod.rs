//! Terminal reducers.
//!
//! These sit at the end of a pipeline and turn the elements that reach them
//! into the final output.

mod cap;
mod collect;
mod partition;
mod try_collect;

pub use cap::{Cap, CapPolicy};
pub use collect::{Count, Fold, IntoVec};
pub use partition::Partition;
pub use try_collect::TryIntoVec;

/// Collect into a `Vec`.
pub fn into_vec<T>() -> IntoVec<T> {
    IntoVec::new()
}

/// Count the elements that arrive.
pub fn count() -> Count {
    Count::default()
}

/// Fold every element into `init` with `f`; the accumulator is the output.
pub fn fold<A, F>(init: A, f: F) -> Fold<A, F> {
    Fold::new(init, f)
}

/// Capture a single value according to `policy`.
pub fn cap<T>(policy: CapPolicy) -> Cap<T> {
    Cap::new(policy)
}

/// Capture the first value and halt.
pub fn first<T>() -> Cap<T> {
    Cap::new(CapPolicy::HaltOnFirst)
}

/// Keep the last value seen.
pub fn last<T>() -> Cap<T> {
    Cap::new(CapPolicy::KeepLast)
}

/// Collect `Ok` values, halting with the first `Err` as the output.
pub fn try_into_vec<T, E>() -> TryIntoVec<T, E> {
    TryIntoVec::default()
}

/// Route elements satisfying `pred` to `yes` and the rest to `no`.
///
/// # Example
///
/// ```rust
/// use transducers::reducers::{into_vec, partition};
/// use transducers::stepper::{reduce, Seq};
///
/// let split = partition(|x: &u32| *x < 10, into_vec(), into_vec());
/// let (small, big) = reduce(&Seq, split, [3, 30, 4, 40]);
/// assert_eq!(small, vec![3, 4]);
/// assert_eq!(big, vec![30, 40]);
/// ```
pub fn partition<P, A, B>(pred: P, yes: A, no: B) -> Partition<P, A, B> {
    Partition::new(pred, yes, no)
}
