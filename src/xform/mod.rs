//! Primitive transducers.
//!
//! Each primitive is an explicit state machine: a transducer value that
//! carries its configuration, and a reducer struct that owns the stage's
//! local state together with the downstream reducer it wraps. Everything is
//! monomorphized; there are no boxed closures on the hot path.
//!
//! | Stage | Behavior |
//! |---|---|
//! | [`map`] | transform each element |
//! | [`filter`] | keep elements matching a predicate |
//! | [`take`] | forward at most `n`, then halt |
//! | [`drop`] | discard the first `n` |
//! | [`fold`] | accumulate, emit on finish |
//! | [`reverse`] | buffer, emit last-first on finish |
//! | [`concat`] / [`flatten`] | walk collection-valued input |
//! | [`repeat`] | expand `(count, value)` pairs |
//! | [`with_index`] / [`with_count`] | tag with position, attach a count |
//! | [`intersperse`] | separator between elements |
//!
//! Splitting a stream between two reducers is a terminal concern and lives
//! in [`crate::reducers::partition`].

mod concat;
mod drop;
mod filter;
mod fold;
mod index;
mod intersperse;
mod map;
mod repeat;
mod reverse;
mod take;

pub use concat::{concat, flatten, Concat, ConcatReducer};
pub use drop::{drop, DropPrefix, DropReducer, DropState};
pub use filter::{filter, Filter, FilterReducer};
pub use fold::{fold, Fold, FoldReducer};
pub use index::{with_count, with_index, CountReducer, IndexReducer, WithCount, WithIndex};
pub use intersperse::{intersperse, Intersperse, IntersperseReducer};
pub use map::{map, Map, MapReducer};
pub use repeat::{repeat, Repeat, RepeatReducer};
pub use reverse::{reverse, Reverse, ReverseReducer};
pub use take::{take, Take, TakeReducer, TakeState};
