//! Core pipeline types.
//!
//! This module contains the protocol every stage speaks:
//! - `Reply`, the continue/empty/halt signal returned by a step
//! - the `Reducer` and `Transducer` traits
//! - `Compose`, the operator that fuses transducers
//! - `Queue`, the FIFO buffer used by stages holding pending elements
//!
//! Nothing in here knows about concrete collections or concrete stages.

mod compose;
mod queue;
mod reducer;
mod reply;

pub use compose::{compose, identity, Compose, Identity};
pub use queue::{IntoIter, Queue};
pub use reducer::{Reducer, Transducer};
pub use reply::{Reply, ReplyTag};
