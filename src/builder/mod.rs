//! Construction API for custom stages and drivers.
//!
//! The primitive library in [`xform`](crate::xform) and
//! [`reducers`](crate::reducers) covers the common stages. This module is
//! for everything else: reducers and transducers built from plain functions,
//! the [`pipeline!`](crate::pipeline) macro, and the fluent
//! [`DriverBuilder`].

pub mod driver;
pub mod error;
pub mod macros;
pub mod reducer;
pub mod transducer;

pub use driver::DriverBuilder;
pub use error::BuildError;
pub use reducer::{reducer, FnReducer};
pub use transducer::{
    simple_transducer, transducer, Emitter, FnStage, FnTransducer, SimpleTransducer,
};
