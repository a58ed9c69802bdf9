//! Configurable reduction runner.
//!
//! [`reduce`](crate::stepper::reduce) returns only the output. A [`Driver`]
//! runs the same reduction but also reports how many elements the pipeline
//! consumed and whether it halted, and can refuse sources that are longer
//! than a configured limit.
//!
//! # Example
//!
//! ```rust
//! use transducers::drive::{Driver, DriveError};
//! use transducers::reducers::into_vec;
//! use transducers::stepper::Seq;
//! use transducers::xform::take;
//! use transducers::Transducer;
//!
//! let driver = Driver::builder().limit(10).build().unwrap();
//!
//! // A halting pipeline stops the source well before the limit.
//! let report = driver.run(&Seq, take(3).apply(into_vec()), 1..).unwrap();
//! assert_eq!(report.output, vec![1, 2, 3]);
//! assert_eq!(report.consumed, 3);
//! assert!(report.halted);
//!
//! // A pipeline that keeps accepting input trips the limit.
//! let err = driver.run(&Seq, into_vec(), 0..100).unwrap_err();
//! assert_eq!(err, DriveError::LimitExceeded { limit: 10 });
//! ```

mod error;

pub use error::DriveError;

use crate::builder::DriverBuilder;
use crate::core::{Reducer, Reply, Transducer};
use crate::stepper::{Seq, Stepper};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use tracing::{debug, warn};

/// Outcome of a successful [`Driver::run`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report<T> {
    /// The terminal reducer's output.
    pub output: T,

    /// Elements fed into the pipeline.
    pub consumed: usize,

    /// Whether the pipeline ended in a halted state.
    pub halted: bool,
}

impl<T> Report<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Report<U> {
        Report {
            output: f(self.output),
            consumed: self.consumed,
            halted: self.halted,
        }
    }
}

/// Runs reductions, optionally bounded by an element limit.
///
/// The default driver has no limit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    limit: Option<NonZeroUsize>,
}

impl Driver {
    pub(crate) fn new(limit: Option<NonZeroUsize>) -> Self {
        Self { limit }
    }

    pub fn builder() -> DriverBuilder {
        DriverBuilder::new()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit.map(NonZeroUsize::get)
    }

    /// Drive `reducer` across `collection` with `stepper` and finish it.
    ///
    /// Returns [`DriveError::LimitExceeded`] when the source offers more
    /// elements than the limit while the pipeline is still accepting input.
    /// A pipeline that halts on its own at or before the limit succeeds.
    pub fn run<St, C, R>(
        &self,
        stepper: &St,
        reducer: R,
        collection: C,
    ) -> Result<Report<R::Output>, DriveError>
    where
        St: Stepper<C>,
        R: Reducer<St::Item>,
    {
        let meter = Meter {
            inner: reducer,
            consumed: 0,
            limit: self.limit(),
            tripped: None,
        };
        let meter = stepper
            .step(
                |m: Meter<R>, x| m.step(x),
                Reducer::<St::Item>::start(meter),
                collection,
            )
            .into_state();

        if let Some(limit) = meter.tripped {
            warn!(limit, consumed = meter.consumed, "element limit exceeded");
            return Err(DriveError::LimitExceeded { limit });
        }

        let consumed = meter.consumed;
        let halted = meter.inner.is_halted();
        let output = meter.inner.finish();
        debug!(consumed, halted, "reduction finished");

        Ok(Report {
            output,
            consumed,
            halted,
        })
    }

    /// [`run`](Self::run) with the [`Seq`] stepper and `xform` applied to
    /// `reducer`.
    pub fn transduce<T, R, I>(
        &self,
        xform: T,
        reducer: R,
        items: I,
    ) -> Result<Report<<T::Reducer<R> as Reducer<I::Item>>::Output>, DriveError>
    where
        T: Transducer,
        I: IntoIterator,
        T::Reducer<R>: Reducer<I::Item>,
    {
        self.run(&Seq, xform.apply(reducer), items)
    }
}

/// Counts elements on their way into `inner` and trips once the source
/// offers one more than `limit`.
struct Meter<R> {
    inner: R,
    consumed: usize,
    limit: Option<usize>,
    tripped: Option<usize>,
}

impl<In, R> Reducer<In> for Meter<R>
where
    R: Reducer<In>,
{
    type Output = R::Output;

    fn step(mut self, input: In) -> Reply<Self> {
        if Reducer::<In>::is_halted(&self) {
            return Reply::Halt(self);
        }

        if let Some(limit) = self.limit {
            if self.consumed == limit {
                self.tripped = Some(limit);
                return Reply::Halt(self);
            }
        }

        let Meter {
            inner,
            consumed,
            limit,
            tripped,
        } = self;
        inner.step(input).map(|inner| Meter {
            inner,
            consumed: consumed + 1,
            limit,
            tripped,
        })
    }

    fn finish(self) -> R::Output {
        self.inner.finish()
    }

    fn is_halted(&self) -> bool {
        self.tripped.is_some() || self.inner.is_halted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::{count, first, into_vec};
    use crate::xform::{filter, map, take};
    use std::cell::Cell;

    #[test]
    fn default_driver_is_unbounded() {
        let driver = Driver::default();
        assert_eq!(driver.limit(), None);

        let report = driver
            .transduce(map(|x: u64| x * x), into_vec(), 0..1000)
            .unwrap();
        assert_eq!(report.consumed, 1000);
        assert!(!report.halted);
        assert_eq!(report.output[999], 998_001);
    }

    #[test]
    fn exactly_limit_elements_is_fine() {
        let driver = Driver::builder().limit(3).build().unwrap();
        let report = driver.run(&Seq, count(), vec!['a', 'b', 'c']).unwrap();
        assert_eq!(report.output, 3);
        assert_eq!(report.consumed, 3);
        assert!(!report.halted);
    }

    #[test]
    fn one_past_the_limit_fails_without_drawing_further() {
        let drawn = Cell::new(0);
        let source = (1..=10).inspect(|_| drawn.set(drawn.get() + 1));

        let driver = Driver::builder().limit(4).build().unwrap();
        let result = driver.run(&Seq, into_vec(), source);

        assert_eq!(result, Err(DriveError::LimitExceeded { limit: 4 }));
        assert_eq!(drawn.get(), 5);
    }

    #[test]
    fn filtered_elements_count_toward_the_limit() {
        let driver = Driver::builder().limit(2).build().unwrap();
        let result = driver.transduce(filter(|x: &u32| *x > 100), first(), 99..);
        assert_eq!(result, Err(DriveError::LimitExceeded { limit: 2 }));
    }

    #[test]
    fn halting_pipeline_never_trips_the_limit() {
        let driver = Driver::builder().limit(2).build().unwrap();
        let report = driver.transduce(take(2), into_vec(), 1..).unwrap();
        assert_eq!(report.output, vec![1, 2]);
        assert_eq!(report.consumed, 2);
        assert!(report.halted);
    }

    #[test]
    fn halted_is_reported_even_when_the_source_runs_out() {
        let report = Driver::default()
            .transduce(take(3), into_vec(), vec![1, 2, 3])
            .unwrap();
        assert_eq!(report.consumed, 3);
        assert!(report.halted);
    }

    #[test]
    fn halted_pipeline_consumes_nothing() {
        let report = Driver::default().transduce(take(0), count(), 1..).unwrap();
        assert_eq!(report.consumed, 0);
        assert!(report.halted);
        assert_eq!(report.output, 0);
    }

    #[test]
    fn report_map_keeps_counters() {
        let report = Report {
            output: vec![1, 2],
            consumed: 5,
            halted: true,
        };
        let mapped = report.map(|v| v.len());
        assert_eq!(mapped.output, 2);
        assert_eq!(mapped.consumed, 5);
        assert!(mapped.halted);
    }

    #[test]
    fn report_serializes_correctly() {
        let report = Report {
            output: vec!["x".to_string()],
            consumed: 1,
            halted: false,
        };

        let json = serde_json::to_string(&report).unwrap();
        let deserialized: Report<Vec<String>> = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, report);
    }

    #[test]
    fn driver_config_round_trips() {
        let driver = Driver::builder().limit(64).build().unwrap();
        let json = serde_json::to_string(&driver).unwrap();
        let deserialized: Driver = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.limit(), Some(64));
    }

    #[test]
    fn zero_limit_is_rejected_when_deserializing() {
        let result: Result<Driver, _> = serde_json::from_str(r#"{"limit":0}"#);
        assert!(result.is_err());
    }
}
