//! Builder for configuring drivers.

use crate::builder::error::BuildError;
use crate::drive::Driver;
use std::num::NonZeroUsize;

/// Builder for a [`Driver`] with a fluent API.
#[derive(Clone, Debug, Default)]
pub struct DriverBuilder {
    limit: Option<usize>,
}

impl DriverBuilder {
    /// Create a new builder with no limit.
    pub fn new() -> Self {
        Self { limit: None }
    }

    /// Refuse sources that offer more than `n` elements while the pipeline
    /// is still accepting input.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Build the driver.
    /// Returns an error if the limit is zero.
    pub fn build(self) -> Result<Driver, BuildError> {
        let limit = match self.limit {
            Some(n) => Some(NonZeroUsize::new(n).ok_or(BuildError::ZeroLimit)?),
            None => None,
        };

        Ok(Driver::new(limit))
    }
}
