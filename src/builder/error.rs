//! Build errors for pipeline configuration.

use thiserror::Error;

/// Errors that can occur when configuring a driver.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Element limit must be positive. Omit .limit() to drive without one")]
    ZeroLimit,
}
