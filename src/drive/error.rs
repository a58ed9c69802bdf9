//! Errors raised while driving a reduction.

use thiserror::Error;

/// Errors that can occur during a [`Driver`](super::Driver) run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DriveError {
    #[error("Source yielded more than {limit} elements while the pipeline was still accepting input")]
    LimitExceeded { limit: usize },
}
