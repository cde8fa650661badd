//! Error types for the time-of-day value and the tooling around it
//!
//! The value type itself has exactly one failure mode, an argument outside the
//! valid interval of a mutator, represented by [`OutOfRange`]. Everything that
//! lives outside the value type (configuration, I/O of the command session)
//! reports through [`ClockError`], which can absorb an [`OutOfRange`] with `?`.

use thiserror::Error;

/// A mutator argument fell outside its documented interval.
///
/// The failed call leaves the time of day untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{field} = {value} out of range")]
pub struct OutOfRange {
    pub field: &'static str,
    pub value: i32,
}

impl OutOfRange {
    pub fn new(field: &'static str, value: i32) -> Self {
        Self { field, value }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("I/O error: {0}")]
    IoError(String),
    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),
}

impl From<std::io::Error> for ClockError {
    fn from(err: std::io::Error) -> Self {
        ClockError::IoError(err.to_string())
    }
}
