//! Error types for the dewpoint-analysis crate.
use thiserror::Error;

/// Error type for the crate.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum DewPointError {
    /// Zero, two, or three of the optional humidity fields were supplied
    /// where exactly one is required.
    #[error("exactly one of the rh, rhl, and rhs humidities must be supplied")]
    InvalidHumiditySpecification,
    /// The frost point and the maximum of dew and frost point were requested
    /// at the same time.
    #[error("the frost point and the dew/frost maximum cannot both be requested")]
    InvalidOutputModeSpecification,
    /// Bad or invalid numeric input.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}

/// Shorthand for results.
pub type Result<T> = std::result::Result<T, DewPointError>;
