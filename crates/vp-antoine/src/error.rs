//! Coefficient library errors.

use thiserror::Error;
use vp_core::{Real, VpError};

/// Result type for correlation and library operations.
pub type AntoineResult<T> = Result<T, AntoineError>;

/// Errors surfaced by coefficient lookup and correlation evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AntoineError {
    /// The species was never registered in this library.
    #[error("{species} is not in this coefficient library")]
    SpeciesNotFound { species: String },

    /// The species exists but no registered interval covers the temperature.
    #[error(
        "No coefficient set has a temperature range containing {temperature} {units}"
    )]
    TemperatureOutOfRange { temperature: Real, units: String },

    /// No coefficient set yields a saturation temperature inside its own interval.
    #[error(
        "No coefficient set has a saturation temperature in range for {pressure} {units}"
    )]
    PressureOutOfRange { pressure: Real, units: String },

    /// Arithmetic failure or violated internal invariant.
    #[error(transparent)]
    Numeric(#[from] VpError),
}
