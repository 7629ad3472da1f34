//! Fluid property errors.

use thiserror::Error;

/// Result type for property lookups.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur during fluid property lookup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Non-physical values (negative pressure, zero temperature, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Backend (CoolProp) error, e.g. a state outside the correlation's
    /// valid envelope.
    #[error("Backend error: {message}")]
    Backend { message: String },
}
