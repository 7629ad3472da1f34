//! Error types for engine calculations.

use hc_fluids::FluidError;
use thiserror::Error;

/// Errors that can fail a calculation. No partial result accompanies any of
/// these; a calculation either completes or surfaces one typed failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Rejected before any physics computation.
    #[error("Invalid input: {what}")]
    InvalidInput { what: &'static str },

    /// A computed quantity stopped being finite.
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    /// The property provider could not resolve the requested state.
    #[error("Property lookup failed: {0}")]
    PropertyLookup(#[from] FluidError),
}

pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EngineError::InvalidInput {
            what: "pump efficiency must be in (0, 100]",
        };
        assert!(err.to_string().contains("pump efficiency"));
    }

    #[test]
    fn fluid_error_converts() {
        let fluid_err = FluidError::Backend {
            message: "out of range".into(),
        };
        let err: EngineError = fluid_err.into();
        assert!(matches!(err, EngineError::PropertyLookup(_)));
    }
}
