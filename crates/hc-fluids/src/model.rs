//! Property provider trait and validation helpers.

use crate::error::{FluidError, FluidResult};
use crate::species::Liquid;
use hc_core::units::{Density, DynVisc, Pressure, Temperature};

/// Thermophysical state of a liquid at one (T, P) point.
#[derive(Debug, Clone, Copy)]
pub struct LiquidProperties {
    /// Density [kg/m³]
    pub rho: Density,
    /// Dynamic viscosity [Pa·s]
    pub mu: DynVisc,
}

/// Trait for fluid property providers.
///
/// Implementations must be thread-safe (Send + Sync) so callers may evaluate
/// independent calculations in parallel. A provider is fallible at any input;
/// callers propagate the failure and never substitute default properties.
pub trait PropertyProvider: Send + Sync {
    /// Get the provider name (for debugging/logging).
    fn name(&self) -> &str;

    /// Resolve density and dynamic viscosity at the given state.
    fn properties(
        &self,
        liquid: Liquid,
        temperature: Temperature,
        pressure: Pressure,
    ) -> FluidResult<LiquidProperties>;
}

/// Validation helpers for provider inputs and outputs.
pub(crate) mod validation {
    use super::*;

    /// Ensure pressure is positive and finite.
    pub fn validate_pressure(p: Pressure) -> FluidResult<()> {
        if !p.value.is_finite() || p.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure temperature is positive and finite.
    pub fn validate_temperature(t: Temperature) -> FluidResult<()> {
        if !t.value.is_finite() || t.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure resolved properties are physically plausible.
    pub fn validate_properties(props: &LiquidProperties) -> FluidResult<()> {
        if !props.rho.value.is_finite() || props.rho.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "density must be positive and finite",
            });
        }
        if !props.mu.value.is_finite() || props.mu.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "viscosity must be positive and finite",
            });
        }
        Ok(())
    }
}
