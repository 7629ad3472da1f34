//! Fixed-property provider.
//!
//! When the engineer already knows the fluid state (a datasheet value, or a
//! condition outside the backend's envelope), density and viscosity are
//! supplied directly and returned for every query. This is also the natural
//! provider for deterministic tests.

use crate::error::FluidResult;
use crate::model::{validation, LiquidProperties, PropertyProvider};
use crate::species::Liquid;
use hc_core::units::{Pressure, Temperature};

/// Provider that returns the same properties for every state.
#[derive(Debug, Clone, Copy)]
pub struct FixedPropertyProvider {
    props: LiquidProperties,
}

impl FixedPropertyProvider {
    /// Create a provider pinned to the given properties.
    pub fn new(props: LiquidProperties) -> Self {
        Self { props }
    }
}

impl PropertyProvider for FixedPropertyProvider {
    fn name(&self) -> &str {
        "fixed"
    }

    fn properties(
        &self,
        _liquid: Liquid,
        temperature: Temperature,
        pressure: Pressure,
    ) -> FluidResult<LiquidProperties> {
        validation::validate_temperature(temperature)?;
        validation::validate_pressure(pressure)?;
        validation::validate_properties(&self.props)?;
        Ok(self.props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FluidError;
    use hc_core::units::{k, kgpm3, pa, pas};

    #[test]
    fn returns_pinned_properties() {
        let provider = FixedPropertyProvider::new(LiquidProperties {
            rho: kgpm3(943.1),
            mu: pas(2.32e-4),
        });

        let props = provider
            .properties(Liquid::Water, k(393.15), pa(4.0e6))
            .unwrap();
        assert_eq!(props.rho.value, 943.1);
        assert_eq!(props.mu.value, 2.32e-4);
    }

    #[test]
    fn still_validates_the_state() {
        let provider = FixedPropertyProvider::new(LiquidProperties {
            rho: kgpm3(943.1),
            mu: pas(2.32e-4),
        });

        let result = provider.properties(Liquid::Water, k(-5.0), pa(4.0e6));
        assert!(matches!(result, Err(FluidError::NonPhysical { .. })));
    }

    #[test]
    fn rejects_non_physical_pinned_values() {
        let provider = FixedPropertyProvider::new(LiquidProperties {
            rho: kgpm3(-1.0),
            mu: pas(2.32e-4),
        });

        let result = provider.properties(Liquid::Water, k(300.0), pa(1.0e5));
        assert!(result.is_err());
    }
}
