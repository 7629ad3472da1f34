//! CoolProp-based property provider.

use crate::error::{FluidError, FluidResult};
use crate::model::{validation, LiquidProperties, PropertyProvider};
use crate::species::Liquid;
use hc_core::units::{kgpm3, pas, Pressure, Temperature};
use rfluids::prelude::*;

/// CoolProp backend for liquid properties.
///
/// Thread-safe: rfluids Fluid instances are created per query and hold no
/// shared state.
pub struct CoolPropProvider {}

impl CoolPropProvider {
    /// Create a new CoolProp provider.
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for CoolPropProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyProvider for CoolPropProvider {
    fn name(&self) -> &str {
        "CoolProp"
    }

    fn properties(
        &self,
        liquid: Liquid,
        temperature: Temperature,
        pressure: Pressure,
    ) -> FluidResult<LiquidProperties> {
        validation::validate_temperature(temperature)?;
        validation::validate_pressure(pressure)?;

        let t_k = temperature.value;
        let p_pa = pressure.value;

        let mut fluid = Fluid::from(liquid.rfluids_pure())
            .in_state(FluidInput::pressure(p_pa), FluidInput::temperature(t_k))
            .map_err(|e| FluidError::Backend {
                message: format!("rfluids error at P={} Pa, T={} K: {}", p_pa, t_k, e),
            })?;

        let rho = fluid.density().map_err(|e| FluidError::Backend {
            message: format!("rfluids error getting density: {}", e),
        })?;

        let mu = fluid.dynamic_viscosity().map_err(|e| FluidError::Backend {
            message: format!("rfluids error getting viscosity: {}", e),
        })?;

        let props = LiquidProperties {
            rho: kgpm3(rho),
            mu: pas(mu),
        };
        validation::validate_properties(&props)?;
        Ok(props)
    }
}
