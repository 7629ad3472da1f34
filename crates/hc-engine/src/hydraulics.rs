//! Hydraulic calculator: velocity, Reynolds number, friction factor,
//! Darcy-Weisbach pressure drop, pump head and power.

use crate::conditions::ProcessConditions;
use crate::error::{EngineError, EngineResult};
use crate::result::HydraulicResult;
use hc_catalog::{PipeMaterial, PipeSpec};
use hc_core::units::constants::{GRAVITY_MPS2, KELVIN_OFFSET, PA_PER_BAR};
use hc_core::units::{k, pa};
use hc_fluids::PropertyProvider;

/// Laminar/turbulent transition Reynolds number, applied uniformly.
pub const REYNOLDS_TRANSITION: f64 = 2300.0;

const KG_PER_S_PER_T_PER_H: f64 = 1000.0 / 3600.0;

fn check_finite(value: f64, what: &'static str) -> EngineResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EngineError::NonPhysical { what })
    }
}

/// Darcy friction factor for the given regime.
///
/// Turbulent flow (Re ≥ 2300) uses the Haaland approximation to
/// Colebrook-White; laminar flow uses 64/Re. Zero Reynolds number is the
/// defined no-flow case and yields f = 0 so every downstream friction term
/// vanishes.
pub fn friction_factor(reynolds: f64, relative_roughness: f64) -> f64 {
    if reynolds <= 0.0 {
        0.0
    } else if reynolds < REYNOLDS_TRANSITION {
        64.0 / reynolds
    } else {
        let log_term = (relative_roughness / 3.7).powf(1.11) + 6.9 / reynolds;
        (-1.8 * log_term.log10()).powi(-2)
    }
}

/// Run one hydraulic calculation.
///
/// Converts the caller-unit request to SI, resolves fluid properties
/// through the provider, and derives the full pressure-drop and pump-power
/// breakdown. Any failure (validation, property lookup, non-finite
/// intermediate) aborts the call; no partial result is returned.
pub fn compute_hydraulics(
    conditions: &ProcessConditions,
    pipe: &PipeSpec,
    material: PipeMaterial,
    provider: &dyn PropertyProvider,
) -> EngineResult<HydraulicResult> {
    conditions.validate()?;

    let diameter_m = pipe.inner_diameter_m();
    if !diameter_m.is_finite() || diameter_m <= 0.0 {
        return Err(EngineError::InvalidInput {
            what: "pipe inner diameter must be positive",
        });
    }

    let temperature_k = conditions.temperature_c + KELVIN_OFFSET;
    let pressure_pa = conditions.pressure_bar * PA_PER_BAR;
    let mass_flow_kg_s = conditions.mass_flow_t_per_h * KG_PER_S_PER_T_PER_H;

    let props = provider.properties(conditions.liquid, k(temperature_k), pa(pressure_pa))?;
    let rho = props.rho.value;
    let mu = props.mu.value;

    let area_m2 = std::f64::consts::PI * (diameter_m / 2.0) * (diameter_m / 2.0);
    let velocity = mass_flow_kg_s / (rho * area_m2);
    let reynolds = rho * velocity * diameter_m / mu;
    check_finite(reynolds, "Reynolds number")?;

    let roughness_m = material.roughness_mm() / 1000.0;
    let friction = friction_factor(reynolds, roughness_m / diameter_m);

    tracing::debug!(
        reynolds,
        friction_factor = friction,
        turbulent = reynolds >= REYNOLDS_TRANSITION,
        "flow regime resolved"
    );

    let effective_length_m = conditions.straight_length_m + conditions.fitting_equivalent_length_m;

    let friction_drop_pa =
        friction * (effective_length_m / diameter_m) * (rho * velocity * velocity / 2.0);
    let static_drop_pa = rho * GRAVITY_MPS2 * conditions.elevation_change_m;
    let total_drop_pa = friction_drop_pa + static_drop_pa;
    check_finite(total_drop_pa, "total pressure drop")?;

    let pump_head_m = total_drop_pa / (rho * GRAVITY_MPS2);

    // t/h over t/m³ gives the volumetric flow in m³/h directly
    let volumetric_flow_m3_h = conditions.mass_flow_t_per_h / (rho / 1000.0);
    let hydraulic_power_kw = volumetric_flow_m3_h * pump_head_m * rho * GRAVITY_MPS2 / 3.6e6;
    let shaft_power_kw = hydraulic_power_kw / (conditions.pump_efficiency_pct / 100.0);

    Ok(HydraulicResult {
        total_pressure_drop_bar: total_drop_pa / PA_PER_BAR,
        friction_pressure_drop_bar: friction_drop_pa / PA_PER_BAR,
        static_pressure_drop_bar: static_drop_pa / PA_PER_BAR,
        velocity_m_per_s: velocity,
        reynolds_number: reynolds,
        friction_factor: friction,
        density_kg_per_m3: rho,
        viscosity_pa_s: mu,
        pump_head_m,
        hydraulic_power_kw,
        shaft_power_kw,
        inner_diameter_mm: pipe.inner_diameter_mm(),
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use hc_catalog::{lookup, NominalSize, Schedule};
    use hc_core::units::{kgpm3, pas};
    use hc_fluids::{FixedPropertyProvider, Liquid, LiquidProperties};
    use proptest::prelude::*;

    fn compute_for_flow(mass_flow_t_per_h: f64) -> HydraulicResult {
        let provider = FixedPropertyProvider::new(LiquidProperties {
            rho: kgpm3(943.1),
            mu: pas(2.32e-4),
        });
        let pipe = lookup(NominalSize::FourInch, Schedule::Sch40).unwrap();
        let conditions =
            ProcessConditions::new(Liquid::Water, 120.0, 40.0, mass_flow_t_per_h, 5000.0);
        compute_hydraulics(&conditions, &pipe, PipeMaterial::CarbonSteel, &provider).unwrap()
    }

    proptest! {
        #[test]
        fn velocity_and_reynolds_increase_with_mass_flow(
            low in 0.1_f64..200.0,
            delta in 0.5_f64..200.0,
        ) {
            let high = low + delta;
            let a = compute_for_flow(low);
            let b = compute_for_flow(high);
            prop_assert!(b.velocity_m_per_s > a.velocity_m_per_s);
            prop_assert!(b.reynolds_number > a.reynolds_number);
        }

        #[test]
        fn total_drop_is_always_friction_plus_static(flow in 0.0_f64..300.0) {
            let result = compute_for_flow(flow);
            let sum = result.friction_pressure_drop_bar + result.static_pressure_drop_bar;
            prop_assert!((result.total_pressure_drop_bar - sum).abs() < 1e-9);
        }
    }
}
