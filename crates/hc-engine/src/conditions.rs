//! Process conditions: the calculation request.

use crate::error::{EngineError, EngineResult};
use hc_core::units::constants::KELVIN_OFFSET;
use hc_fluids::Liquid;

/// Pump efficiency assumed when the caller does not set one [%].
pub const DEFAULT_PUMP_EFFICIENCY_PCT: f64 = 75.0;

/// Fully-specified, immutable inputs for one hydraulic calculation.
///
/// Constructed per request; the engine holds no selection state between
/// calls. Caller-facing units (°C, bar, t/h, m, %) are converted to SI
/// inside the calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessConditions {
    pub liquid: Liquid,
    pub temperature_c: f64,
    /// Absolute line pressure [bar]
    pub pressure_bar: f64,
    pub mass_flow_t_per_h: f64,
    pub straight_length_m: f64,
    /// Equivalent length contributed by fittings [m]; 0 when the run has
    /// none or the caller lumps them into the straight length
    pub fitting_equivalent_length_m: f64,
    /// Signed elevation change [m]; positive = lift
    pub elevation_change_m: f64,
    pub pump_efficiency_pct: f64,
}

impl ProcessConditions {
    pub fn new(
        liquid: Liquid,
        temperature_c: f64,
        pressure_bar: f64,
        mass_flow_t_per_h: f64,
        straight_length_m: f64,
    ) -> Self {
        Self {
            liquid,
            temperature_c,
            pressure_bar,
            mass_flow_t_per_h,
            straight_length_m,
            fitting_equivalent_length_m: 0.0,
            elevation_change_m: 0.0,
            pump_efficiency_pct: DEFAULT_PUMP_EFFICIENCY_PCT,
        }
    }

    pub fn with_fitting_equivalent_length(mut self, length_m: f64) -> Self {
        self.fitting_equivalent_length_m = length_m;
        self
    }

    pub fn with_elevation_change(mut self, elevation_m: f64) -> Self {
        self.elevation_change_m = elevation_m;
        self
    }

    pub fn with_pump_efficiency(mut self, efficiency_pct: f64) -> Self {
        self.pump_efficiency_pct = efficiency_pct;
        self
    }

    /// Reject malformed requests before any physics computation.
    pub fn validate(&self) -> EngineResult<()> {
        let fields = [
            (self.temperature_c, "temperature"),
            (self.pressure_bar, "pressure"),
            (self.mass_flow_t_per_h, "mass flow"),
            (self.straight_length_m, "straight length"),
            (self.fitting_equivalent_length_m, "fitting equivalent length"),
            (self.elevation_change_m, "elevation change"),
            (self.pump_efficiency_pct, "pump efficiency"),
        ];
        for (value, what) in fields {
            if !value.is_finite() {
                return Err(EngineError::InvalidInput { what });
            }
        }

        if self.temperature_c <= -KELVIN_OFFSET {
            return Err(EngineError::InvalidInput {
                what: "temperature must be above absolute zero",
            });
        }
        if self.pressure_bar <= 0.0 {
            return Err(EngineError::InvalidInput {
                what: "pressure must be positive",
            });
        }
        if self.mass_flow_t_per_h < 0.0 {
            return Err(EngineError::InvalidInput {
                what: "mass flow cannot be negative",
            });
        }
        if self.straight_length_m < 0.0 {
            return Err(EngineError::InvalidInput {
                what: "straight length cannot be negative",
            });
        }
        if self.fitting_equivalent_length_m < 0.0 {
            return Err(EngineError::InvalidInput {
                what: "fitting equivalent length cannot be negative",
            });
        }
        if self.pump_efficiency_pct <= 0.0 || self.pump_efficiency_pct > 100.0 {
            return Err(EngineError::InvalidInput {
                what: "pump efficiency must be in (0, 100]",
            });
        }

        Ok(())
    }
}
