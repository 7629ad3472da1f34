//! Wall-thickness safety check.
//!
//! Simplified minimum-thickness formula with fixed coefficients:
//! quality/joint factor E = 1.0 (seamless), temperature coefficient Y = 0.4
//! (ferritic steel below 482 °C; not re-validated against the actual design
//! temperature), corrosion allowance C = 1.0 mm.

use crate::error::{EngineError, EngineResult};
use crate::result::SafetyCheckResult;

const QUALITY_FACTOR_E: f64 = 1.0;
const TEMPERATURE_COEFFICIENT_Y: f64 = 0.4;
const CORROSION_ALLOWANCE_MM: f64 = 1.0;
const MPA_PER_BAR: f64 = 0.1;

/// Check whether a wall thickness is adequate for the design pressure.
///
/// Pure function of four scalars plus the fixed coefficients; calling twice
/// with identical inputs yields identical results.
pub fn check_wall_thickness(
    design_pressure_bar: f64,
    allowable_stress_mpa: f64,
    outside_diameter_mm: f64,
    actual_thickness_mm: f64,
) -> EngineResult<SafetyCheckResult> {
    let fields = [
        (design_pressure_bar, "design pressure"),
        (allowable_stress_mpa, "allowable stress"),
        (outside_diameter_mm, "outside diameter"),
        (actual_thickness_mm, "actual wall thickness"),
    ];
    for (value, what) in fields {
        if !value.is_finite() {
            return Err(EngineError::InvalidInput { what });
        }
    }

    if design_pressure_bar <= 0.0 {
        return Err(EngineError::InvalidInput {
            what: "design pressure must be positive",
        });
    }
    if allowable_stress_mpa <= 0.0 {
        return Err(EngineError::InvalidInput {
            what: "allowable stress must be positive",
        });
    }
    if outside_diameter_mm <= 0.0 {
        return Err(EngineError::InvalidInput {
            what: "outside diameter must be positive",
        });
    }
    if actual_thickness_mm <= 0.0 {
        return Err(EngineError::InvalidInput {
            what: "actual wall thickness must be positive",
        });
    }

    let pressure_mpa = design_pressure_bar * MPA_PER_BAR;
    let pressure_thickness_mm = (pressure_mpa * outside_diameter_mm)
        / (2.0 * (allowable_stress_mpa * QUALITY_FACTOR_E + pressure_mpa * TEMPERATURE_COEFFICIENT_Y));
    let required_thickness_mm = pressure_thickness_mm + CORROSION_ALLOWANCE_MM;
    let safety_factor = actual_thickness_mm / required_thickness_mm;

    Ok(SafetyCheckResult {
        required_thickness_mm,
        actual_thickness_mm,
        safety_factor,
        is_safe: safety_factor >= 1.0,
    })
}
