//! Result types produced by the engine.

/// Output of one hydraulic calculation.
///
/// Produced once per call and immutable; persistence and display are
/// separate steps composed by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct HydraulicResult {
    pub total_pressure_drop_bar: f64,
    pub friction_pressure_drop_bar: f64,
    pub static_pressure_drop_bar: f64,
    pub velocity_m_per_s: f64,
    pub reynolds_number: f64,
    pub friction_factor: f64,
    pub density_kg_per_m3: f64,
    pub viscosity_pa_s: f64,
    pub pump_head_m: f64,
    pub hydraulic_power_kw: f64,
    pub shaft_power_kw: f64,
    pub inner_diameter_mm: f64,
}

/// Output of the wall-thickness safety check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafetyCheckResult {
    /// Required minimum thickness including corrosion allowance [mm]
    pub required_thickness_mm: f64,
    pub actual_thickness_mm: f64,
    /// actual / required
    pub safety_factor: f64,
    pub is_safe: bool,
}
