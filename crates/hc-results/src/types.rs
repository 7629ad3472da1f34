//! Record data types.

use hc_catalog::{PipeMaterial, PipeSpec};
use hc_engine::{HydraulicResult, SafetyCheckResult};
use hc_fluids::Liquid;
use serde::{Deserialize, Serialize};

/// Current UTC time as an RFC3339 string, the record timestamp format.
pub fn utc_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// One persisted calculation.
///
/// Flat scalar schema so reporting collaborators (tables, CSV export,
/// charting) can consume it without knowing engine types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculationRecord {
    /// Content hash of the selection and the computed values; stable across
    /// re-runs of the same calculation, independent of tag and timestamp.
    pub record_id: String,
    /// Caller-supplied label for the calculation
    pub tag: String,
    /// RFC3339 timestamp
    pub timestamp: String,

    pub fluid: String,
    pub material: String,
    pub nominal_size: String,
    pub schedule: String,

    pub total_pressure_drop_bar: f64,
    pub friction_pressure_drop_bar: f64,
    pub static_pressure_drop_bar: f64,
    pub velocity_m_per_s: f64,
    pub reynolds_number: f64,
    pub friction_factor: f64,
    pub pump_head_m: f64,
    pub shaft_power_kw: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_safe: Option<bool>,
}

impl CalculationRecord {
    pub fn new(
        tag: impl Into<String>,
        timestamp: impl Into<String>,
        fluid: Liquid,
        material: PipeMaterial,
        pipe: &PipeSpec,
        hydraulics: &HydraulicResult,
        safety: Option<&SafetyCheckResult>,
    ) -> Self {
        let mut record = Self {
            record_id: String::new(),
            tag: tag.into(),
            timestamp: timestamp.into(),
            fluid: fluid.key().to_string(),
            material: material.label().to_string(),
            nominal_size: pipe.nominal_size.label().to_string(),
            schedule: pipe.schedule.label().to_string(),
            total_pressure_drop_bar: hydraulics.total_pressure_drop_bar,
            friction_pressure_drop_bar: hydraulics.friction_pressure_drop_bar,
            static_pressure_drop_bar: hydraulics.static_pressure_drop_bar,
            velocity_m_per_s: hydraulics.velocity_m_per_s,
            reynolds_number: hydraulics.reynolds_number,
            friction_factor: hydraulics.friction_factor,
            pump_head_m: hydraulics.pump_head_m,
            shaft_power_kw: hydraulics.shaft_power_kw,
            safety_factor: safety.map(|s| s.safety_factor),
            is_safe: safety.map(|s| s.is_safe),
        };
        record.record_id = crate::hash::compute_record_id(&record);
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hc_catalog::{lookup, NominalSize, Schedule};

    fn sample_hydraulics() -> HydraulicResult {
        HydraulicResult {
            total_pressure_drop_bar: 49.2,
            friction_pressure_drop_bar: 49.2,
            static_pressure_drop_bar: 0.0,
            velocity_m_per_s: 3.59,
            reynolds_number: 1.49e6,
            friction_factor: 0.0166,
            density_kg_per_m3: 943.1,
            viscosity_pa_s: 2.32e-4,
            pump_head_m: 531.8,
            hydraulic_power_kw: 144.9,
            shaft_power_kw: 193.2,
            inner_diameter_mm: 102.26,
        }
    }

    #[test]
    fn serde_round_trip() {
        let pipe = lookup(NominalSize::FourInch, Schedule::Sch40).unwrap();
        let record = CalculationRecord::new(
            "transfer line",
            "2024-05-01T10:00:00+00:00",
            Liquid::Water,
            PipeMaterial::CarbonSteel,
            &pipe,
            &sample_hydraulics(),
            None,
        );

        let json = serde_json::to_string(&record).unwrap();
        let back: CalculationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn optional_safety_fields_are_omitted_when_absent() {
        let pipe = lookup(NominalSize::FourInch, Schedule::Sch40).unwrap();
        let record = CalculationRecord::new(
            "no check",
            "2024-05-01T10:00:00+00:00",
            Liquid::Water,
            PipeMaterial::CarbonSteel,
            &pipe,
            &sample_hydraulics(),
            None,
        );

        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("safety_factor"));
        assert!(!json.contains("is_safe"));
    }

    #[test]
    fn labels_land_in_the_record() {
        let pipe = lookup(NominalSize::TwelveInch, Schedule::Xs).unwrap();
        let record = CalculationRecord::new(
            "big line",
            utc_timestamp(),
            Liquid::Ammonia,
            PipeMaterial::StainlessSteel,
            &pipe,
            &sample_hydraulics(),
            None,
        );

        assert_eq!(record.fluid, "NH3");
        assert_eq!(record.material, "Stainless Steel");
        assert_eq!(record.nominal_size, "12 inch");
        assert_eq!(record.schedule, "XS");
        assert!(!record.record_id.is_empty());
    }
}
