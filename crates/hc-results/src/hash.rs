//! Content-based hashing for record IDs.

use crate::types::CalculationRecord;
use sha2::{Digest, Sha256};

/// Compute the content id for a record.
///
/// Hashes the selection labels and the computed values, but not the tag or
/// timestamp, so the same calculation run twice yields the same id.
pub fn compute_record_id(record: &CalculationRecord) -> String {
    let mut hasher = Sha256::new();

    for label in [
        &record.fluid,
        &record.material,
        &record.nominal_size,
        &record.schedule,
    ] {
        hasher.update(label.as_bytes());
        hasher.update([0u8]);
    }

    let values = [
        record.total_pressure_drop_bar,
        record.friction_pressure_drop_bar,
        record.static_pressure_drop_bar,
        record.velocity_m_per_s,
        record.reynolds_number,
        record.friction_factor,
        record.pump_head_m,
        record.shaft_power_kw,
        record.safety_factor.unwrap_or(f64::NAN),
    ];
    for value in values {
        hasher.update(value.to_le_bytes());
    }
    hasher.update([u8::from(record.is_safe == Some(true))]);

    let result = hasher.finalize();
    format!("{:x}", result)
}
