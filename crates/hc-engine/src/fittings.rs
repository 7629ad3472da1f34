//! Fitting equivalent-length resolution.

use hc_catalog::Fitting;

/// Convert fitting counts into an equivalent straight-pipe length [m].
///
/// Each entry contributes `quantity × (L/D) × inner_diameter`. Zero
/// quantities contribute zero, so a fitting may equivalently be omitted;
/// repeated entries for the same fitting accumulate.
pub fn resolve_equivalent_length(counts: &[(Fitting, u32)], inner_diameter_m: f64) -> f64 {
    counts
        .iter()
        .map(|(fitting, quantity)| f64::from(*quantity) * fitting.ld_ratio() * inner_diameter_m)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const D: f64 = 0.10226;

    #[test]
    fn no_fittings_means_zero_length() {
        assert_eq!(resolve_equivalent_length(&[], D), 0.0);
    }

    #[test]
    fn zero_quantity_is_equivalent_to_absence() {
        let with_zero = resolve_equivalent_length(&[(Fitting::Elbow90, 0)], D);
        assert_eq!(with_zero, 0.0);
    }

    #[test]
    fn any_fitting_strictly_increases_length() {
        let base = resolve_equivalent_length(&[(Fitting::GateValve, 2)], D);
        let more = resolve_equivalent_length(&[(Fitting::GateValve, 2), (Fitting::Elbow90, 1)], D);
        assert!(more > base);
    }

    #[test]
    fn repeated_entries_accumulate() {
        let split = resolve_equivalent_length(&[(Fitting::Elbow90, 2), (Fitting::Elbow90, 3)], D);
        let merged = resolve_equivalent_length(&[(Fitting::Elbow90, 5)], D);
        assert!((split - merged).abs() < 1e-12);
    }

    #[test]
    fn matches_hand_computation() {
        // 4 × 90° elbow (L/D 30) + 1 globe valve (L/D 340) on a 102.26 mm bore
        let length = resolve_equivalent_length(
            &[(Fitting::Elbow90, 4), (Fitting::GlobeValve, 1)],
            D,
        );
        let expected = (4.0 * 30.0 + 340.0) * D;
        assert!((length - expected).abs() < 1e-12);
    }
}
