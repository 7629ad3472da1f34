//! Material catalogs.
//!
//! Two independent tables: commercial pipe materials carry an absolute
//! roughness for the hydraulic calculation, and ASTM product specifications
//! carry an allowable stress for the wall-thickness check. A material usable
//! for one is not guaranteed usable for the other.

/// Commercial pipe material with its absolute roughness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipeMaterial {
    CarbonSteel,
    StainlessSteel,
    Copper,
    Pvc,
    Concrete,
    GalvanisedSteel,
}

impl PipeMaterial {
    pub const ALL: [PipeMaterial; 6] = [
        PipeMaterial::CarbonSteel,
        PipeMaterial::StainlessSteel,
        PipeMaterial::Copper,
        PipeMaterial::Pvc,
        PipeMaterial::Concrete,
        PipeMaterial::GalvanisedSteel,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PipeMaterial::CarbonSteel => "Carbon Steel",
            PipeMaterial::StainlessSteel => "Stainless Steel",
            PipeMaterial::Copper => "Copper",
            PipeMaterial::Pvc => "PVC",
            PipeMaterial::Concrete => "Concrete",
            PipeMaterial::GalvanisedSteel => "Galvanised Steel",
        }
    }

    /// Absolute roughness [mm].
    pub fn roughness_mm(&self) -> f64 {
        match self {
            PipeMaterial::CarbonSteel => 0.045,
            PipeMaterial::StainlessSteel => 0.0015,
            PipeMaterial::Copper => 0.0015,
            PipeMaterial::Pvc => 0.0015,
            PipeMaterial::Concrete => 0.01,
            PipeMaterial::GalvanisedSteel => 0.15,
        }
    }
}

impl std::str::FromStr for PipeMaterial {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "carbon steel" => Ok(PipeMaterial::CarbonSteel),
            "stainless steel" => Ok(PipeMaterial::StainlessSteel),
            "copper" => Ok(PipeMaterial::Copper),
            "pvc" => Ok(PipeMaterial::Pvc),
            "concrete" => Ok(PipeMaterial::Concrete),
            "galvanised steel" | "galvanized steel" => Ok(PipeMaterial::GalvanisedSteel),
            _ => Err("unknown pipe material"),
        }
    }
}

/// ASTM product specification with its allowable design stress.
///
/// Room-temperature values; design above ~100 °C should consult the
/// governing code tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StressGrade {
    A106B,
    A53B,
    A335P11,
    A335P91,
    Tp304,
    Tp316,
}

impl StressGrade {
    pub const ALL: [StressGrade; 6] = [
        StressGrade::A106B,
        StressGrade::A53B,
        StressGrade::A335P11,
        StressGrade::A335P91,
        StressGrade::Tp304,
        StressGrade::Tp316,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StressGrade::A106B => "ASTM A106 Gr.B",
            StressGrade::A53B => "ASTM A53 Gr.B",
            StressGrade::A335P11 => "ASTM A335 P11",
            StressGrade::A335P91 => "ASTM A335 P91",
            StressGrade::Tp304 => "ASTM A312 TP304",
            StressGrade::Tp316 => "ASTM A312 TP316",
        }
    }

    /// Allowable stress S [MPa].
    pub fn allowable_stress_mpa(&self) -> f64 {
        match self {
            StressGrade::A106B => 138.0,
            StressGrade::A53B => 138.0,
            StressGrade::A335P11 => 120.0,
            StressGrade::A335P91 => 165.0,
            StressGrade::Tp304 => 138.0,
            StressGrade::Tp316 => 138.0,
        }
    }
}

impl std::str::FromStr for StressGrade {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A106B" | "ASTM A106 GR.B" => Ok(StressGrade::A106B),
            "A53B" | "ASTM A53 GR.B" => Ok(StressGrade::A53B),
            "A335P11" | "ASTM A335 P11" => Ok(StressGrade::A335P11),
            "A335P91" | "ASTM A335 P91" => Ok(StressGrade::A335P91),
            "TP304" | "ASTM A312 TP304" => Ok(StressGrade::Tp304),
            "TP316" | "ASTM A312 TP316" => Ok(StressGrade::Tp316),
            _ => Err("unknown stress grade"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roughness_is_non_negative() {
        for material in PipeMaterial::ALL {
            assert!(material.roughness_mm() >= 0.0, "{:?}", material);
        }
    }

    #[test]
    fn carbon_steel_roughness() {
        assert_eq!(PipeMaterial::CarbonSteel.roughness_mm(), 0.045);
        assert_eq!(PipeMaterial::GalvanisedSteel.roughness_mm(), 0.15);
    }

    #[test]
    fn allowable_stress_is_positive() {
        for grade in StressGrade::ALL {
            assert!(grade.allowable_stress_mpa() > 0.0, "{:?}", grade);
        }
    }

    #[test]
    fn labels_parse_back() {
        for material in PipeMaterial::ALL {
            let parsed: PipeMaterial = material.label().parse().unwrap();
            assert_eq!(parsed, material);
        }
        for grade in StressGrade::ALL {
            let parsed: StressGrade = grade.label().parse().unwrap();
            assert_eq!(parsed, grade);
        }
    }

    #[test]
    fn galvanized_spelling_alias() {
        let parsed: PipeMaterial = "Galvanized Steel".parse().unwrap();
        assert_eq!(parsed, PipeMaterial::GalvanisedSteel);
    }
}
