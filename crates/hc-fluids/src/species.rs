//! Pumpable liquid definitions.

/// Pure liquids supported by the hydraulic calculator.
///
/// The list is restricted to fluids that are pumped as single-phase liquids
/// in common plant service and that the CoolProp backend resolves reliably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Liquid {
    /// Water (H₂O)
    Water,
    /// Ammonia (NH₃)
    Ammonia,
    /// Propane (LPG component)
    Propane,
    /// n-Butane (LPG component)
    NButane,
    /// Refrigerant R134a
    R134a,
}

impl Liquid {
    pub const ALL: [Liquid; 5] = [
        Liquid::Water,
        Liquid::Ammonia,
        Liquid::Propane,
        Liquid::NButane,
        Liquid::R134a,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Liquid::Water => "H2O",
            Liquid::Ammonia => "NH3",
            Liquid::Propane => "Propane",
            Liquid::NButane => "nButane",
            Liquid::R134a => "R134a",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Liquid::Water => "Water",
            Liquid::Ammonia => "Ammonia",
            Liquid::Propane => "Propane",
            Liquid::NButane => "n-Butane",
            Liquid::R134a => "R134a",
        }
    }

    /// Map to the rfluids Pure enum (internal use for the CoolProp backend).
    pub(crate) fn rfluids_pure(&self) -> rfluids::substance::Pure {
        use rfluids::substance::Pure;
        match self {
            Liquid::Water => Pure::Water,
            Liquid::Ammonia => Pure::Ammonia,
            Liquid::Propane => Pure::nPropane,
            Liquid::NButane => Pure::nButane,
            Liquid::R134a => Pure::R134a,
        }
    }
}

impl std::str::FromStr for Liquid {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "H2O" | "WATER" => Ok(Liquid::Water),
            "NH3" | "AMMONIA" => Ok(Liquid::Ammonia),
            "PROPANE" | "C3H8" => Ok(Liquid::Propane),
            "NBUTANE" | "N-BUTANE" | "BUTANE" => Ok(Liquid::NButane),
            "R134A" => Ok(Liquid::R134a),
            _ => Err("unknown liquid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_aliases() {
        assert_eq!("water".parse::<Liquid>().unwrap(), Liquid::Water);
        assert_eq!("NH3".parse::<Liquid>().unwrap(), Liquid::Ammonia);
        assert_eq!("n-Butane".parse::<Liquid>().unwrap(), Liquid::NButane);
    }

    #[test]
    fn canonical_key_roundtrip() {
        for liquid in Liquid::ALL {
            let parsed = liquid.key().parse::<Liquid>().expect("key should parse");
            assert_eq!(parsed, liquid);
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(Liquid::Water.display_name(), "Water");
        assert_eq!(Liquid::NButane.display_name(), "n-Butane");
    }
}
