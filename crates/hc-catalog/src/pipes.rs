//! Pipe geometry table: nominal size × schedule → outside diameter and wall
//! thickness, per ASME B36.10M carbon-steel dimensions.

/// Nominal Pipe Size: a labeled diameter class, not the literal OD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NominalSize {
    HalfInch,
    OneInch,
    TwoInch,
    ThreeInch,
    FourInch,
    SixInch,
    EightInch,
    TenInch,
    TwelveInch,
}

impl NominalSize {
    pub const ALL: [NominalSize; 9] = [
        NominalSize::HalfInch,
        NominalSize::OneInch,
        NominalSize::TwoInch,
        NominalSize::ThreeInch,
        NominalSize::FourInch,
        NominalSize::SixInch,
        NominalSize::EightInch,
        NominalSize::TenInch,
        NominalSize::TwelveInch,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NominalSize::HalfInch => "1/2 inch",
            NominalSize::OneInch => "1 inch",
            NominalSize::TwoInch => "2 inch",
            NominalSize::ThreeInch => "3 inch",
            NominalSize::FourInch => "4 inch",
            NominalSize::SixInch => "6 inch",
            NominalSize::EightInch => "8 inch",
            NominalSize::TenInch => "10 inch",
            NominalSize::TwelveInch => "12 inch",
        }
    }
}

impl std::str::FromStr for NominalSize {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1/2 inch" | "1/2" | "1/2\"" => Ok(NominalSize::HalfInch),
            "1 inch" | "1" | "1\"" => Ok(NominalSize::OneInch),
            "2 inch" | "2" | "2\"" => Ok(NominalSize::TwoInch),
            "3 inch" | "3" | "3\"" => Ok(NominalSize::ThreeInch),
            "4 inch" | "4" | "4\"" => Ok(NominalSize::FourInch),
            "6 inch" | "6" | "6\"" => Ok(NominalSize::SixInch),
            "8 inch" | "8" | "8\"" => Ok(NominalSize::EightInch),
            "10 inch" | "10" | "10\"" => Ok(NominalSize::TenInch),
            "12 inch" | "12" | "12\"" => Ok(NominalSize::TwelveInch),
            _ => Err("unknown nominal pipe size"),
        }
    }
}

/// Schedule: a labeled wall-thickness class for a given nominal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Schedule {
    Sch40,
    Sch80,
    Std,
    Xs,
}

impl Schedule {
    pub fn label(&self) -> &'static str {
        match self {
            Schedule::Sch40 => "40",
            Schedule::Sch80 => "80",
            Schedule::Std => "STD",
            Schedule::Xs => "XS",
        }
    }
}

impl std::str::FromStr for Schedule {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "40" | "SCH40" | "SCH 40" => Ok(Schedule::Sch40),
            "80" | "SCH80" | "SCH 80" => Ok(Schedule::Sch80),
            "STD" => Ok(Schedule::Std),
            "XS" => Ok(Schedule::Xs),
            _ => Err("unknown schedule"),
        }
    }
}

/// One row of the geometry table.
///
/// Invariant: `outside_diameter_mm > 2 × wall_thickness_mm`, so the derived
/// inner diameter is always positive for offered combinations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeSpec {
    pub nominal_size: NominalSize,
    pub schedule: Schedule,
    pub outside_diameter_mm: f64,
    pub wall_thickness_mm: f64,
}

impl PipeSpec {
    pub fn inner_diameter_mm(&self) -> f64 {
        self.outside_diameter_mm - 2.0 * self.wall_thickness_mm
    }

    pub fn inner_diameter_m(&self) -> f64 {
        self.inner_diameter_mm() / 1000.0
    }
}

const fn row(
    nominal_size: NominalSize,
    schedule: Schedule,
    outside_diameter_mm: f64,
    wall_thickness_mm: f64,
) -> PipeSpec {
    PipeSpec {
        nominal_size,
        schedule,
        outside_diameter_mm,
        wall_thickness_mm,
    }
}

// 12 inch is offered as STD/XS rather than 40/80; the gaps are real
// catalog gaps, not missing data.
const PIPE_TABLE: &[PipeSpec] = &[
    row(NominalSize::HalfInch, Schedule::Sch40, 21.3, 2.77),
    row(NominalSize::HalfInch, Schedule::Sch80, 21.3, 3.73),
    row(NominalSize::OneInch, Schedule::Sch40, 33.4, 3.38),
    row(NominalSize::OneInch, Schedule::Sch80, 33.4, 4.55),
    row(NominalSize::TwoInch, Schedule::Sch40, 60.3, 3.91),
    row(NominalSize::TwoInch, Schedule::Sch80, 60.3, 5.54),
    row(NominalSize::ThreeInch, Schedule::Sch40, 88.9, 5.49),
    row(NominalSize::ThreeInch, Schedule::Sch80, 88.9, 7.62),
    row(NominalSize::FourInch, Schedule::Sch40, 114.3, 6.02),
    row(NominalSize::FourInch, Schedule::Sch80, 114.3, 8.56),
    row(NominalSize::SixInch, Schedule::Sch40, 168.3, 7.11),
    row(NominalSize::SixInch, Schedule::Sch80, 168.3, 10.97),
    row(NominalSize::EightInch, Schedule::Sch40, 219.1, 8.18),
    row(NominalSize::EightInch, Schedule::Sch80, 219.1, 12.70),
    row(NominalSize::TenInch, Schedule::Sch40, 273.0, 9.27),
    row(NominalSize::TenInch, Schedule::Sch80, 273.0, 15.09),
    row(NominalSize::TwelveInch, Schedule::Std, 323.8, 9.53),
    row(NominalSize::TwelveInch, Schedule::Xs, 323.8, 12.70),
];

/// Look up an offered (size, schedule) combination.
///
/// Returns `None` for combinations the catalog does not offer; callers must
/// treat that as an input-validation outcome, not a computation error.
pub fn lookup(nominal_size: NominalSize, schedule: Schedule) -> Option<PipeSpec> {
    PIPE_TABLE
        .iter()
        .copied()
        .find(|spec| spec.nominal_size == nominal_size && spec.schedule == schedule)
}

/// List the schedules offered for a nominal size, in table order.
pub fn schedules(nominal_size: NominalSize) -> Vec<Schedule> {
    PIPE_TABLE
        .iter()
        .filter(|spec| spec.nominal_size == nominal_size)
        .map(|spec| spec.schedule)
        .collect()
}
