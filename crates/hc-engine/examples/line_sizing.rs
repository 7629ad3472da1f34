//! Size a 4 inch water transfer line end to end: pressure drop, pump power
//! and wall-thickness adequacy.

use hc_catalog::{lookup, Fitting, NominalSize, PipeMaterial, Schedule, StressGrade};
use hc_engine::{
    check_wall_thickness, compute_hydraulics, resolve_equivalent_length, ProcessConditions,
};
use hc_fluids::{CoolPropProvider, Liquid};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pipe = lookup(NominalSize::FourInch, Schedule::Sch40)
        .ok_or("4 inch / Sch 40 not offered")?;

    let fittings = [
        (Fitting::GateValve, 2_u32),
        (Fitting::Elbow90, 8),
        (Fitting::CheckValve, 1),
    ];
    let equivalent_m = resolve_equivalent_length(&fittings, pipe.inner_diameter_m());

    let conditions = ProcessConditions::new(Liquid::Water, 120.0, 40.0, 100.0, 5000.0)
        .with_fitting_equivalent_length(equivalent_m)
        .with_elevation_change(12.0)
        .with_pump_efficiency(72.0);

    let provider = CoolPropProvider::new();
    let result = compute_hydraulics(&conditions, &pipe, PipeMaterial::CarbonSteel, &provider)?;

    println!("inner diameter   : {:8.2} mm", result.inner_diameter_mm);
    println!("velocity         : {:8.2} m/s", result.velocity_m_per_s);
    println!("Reynolds number  : {:8.3e}", result.reynolds_number);
    println!("friction factor  : {:8.5}", result.friction_factor);
    println!(
        "pressure drop    : {:8.2} bar ({:.2} friction + {:.2} static)",
        result.total_pressure_drop_bar,
        result.friction_pressure_drop_bar,
        result.static_pressure_drop_bar
    );
    println!("pump head        : {:8.1} m", result.pump_head_m);
    println!("shaft power      : {:8.1} kW", result.shaft_power_kw);

    let safety = check_wall_thickness(
        conditions.pressure_bar,
        StressGrade::A106B.allowable_stress_mpa(),
        pipe.outside_diameter_mm,
        pipe.wall_thickness_mm,
    )?;
    println!(
        "wall thickness   : {:.2} mm vs {:.2} mm required → {} (factor {:.2})",
        safety.actual_thickness_mm,
        safety.required_thickness_mm,
        if safety.is_safe { "OK" } else { "NOT OK" },
        safety.safety_factor
    );

    Ok(())
}
