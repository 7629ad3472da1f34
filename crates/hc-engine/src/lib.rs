//! hc-engine: the hydraulic and mechanical calculation engine.
//!
//! Provides:
//! - `ProcessConditions`: the immutable, fully-specified calculation request
//! - Fitting equivalent-length resolution
//! - The hydraulic calculator (velocity, Reynolds number, friction factor,
//!   Darcy-Weisbach pressure drop, pump head and power)
//! - The wall-thickness safety check
//!
//! The engine is a pure, synchronous computation: no shared mutable state,
//! no retry policy, no persistence. The only external call is the property
//! provider, which is treated as fallible at any input; a lookup failure is
//! terminal for that invocation and no partial result is ever returned.

pub mod conditions;
pub mod error;
pub mod fittings;
pub mod hydraulics;
pub mod result;
pub mod thickness;

// Re-exports for ergonomics
pub use conditions::{ProcessConditions, DEFAULT_PUMP_EFFICIENCY_PCT};
pub use error::{EngineError, EngineResult};
pub use fittings::resolve_equivalent_length;
pub use hydraulics::{compute_hydraulics, friction_factor, REYNOLDS_TRANSITION};
pub use result::{HydraulicResult, SafetyCheckResult};
pub use thickness::check_wall_thickness;
