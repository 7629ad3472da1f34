//! hc-fluids: fluid property lookup for hydrocalc.
//!
//! Provides:
//! - Pumpable liquid definitions (water, ammonia, LPG components, R134a)
//! - The `PropertyProvider` trait the calculation engine consumes
//! - A CoolProp backend (via `rfluids`) for real fluid properties
//! - A fixed-property provider for states the engineer supplies directly
//!
//! # Architecture
//!
//! The engine treats fluid properties as an external capability: a provider
//! may fail at any input (conditions outside the correlation's envelope,
//! phase-ambiguous states), and the engine propagates that failure rather
//! than guessing values. The `PropertyProvider` trait isolates the rest of
//! hydrocalc from backend dependencies.
//!
//! # Example
//!
//! ```no_run
//! use hc_core::units::{k, pa};
//! use hc_fluids::{CoolPropProvider, Liquid, PropertyProvider};
//!
//! let provider = CoolPropProvider::new();
//! let props = provider
//!     .properties(Liquid::Water, k(393.15), pa(4.0e6))
//!     .unwrap();
//! println!("rho = {} kg/m³", props.rho.value);
//! ```

pub mod coolprop;
pub mod error;
pub mod fixed;
pub mod model;
pub mod species;

// Re-exports for ergonomics
pub use coolprop::CoolPropProvider;
pub use error::{FluidError, FluidResult};
pub use fixed::FixedPropertyProvider;
pub use model::{LiquidProperties, PropertyProvider};
pub use species::Liquid;
