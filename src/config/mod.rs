//! Configuration module for nozzle-axis.
//!
//! Provides the boot-time configuration of the axis, sequence storage and
//! motor pacing, loaded from TOML files (with `std` feature) or built in code.

mod axis;
mod constraints;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use axis::AxisConfig;
pub use constraints::TravelConstraints;
pub use system::{SequenceConfig, SpeedConfig, SystemConfig};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Degrees, StepPeriod, Steps};
