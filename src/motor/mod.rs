//! Motor module for nozzle-axis.
//!
//! Provides a STEP/DIR implementation of the motion primitive.

mod driver;

pub use driver::StepDirDriver;
