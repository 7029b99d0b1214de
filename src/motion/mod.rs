//! Motion module for nozzle-axis.
//!
//! Provides the direction model and the executor that owns the position
//! counter.

mod direction;
mod executor;

pub use direction::Direction;
pub use executor::{MotionExecutor, StepOutcome, StepRefusal};
