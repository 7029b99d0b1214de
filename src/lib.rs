//! # nozzle-axis
//!
//! Single-axis coolant nozzle positioner with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Manual jogging**: A rotary knob steps the axis one position at a time
//! - **Keypad moves**: Type a position and press `*` to go there
//! - **Stored sequences**: Save up to a block of positions per key and replay them
//! - **Cycling**: Oscillate between two positions until the exit button is pressed
//! - **Limit switch interlock**: Refuses steps that push further into the switch
//! - **no_std compatible**: Core library works without standard library
//!
//! ## Keypad
//!
//! | Key     | Meaning                                    |
//! |---------|--------------------------------------------|
//! | `0`-`9` | digits, three per entry                    |
//! | `*`     | submit                                     |
//! | `#`     | cancel                                     |
//! | `A`     | save a sequence                            |
//! | `B`     | use the current position while saving      |
//! | `C`     | load and replay a sequence                 |
//! | `D`     | cycle between two positions                |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nozzle_axis::{Controller, OperatorPanel, StepDirDriver, SystemConfig};
//!
//! let config: SystemConfig = nozzle_axis::load_config("nozzle.toml")?;
//!
//! let driver = StepDirDriver::from_config(step_pin, dir_pin, delay, &config);
//! let panel = OperatorPanel::new(keypad, exit_button, display);
//! let mut controller = Controller::new(&config, driver, eeprom, knob, limit_switch, panel)?;
//!
//! controller.run().await?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[macro_use]
mod fmt;

// Core modules
pub mod config;
pub mod control;
pub mod error;
pub mod hal;
pub mod input;
pub mod motion;
pub mod motor;
pub mod sequence;

// Re-exports for ergonomic API
pub use config::{validate_config, AxisConfig, SystemConfig, TravelConstraints};
pub use control::{CommandInterpreter, Controller, InterpreterState, ManualArbiter, OperatorPanel};
pub use error::{Error, Result};
pub use hal::{
    EncoderSource, ExitButton, KeySource, LimitSwitch, MotionPrimitive, NonVolatileStorage,
    Notice, StatusSink,
};
pub use input::{Key, NumericCollector, NumericResult};
pub use motion::{Direction, MotionExecutor, StepOutcome};
pub use motor::StepDirDriver;
pub use sequence::{SequenceStore, Slot};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Degrees, StepPeriod, Steps};
