//! Control module for nozzle-axis.
//!
//! Ties the keypad interpreter and the knob arbiter to the motion executor
//! and the sequence store.

mod arbiter;
mod controller;
mod interpreter;
mod panel;

pub use arbiter::ManualArbiter;
pub use controller::{Controller, PollSummary};
pub use interpreter::{validate_cycle, CommandInterpreter, InterpreterState};
pub use panel::OperatorPanel;
