//! Collaborator interfaces.
//!
//! The controller never touches pins or timing directly. Boards provide these
//! traits; [`ActiveLow`], [`TravelLamp`] and [`crate::motor::StepDirDriver`]
//! cover the common embedded-hal wiring.

use core::future::Future;

use crate::config::units::StepPeriod;
use crate::error::Result;
use crate::input::Key;

mod pins;
mod status;
mod storage;

pub use pins::{ActiveLow, TravelLamp};
pub use status::{Notice, NullStatus, StatusSink};
pub use storage::{MemoryStorage, NonVolatileStorage};

/// Blocking motor primitive.
pub trait MotionPrimitive {
    /// Issue `pulses` motor pulses; positive turns clockwise.
    ///
    /// Returns once the last pulse has been issued.
    fn move_pulses(&mut self, pulses: i32) -> Result<()>;

    /// Set the delay between pulses for subsequent moves.
    fn set_period(&mut self, period: StepPeriod);
}

/// Rotary knob, already decoded and scaled to position steps.
pub trait EncoderSource {
    /// Knob movement since the previous call. Positive is clockwise.
    fn read_delta(&mut self) -> i32;
}

/// End-of-travel switch.
pub trait LimitSwitch {
    /// Whether the axis is currently pressing the switch.
    fn is_engaged(&mut self) -> Result<bool>;
}

/// Dedicated button that stops cycling.
pub trait ExitButton {
    /// Whether the button is held down.
    fn is_pressed(&mut self) -> Result<bool>;
}

/// Keypad event source.
pub trait KeySource {
    /// Wait for the next key press.
    ///
    /// This is the only suspension point of the controller: while a session
    /// awaits here, knob polling and limit switch sampling are paused.
    fn next_key(&mut self) -> impl Future<Output = Key>;

    /// Return a pending key press without waiting.
    fn poll_key(&mut self) -> Option<Key>;
}
