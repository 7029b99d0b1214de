//! Operator status notifications.

use core::fmt;

use crate::config::units::Steps;
use crate::error::Error;

/// Informational event for the operator display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Notice {
    /// Main menu is ready for input
    Ready,
    /// A digit was accepted
    Digit(u8),
    /// Pending input was discarded by `#`
    InputReset,
    /// Axis finished a move
    Position(Steps),
    /// A request was refused; the prompt has been reset
    Refused(Error),
    /// Waiting for the key to save under
    SaveKeyPrompt,
    /// Waiting for a step value to save
    SaveStepPrompt {
        /// Slots still available in the block
        remaining: u8,
    },
    /// A slot was written; `None` marks an empty slot
    SlotSaved {
        /// Slot offset within the block
        offset: u8,
        /// Stored target
        target: Option<u16>,
    },
    /// Save session finished
    SaveFinished {
        /// Key written
        key: u16,
    },
    /// Waiting for the key to load
    LoadKeyPrompt,
    /// Waiting for a cycle endpoint
    CyclePrompt {
        /// Whether this is the second endpoint
        second: bool,
    },
    /// Cycling started
    CycleStarted {
        /// First endpoint
        first: u16,
        /// Second endpoint
        second: u16,
    },
    /// Cycling stopped by the exit button
    CycleStopped,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Ready => write!(f, "Keys pressed: "),
            Notice::Digit(d) => write!(f, "{}", d),
            Notice::InputReset => write!(f, "Input was reset"),
            Notice::Position(steps) => write!(f, "STEP NUMBER: {}", steps.value()),
            Notice::Refused(e) => write!(f, "{}", e),
            Notice::SaveKeyPrompt => write!(f, "Saving movements on key: "),
            Notice::SaveStepPrompt { remaining } => {
                write!(f, "Available directions left: {}", remaining)
            }
            Notice::SlotSaved { offset, target: Some(t) } => {
                write!(f, "Saving direction {}: step {}", offset + 1, t)
            }
            Notice::SlotSaved { offset, target: None } => {
                write!(f, "Saving direction {} with a NULL value", offset + 1)
            }
            Notice::SaveFinished { key } => write!(f, "Exiting saving mode (key {})", key),
            Notice::LoadKeyPrompt => write!(f, "Enter the key you would like to load"),
            Notice::CyclePrompt { second: false } => write!(f, "Enter the first number"),
            Notice::CyclePrompt { second: true } => write!(f, "Enter the second number"),
            Notice::CycleStarted { first, second } => {
                write!(f, "Entering cycle between {} and {}", first, second)
            }
            Notice::CycleStopped => write!(f, "Exiting cycle."),
        }
    }
}

/// Fire-and-forget sink for operator notices.
pub trait StatusSink {
    /// Deliver a notice. Must not block for long.
    fn notify(&mut self, notice: Notice);
}

/// Sink that drops every notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStatus;

impl StatusSink for NullStatus {
    fn notify(&mut self, _notice: Notice) {}
}

#[cfg(feature = "std")]
impl StatusSink for std::vec::Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::error::{MotionError, StorageError};

    #[test]
    fn test_notice_rendering() {
        assert_eq!(Notice::Position(Steps(7)).to_string(), "STEP NUMBER: 7");
        assert_eq!(
            Notice::SlotSaved { offset: 2, target: None }.to_string(),
            "Saving direction 3 with a NULL value"
        );
        assert_eq!(
            Notice::Refused(StorageError::NoStoredData { key: 4 }.into()).to_string(),
            "Storage error: No save data on key 4"
        );
        assert_eq!(
            Notice::Refused(MotionError::OverLimit { target: 20, limit: 11 }.into()).to_string(),
            "Motion error: Input 20 is over the limit 11"
        );
    }

    #[test]
    fn test_vec_sink_records() {
        let mut sink = Vec::new();
        sink.notify(Notice::Ready);
        sink.notify(Notice::InputReset);
        assert_eq!(sink, vec![Notice::Ready, Notice::InputReset]);
    }
}
