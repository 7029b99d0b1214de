//! On-device slot encoding.

use super::MAX_TARGET;

/// Bytes occupied by one slot.
pub const SLOT_BYTES: usize = 2;

/// One stored step target.
///
/// Encoded little-endian as a `u16`. Empty slots hold [`Slot::SENTINEL`],
/// which is also what erased EEPROM reads back as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Slot {
    /// A target position in steps (0..=999)
    Target(u16),
    /// No step stored here
    Empty,
}

impl Slot {
    /// Raw value of an empty slot.
    pub const SENTINEL: u16 = 0xFFFF;

    /// Encode for storage. Targets above [`MAX_TARGET`] would decode as
    /// empty; the store refuses to write them.
    pub fn encode(self) -> [u8; SLOT_BYTES] {
        match self {
            Slot::Target(t) => t.to_le_bytes(),
            Slot::Empty => Self::SENTINEL.to_le_bytes(),
        }
    }

    /// Decode from storage.
    ///
    /// Anything outside the legal target range reads as empty, so a
    /// corrupted cell can never become a move.
    pub fn decode(bytes: [u8; SLOT_BYTES]) -> Self {
        match u16::from_le_bytes(bytes) {
            t if t <= MAX_TARGET => Slot::Target(t),
            _ => Slot::Empty,
        }
    }

    /// Target held by the slot.
    #[inline]
    pub fn target(self) -> Option<u16> {
        match self {
            Slot::Target(t) => Some(t),
            Slot::Empty => None,
        }
    }
}
