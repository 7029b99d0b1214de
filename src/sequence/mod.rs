//! Saved position sequences.
//!
//! Sequences are stored under numeric keys entered on the keypad and
//! replayed as absolute moves.

mod slot;
mod store;

pub use slot::{Slot, SLOT_BYTES};
pub use store::{LoadedSequence, SaveWriter, SequenceStore};

/// Largest value a three-digit keypad entry can produce.
pub const MAX_TARGET: u16 = 999;

/// Keys are three-digit entries, so there are at most 1000 of them.
pub const MAX_KEYS: u16 = MAX_TARGET + 1;

/// Upper bound on slots per key.
pub const MAX_BLOCK_LIMIT: usize = 16;
