//! Operator input: keypad alphabet and numeric entry.

mod keys;
mod numeric;

pub use keys::{Key, KEYMAP};
pub use numeric::{DigitBuffer, NumericCollector, NumericResult, MAX_DIGITS};
