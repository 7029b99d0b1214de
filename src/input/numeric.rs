//! Bounded numeric entry from the keypad.

use heapless::Vec;

use crate::error::InputError;
use crate::hal::{KeySource, Notice, StatusSink};

use super::keys::Key;

/// Most digits a number may have. Entry completes on the last one.
pub const MAX_DIGITS: usize = 3;

/// Up to three pending decimal digits, most significant first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitBuffer {
    digits: Vec<u8, MAX_DIGITS>,
}

impl DigitBuffer {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self { digits: Vec::new() }
    }

    /// Append a digit. Returns `false` and drops it once the buffer is full.
    pub fn push(&mut self, digit: u8) -> bool {
        debug_assert!(digit <= 9);
        self.digits.push(digit).is_ok()
    }

    /// Number of pending digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Whether no digit is pending.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Whether another digit would be dropped.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.digits.is_full()
    }

    /// Discard pending digits.
    pub fn clear(&mut self) {
        self.digits.clear();
    }

    /// Value of the pending digits, or `None` if there are none.
    ///
    /// "5" is 5, "50" is 50, "007" is 7.
    pub fn value(&self) -> Option<u16> {
        if self.digits.is_empty() {
            return None;
        }
        Some(
            self.digits
                .iter()
                .fold(0u16, |acc, &d| acc * 10 + u16::from(d)),
        )
    }

    /// Take the value and leave the buffer empty.
    pub fn take(&mut self) -> Option<u16> {
        let value = self.value();
        self.clear();
        value
    }
}

/// Outcome of a numeric entry prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NumericResult {
    /// A number in 0..=999
    Value(u16),
    /// The operator asked for the axis' current position
    CurrentPosition,
    /// The operator pressed `#`
    Cancelled,
}

/// Numeric prompt state machine.
///
/// [`feed`](Self::feed) is the pure transition function;
/// [`collect`](Self::collect) drives it from a [`KeySource`].
#[derive(Debug, Clone, Default)]
pub struct NumericCollector {
    buffer: DigitBuffer,
    accept_current: bool,
}

impl NumericCollector {
    /// Prompt accepting digits, `*` and `#`.
    pub const fn new() -> Self {
        Self {
            buffer: DigitBuffer::new(),
            accept_current: false,
        }
    }

    /// Prompt that additionally accepts `B` as "current position".
    pub const fn with_current_position() -> Self {
        Self {
            buffer: DigitBuffer::new(),
            accept_current: true,
        }
    }

    /// Digits entered so far.
    pub fn pending(&self) -> &DigitBuffer {
        &self.buffer
    }

    /// Apply one key press.
    ///
    /// Returns `Ok(None)` while the number is incomplete. Input errors
    /// reset the pending digits; the prompt stays open.
    pub fn feed(&mut self, key: Key) -> Result<Option<NumericResult>, InputError> {
        match key {
            Key::Cancel => {
                self.buffer.clear();
                Ok(Some(NumericResult::Cancelled))
            }
            Key::Submit => match self.buffer.take() {
                Some(value) => Ok(Some(NumericResult::Value(value))),
                None => Err(InputError::EmptySubmit),
            },
            Key::UseCurrent if self.accept_current => {
                self.buffer.clear();
                Ok(Some(NumericResult::CurrentPosition))
            }
            Key::Digit(d) => {
                self.buffer.push(d);
                if self.buffer.is_full() {
                    Ok(self.buffer.take().map(NumericResult::Value))
                } else {
                    Ok(None)
                }
            }
            _ => {
                self.buffer.clear();
                Err(InputError::NotANumber)
            }
        }
    }

    /// Run the prompt until it produces a result.
    ///
    /// Suspends on every key; nothing else is polled meanwhile.
    pub async fn collect<K, N>(&mut self, keys: &mut K, status: &mut N) -> NumericResult
    where
        K: KeySource,
        N: StatusSink,
    {
        self.buffer.clear();
        loop {
            let key = keys.next_key().await;
            let result = self.feed(key);
            if let (Ok(_), Key::Digit(d)) = (&result, key) {
                status.notify(Notice::Digit(d));
            }
            match result {
                Ok(Some(result)) => {
                    debug!("numeric entry complete: {}", result);
                    return result;
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("numeric entry rejected: {}", e);
                    status.notify(Notice::Refused(e.into()));
                }
            }
        }
    }
}
