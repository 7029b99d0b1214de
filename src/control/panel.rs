//! Operator panel: keypad, exit button and status display.

use crate::hal::{ExitButton, KeySource, Notice, StatusSink};

/// The operator-facing peripherals, bundled so sessions can borrow them
/// together while the axis and store are borrowed separately.
pub struct OperatorPanel<K, B, N> {
    /// Keypad.
    pub keys: K,
    /// Button that stops cycling.
    pub exit: B,
    /// Status display.
    pub status: N,
}

impl<K, B, N> OperatorPanel<K, B, N>
where
    K: KeySource,
    B: ExitButton,
    N: StatusSink,
{
    /// Bundle the operator peripherals.
    pub fn new(keys: K, exit: B, status: N) -> Self {
        Self { keys, exit, status }
    }

    /// Send a notice to the display.
    #[inline]
    pub fn notify(&mut self, notice: Notice) {
        self.status.notify(notice);
    }
}
