//! Manual input arbiter: knob steps gated by the limit switch.

use crate::error::Result;
use crate::hal::{EncoderSource, LimitSwitch, MotionPrimitive};
use crate::motion::{Direction, MotionExecutor, StepOutcome};

/// Turns knob movement into single relative steps.
///
/// At most one step is issued per poll regardless of how far the knob
/// turned; the remainder of the delta is dropped.
#[derive(Debug, Clone, Default)]
pub struct ManualArbiter {
    switch_engaged: bool,
}

impl ManualArbiter {
    /// Create an arbiter with the switch assumed released.
    pub const fn new() -> Self {
        Self {
            switch_engaged: false,
        }
    }

    /// Switch state seen on the last poll.
    #[inline]
    pub fn switch_engaged(&self) -> bool {
        self.switch_engaged
    }

    /// Sample the switch and the knob, then step if the knob moved.
    pub fn poll<M, E, L>(
        &mut self,
        axis: &mut MotionExecutor<M>,
        encoder: &mut E,
        limit: &mut L,
    ) -> Result<Option<StepOutcome>>
    where
        M: MotionPrimitive,
        E: EncoderSource,
        L: LimitSwitch,
    {
        let engaged = limit.is_engaged()?;
        if engaged != self.switch_engaged {
            info!("limit switch {}", if engaged { "engaged" } else { "released" });
            self.switch_engaged = engaged;
        }

        let Some(direction) = Direction::from_delta(encoder.read_delta()) else {
            return Ok(None);
        };
        axis.step_relative(direction, engaged).map(Some)
    }
}
