//! Direction of axis motion.

/// Direction of a relative move.
///
/// Clockwise drives the axis toward home (position decreases) and turns
/// the motor forward (positive pulse count).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Toward the home end; position decreases.
    Clockwise,
    /// Away from home; position increases.
    CounterClockwise,
}

impl Direction {
    /// Direction of a knob delta, or `None` if the knob did not move.
    #[inline]
    pub fn from_delta(delta: i32) -> Option<Self> {
        match delta {
            d if d > 0 => Some(Direction::Clockwise),
            d if d < 0 => Some(Direction::CounterClockwise),
            _ => None,
        }
    }

    /// Get the opposite direction.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Sign applied to motor pulses.
    #[inline]
    pub fn pulse_sign(self) -> i32 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    /// Change in position for one step.
    #[inline]
    pub fn position_delta(self) -> i32 {
        -self.pulse_sign()
    }
}
