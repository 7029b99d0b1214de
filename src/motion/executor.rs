//! Motion execution - the authoritative position counter.

use crate::config::units::{StepPeriod, Steps};
use crate::config::TravelConstraints;
use crate::error::{MotionError, Result};
use crate::hal::MotionPrimitive;

use super::direction::Direction;

/// Result of a relative step request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepOutcome {
    /// The axis moved and now sits at this position.
    Moved(Steps),
    /// The step was not issued.
    Refused(StepRefusal),
}

/// Why a relative step was not issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepRefusal {
    /// Already at the end of travel in that direction.
    AtTravelEnd,
    /// Limit switch engaged and the step would push further into it.
    Interlock,
}

/// Owns the motor primitive and the step counter.
///
/// All motion goes through here so the position stays consistent across
/// knob, keypad and replay moves.
#[derive(Debug)]
pub struct MotionExecutor<M> {
    motor: M,
    position: Steps,
    last_direction: Direction,
    constraints: TravelConstraints,
}

impl<M: MotionPrimitive> MotionExecutor<M> {
    /// Create an executor for a homed axis (position 0, last move clockwise).
    pub fn new(motor: M, constraints: TravelConstraints) -> Self {
        Self {
            motor,
            position: Steps::ZERO,
            last_direction: Direction::Clockwise,
            constraints,
        }
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> Steps {
        self.position
    }

    /// Direction of the last manual step.
    #[inline]
    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    /// Travel constraints in force.
    #[inline]
    pub fn constraints(&self) -> &TravelConstraints {
        &self.constraints
    }

    /// Borrow the motor primitive.
    pub fn motor(&self) -> &M {
        &self.motor
    }

    /// Release the motor primitive.
    pub fn release(self) -> M {
        self.motor
    }

    /// Overwrite the counter without moving, e.g. after an external homing run.
    pub fn set_position(&mut self, position: Steps, last_direction: Direction) {
        self.position = position;
        self.last_direction = last_direction;
    }

    /// Whether the axis sits at either end of travel.
    #[inline]
    pub fn at_travel_end(&self) -> bool {
        self.position == Steps::ZERO || self.position >= self.constraints.step_limit
    }

    /// Change the motor pulse period for subsequent moves.
    pub fn set_period(&mut self, period: StepPeriod) {
        self.motor.set_period(period);
    }

    /// Move one step in `direction`.
    ///
    /// Clockwise steps need position > 0 and counter-clockwise steps need
    /// position < step limit. While `switch_engaged`, only the direction
    /// opposite the last manual step is allowed, and it leaves
    /// `last_direction` untouched so the axis can keep backing off.
    pub fn step_relative(
        &mut self,
        direction: Direction,
        switch_engaged: bool,
    ) -> Result<StepOutcome> {
        let room = match direction {
            Direction::Clockwise => self.position > Steps::ZERO,
            Direction::CounterClockwise => self.position < self.constraints.step_limit,
        };
        if !room {
            return Ok(StepOutcome::Refused(StepRefusal::AtTravelEnd));
        }

        if switch_engaged && direction == self.last_direction {
            debug!("interlock refused {} step", direction);
            return Ok(StepOutcome::Refused(StepRefusal::Interlock));
        }

        self.motor
            .move_pulses(self.constraints.pulses(direction.pulse_sign()))?;
        self.position = Steps(self.position.0 + direction.position_delta());
        if !switch_engaged {
            self.last_direction = direction;
        }

        Ok(StepOutcome::Moved(self.position))
    }

    /// Move straight to `target`.
    ///
    /// With the soft limit enabled a target above the step limit is refused
    /// and nothing moves. Otherwise the move is issued unchecked and the
    /// counter takes the target value, even beyond the step limit.
    pub fn move_to_absolute(&mut self, target: u16) -> Result<Steps> {
        let target = Steps::from(target);
        if !self.constraints.accepts_target(target) {
            return Err(MotionError::OverLimit {
                target: target.value(),
                limit: self.constraints.step_limit.value(),
            }
            .into());
        }

        let pulses = self.constraints.pulses((self.position - target).value());
        if pulses != 0 {
            self.motor.move_pulses(pulses)?;
        }
        self.position = target;
        debug!("absolute move to {}", target);

        Ok(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[derive(Default)]
    struct RecordingMotor {
        moves: Vec<i32>,
        period: Option<StepPeriod>,
    }

    impl MotionPrimitive for RecordingMotor {
        fn move_pulses(&mut self, pulses: i32) -> Result<()> {
            self.moves.push(pulses);
            Ok(())
        }

        fn set_period(&mut self, period: StepPeriod) {
            self.period = Some(period);
        }
    }

    fn executor(soft_limit: bool) -> MotionExecutor<RecordingMotor> {
        MotionExecutor::new(
            RecordingMotor::default(),
            TravelConstraints::new(Steps(11), 25, soft_limit),
        )
    }

    #[test]
    fn test_relative_steps_update_counter() {
        let mut axis = executor(false);

        assert_eq!(
            axis.step_relative(Direction::CounterClockwise, false).unwrap(),
            StepOutcome::Moved(Steps(1))
        );
        assert_eq!(axis.last_direction(), Direction::CounterClockwise);
        assert_eq!(
            axis.step_relative(Direction::Clockwise, false).unwrap(),
            StepOutcome::Moved(Steps(0))
        );
        assert_eq!(axis.last_direction(), Direction::Clockwise);
        assert_eq!(axis.motor().moves, vec![-25, 25]);
    }

    #[test]
    fn test_relative_steps_respect_travel() {
        let mut axis = executor(false);
        assert_eq!(
            axis.step_relative(Direction::Clockwise, false).unwrap(),
            StepOutcome::Refused(StepRefusal::AtTravelEnd)
        );

        axis.set_position(Steps(11), Direction::CounterClockwise);
        assert_eq!(
            axis.step_relative(Direction::CounterClockwise, false).unwrap(),
            StepOutcome::Refused(StepRefusal::AtTravelEnd)
        );
        assert!(axis.motor().moves.is_empty());
    }

    #[test]
    fn test_interlock_blocks_last_direction() {
        let mut axis = executor(false);
        axis.set_position(Steps(5), Direction::CounterClockwise);

        assert_eq!(
            axis.step_relative(Direction::CounterClockwise, true).unwrap(),
            StepOutcome::Refused(StepRefusal::Interlock)
        );
        assert_eq!(axis.position(), Steps(5));

        assert_eq!(
            axis.step_relative(Direction::Clockwise, true).unwrap(),
            StepOutcome::Moved(Steps(4))
        );
        // backing off keeps the blocked direction
        assert_eq!(axis.last_direction(), Direction::CounterClockwise);
        assert_eq!(
            axis.step_relative(Direction::Clockwise, true).unwrap(),
            StepOutcome::Moved(Steps(3))
        );
    }

    #[test]
    fn test_absolute_move_pulses() {
        let mut axis = executor(false);
        assert_eq!(axis.move_to_absolute(8).unwrap(), Steps(8));
        assert_eq!(axis.move_to_absolute(3).unwrap(), Steps(3));
        assert_eq!(axis.move_to_absolute(3).unwrap(), Steps(3));
        assert_eq!(axis.motor().moves, vec![-200, 125]);
        assert_eq!(axis.last_direction(), Direction::Clockwise);
    }

    #[test]
    fn test_absolute_move_soft_limit() {
        let mut axis = executor(true);
        axis.move_to_absolute(4).unwrap();

        assert_eq!(
            axis.move_to_absolute(12),
            Err(Error::Motion(MotionError::OverLimit { target: 12, limit: 11 }))
        );
        assert_eq!(axis.position(), Steps(4));
        assert_eq!(axis.motor().moves.len(), 1);
    }

    #[test]
    fn test_absolute_move_unchecked_without_soft_limit() {
        let mut axis = executor(false);
        assert_eq!(axis.move_to_absolute(500).unwrap(), Steps(500));
        assert!(!axis.constraints().contains(axis.position()));

        // the knob can still bring it home, but not further out
        assert_eq!(
            axis.step_relative(Direction::CounterClockwise, false).unwrap(),
            StepOutcome::Refused(StepRefusal::AtTravelEnd)
        );
        assert_eq!(
            axis.step_relative(Direction::Clockwise, false).unwrap(),
            StepOutcome::Moved(Steps(499))
        );
    }

    #[test]
    fn test_travel_end_and_period() {
        let mut axis = executor(false);
        assert!(axis.at_travel_end());
        axis.move_to_absolute(6).unwrap();
        assert!(!axis.at_travel_end());
        axis.move_to_absolute(11).unwrap();
        assert!(axis.at_travel_end());

        axis.set_period(StepPeriod(7));
        assert_eq!(axis.motor().period, Some(StepPeriod(7)));
    }
}
