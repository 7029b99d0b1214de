//! STEP/DIR stepper driver.
//!
//! Generic over embedded-hal 1.0 pin and delay types.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::units::StepPeriod;
use crate::config::SystemConfig;
use crate::error::{MotorError, Result};
use crate::hal::MotionPrimitive;
use crate::motion::Direction;

/// Width of the STEP pulse in microseconds.
const PULSE_WIDTH_US: u32 = 2;

/// Stepper driver pulsing a STEP pin at a fixed period.
///
/// Generic over:
/// - `STEP`: STEP pin type (must implement `OutputPin`)
/// - `DIR`: DIR pin type (must implement `OutputPin`)
/// - `DELAY`: Delay provider (must implement `DelayNs`)
pub struct StepDirDriver<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// STEP pin (pulse to move one step).
    step_pin: STEP,

    /// DIR pin (high = CW, low = CCW, or inverted).
    dir_pin: DIR,

    /// Delay provider for step timing.
    delay: DELAY,

    /// Current direction (cached to avoid unnecessary pin writes).
    current_direction: Option<Direction>,

    /// Whether direction pin logic is inverted.
    invert_direction: bool,

    /// Delay between pulses.
    period: StepPeriod,
}

impl<STEP, DIR, DELAY> StepDirDriver<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// Create a driver running at `period`.
    pub fn new(
        step_pin: STEP,
        dir_pin: DIR,
        delay: DELAY,
        period: StepPeriod,
        invert_direction: bool,
    ) -> Self {
        Self {
            step_pin,
            dir_pin,
            delay,
            current_direction: None,
            invert_direction,
            period,
        }
    }

    /// Create a driver from configuration.
    ///
    /// Takes the normal pulse period from `speed.motor_period` and the
    /// direction pin polarity from `axis.invert_direction`.
    pub fn from_config(step_pin: STEP, dir_pin: DIR, delay: DELAY, config: &SystemConfig) -> Self {
        Self::new(
            step_pin,
            dir_pin,
            delay,
            config.speed.motor_period,
            config.axis.invert_direction,
        )
    }

    /// Current pulse period.
    #[inline]
    pub fn period(&self) -> StepPeriod {
        self.period
    }

    /// Release the pins and delay provider.
    pub fn release(self) -> (STEP, DIR, DELAY) {
        (self.step_pin, self.dir_pin, self.delay)
    }

    fn set_direction(&mut self, direction: Direction) -> Result<()> {
        if self.current_direction == Some(direction) {
            return Ok(());
        }

        let pin_high = match direction {
            Direction::Clockwise => !self.invert_direction,
            Direction::CounterClockwise => self.invert_direction,
        };

        if pin_high {
            self.dir_pin.set_high().map_err(|_| MotorError::PinError)?;
        } else {
            self.dir_pin.set_low().map_err(|_| MotorError::PinError)?;
        }

        self.current_direction = Some(direction);
        Ok(())
    }

    fn pulse(&mut self) -> Result<()> {
        self.step_pin.set_high().map_err(|_| MotorError::PinError)?;
        self.delay.delay_us(PULSE_WIDTH_US);
        self.step_pin.set_low().map_err(|_| MotorError::PinError)?;
        self.delay.delay_ms(u32::from(self.period.millis()));
        Ok(())
    }
}

impl<STEP, DIR, DELAY> MotionPrimitive for StepDirDriver<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    fn move_pulses(&mut self, pulses: i32) -> Result<()> {
        let direction = match pulses {
            0 => return Ok(()),
            p if p > 0 => Direction::Clockwise,
            _ => Direction::CounterClockwise,
        };
        self.set_direction(direction)?;

        for _ in 0..pulses.unsigned_abs() {
            self.pulse()?;
        }
        Ok(())
    }

    fn set_period(&mut self, period: StepPeriod) {
        self.period = period;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    fn pulses(n: usize) -> Vec<Transaction> {
        (0..n)
            .flat_map(|_| [Transaction::set(State::High), Transaction::set(State::Low)])
            .collect()
    }

    #[test]
    fn test_pulses_and_direction() {
        let step = PinMock::new(&pulses(5));
        let dir = PinMock::new(&[Transaction::set(State::High), Transaction::set(State::Low)]);
        let mut driver = StepDirDriver::new(step, dir, NoopDelay::new(), StepPeriod(2), false);

        driver.move_pulses(3).unwrap();
        driver.move_pulses(-2).unwrap();
        driver.move_pulses(0).unwrap();

        let (mut step, mut dir, _) = driver.release();
        step.done();
        dir.done();
    }

    #[test]
    fn test_direction_written_once_per_change() {
        let step = PinMock::new(&pulses(2));
        let dir = PinMock::new(&[Transaction::set(State::Low)]);
        let mut driver = StepDirDriver::new(step, dir, NoopDelay::new(), StepPeriod(2), true);

        driver.move_pulses(1).unwrap();
        driver.move_pulses(1).unwrap();

        let (mut step, mut dir, _) = driver.release();
        step.done();
        dir.done();
    }

    #[test]
    fn test_from_config_applies_inversion_and_period() {
        let mut config = SystemConfig::default();
        config.axis.invert_direction = true;
        config.speed.motor_period = StepPeriod(4);

        let step = PinMock::new(&pulses(1));
        // clockwise drives DIR low when inverted
        let dir = PinMock::new(&[Transaction::set(State::Low)]);
        let mut driver = StepDirDriver::from_config(step, dir, NoopDelay::new(), &config);
        assert_eq!(driver.period(), StepPeriod(4));

        driver.move_pulses(1).unwrap();

        let (mut step, mut dir, _) = driver.release();
        step.done();
        dir.done();
    }

    #[test]
    fn test_set_period() {
        let idle: [Transaction; 0] = [];
        let step = PinMock::new(&idle);
        let dir = PinMock::new(&idle);
        let mut driver = StepDirDriver::new(step, dir, NoopDelay::new(), StepPeriod(2), false);

        driver.set_period(StepPeriod(7));
        assert_eq!(driver.period(), StepPeriod(7));

        let (mut step, mut dir, _) = driver.release();
        step.done();
        dir.done();
    }
}
