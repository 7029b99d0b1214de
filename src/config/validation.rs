//! Configuration validation.

use crate::error::{ConfigError, Error, Result};
use crate::sequence::{MAX_BLOCK_LIMIT, MAX_TARGET};

use super::SystemConfig;

/// Validate a system configuration.
///
/// Checks:
/// - Angle limit, degrees per step and pulses per step are positive
/// - The derived step limit is addressable by a three-digit keypad entry
/// - Block limit fits the sequence buffer
/// - Both step periods are non-zero
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    validate_axis(config)?;

    let block_limit = config.sequences.block_limit;
    if block_limit == 0 || usize::from(block_limit) > MAX_BLOCK_LIMIT {
        return Err(Error::Config(ConfigError::InvalidBlockLimit(block_limit)));
    }

    for period in [config.speed.motor_period, config.speed.cycle_period] {
        if period.millis() == 0 {
            return Err(Error::Config(ConfigError::InvalidPeriod(period.millis())));
        }
    }

    Ok(())
}

fn validate_axis(config: &SystemConfig) -> Result<()> {
    let axis = &config.axis;

    if axis.angle_limit.0 <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidAngleLimit(axis.angle_limit.0)));
    }

    if axis.degrees_per_step.0 <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidDegreesPerStep(
            axis.degrees_per_step.0,
        )));
    }

    if axis.pulses_per_step == 0 {
        return Err(Error::Config(ConfigError::InvalidPulsesPerStep(0)));
    }

    let limit = axis.step_limit().value();
    if limit < 1 || limit > i32::from(MAX_TARGET) {
        return Err(Error::Config(ConfigError::InvalidStepLimit(limit)));
    }

    Ok(())
}
