//! Unit tests for configuration validation.

use nozzle_axis::config::units::{Degrees, StepPeriod};
use nozzle_axis::config::{parse_config, validate_config, SystemConfig};
use nozzle_axis::error::{ConfigError, Error};

/// Test validation of the default configuration.
#[test]
fn test_default_config_passes_validation() {
    assert!(validate_config(&SystemConfig::default()).is_ok());
}

/// Test validation fails for a non-positive angle limit.
#[test]
fn test_zero_angle_limit() {
    let mut config = SystemConfig::default();
    config.axis.angle_limit = Degrees(0.0);

    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidAngleLimit(_)))
    ));
}

/// Test validation fails when a step is wider than the travel.
#[test]
fn test_step_wider_than_travel() {
    let mut config = SystemConfig::default();
    config.axis.degrees_per_step = Degrees(120.0);

    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidStepLimit(0)))
    ));
}

/// Test validation fails when the step limit needs four digits.
#[test]
fn test_step_limit_beyond_keypad() {
    let toml_str = r#"
[axis]
angle_limit_deg = 360.0
degrees_per_step = 0.25
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidStepLimit(1440)))
    ));
}

/// Test validation fails for zero pulses per step.
#[test]
fn test_zero_pulses_per_step() {
    let mut config = SystemConfig::default();
    config.axis.pulses_per_step = 0;

    assert!(validate_config(&config).is_err());
}

/// Test validation of the block limit bounds.
#[test]
fn test_block_limit_bounds() {
    assert!(validate_config(&SystemConfig::default().with_block_limit(16)).is_ok());
    assert!(matches!(
        validate_config(&SystemConfig::default().with_block_limit(17)),
        Err(Error::Config(ConfigError::InvalidBlockLimit(17)))
    ));
}

/// Test validation fails for a zero cycle period.
#[test]
fn test_zero_cycle_period() {
    let mut config = SystemConfig::default();
    config.speed.cycle_period = StepPeriod(0);

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidPeriod(0)))
    ));
}
