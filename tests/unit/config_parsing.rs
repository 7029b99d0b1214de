//! Unit tests for TOML configuration parsing.

use nozzle_axis::config::units::{Degrees, StepPeriod, Steps};
use nozzle_axis::config::{load_config, SystemConfig};

/// Test parsing a full axis configuration from TOML.
#[test]
fn test_parse_axis_config() {
    let toml_str = r#"
[axis]
angle_limit_deg = 90.0
degrees_per_step = 8.1818
pulses_per_step = 25
soft_limit = true
invert_direction = true
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.axis.angle_limit, Degrees(90.0));
    assert_eq!(config.axis.pulses_per_step, 25);
    assert!(config.axis.soft_limit);
    assert!(config.axis.invert_direction);
    assert_eq!(config.axis.step_limit(), Steps(11));
}

/// Test that every table is optional.
#[test]
fn test_missing_tables_take_defaults() {
    let config: SystemConfig = toml::from_str("").expect("Failed to parse TOML");

    assert_eq!(config.axis.step_limit(), Steps(11));
    assert!(!config.axis.soft_limit);
    assert_eq!(config.sequences.block_limit, 5);
    assert!(!config.sequences.step_delay);
    assert_eq!(config.speed.motor_period, StepPeriod(2));
    assert_eq!(config.speed.cycle_period, StepPeriod(7));
}

/// Test parsing sequence and speed tables.
#[test]
fn test_parse_sequences_and_speed() {
    let toml_str = r#"
[sequences]
block_limit = 10
step_delay = true

[speed]
motor_period_ms = 4
cycle_period_ms = 12
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.sequences.block_limit, 10);
    assert!(config.sequences.step_delay);
    assert_eq!(config.speed.motor_period.millis(), 4);
    assert_eq!(config.speed.cycle_period.millis(), 12);
}

/// Test that partial tables keep defaults for missing fields.
#[test]
fn test_partial_axis_table() {
    let toml_str = r#"
[axis]
soft_limit = true
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert!(config.axis.soft_limit);
    assert_eq!(config.axis.pulses_per_step, 25);
    assert_eq!(config.axis.degrees_per_step, Degrees(8.1818));
}

/// Test loading configuration from a file on disk.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join(format!("nozzle-axis-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        "[axis]\nangle_limit_deg = 100.0\ndegrees_per_step = 4.0\n",
    )
    .expect("Failed to write config");

    let config = load_config(&path).expect("Failed to load config");
    std::fs::remove_file(&path).ok();

    assert_eq!(config.axis.step_limit(), Steps(25));
}

/// Test that an unknown value type is a parse error.
#[test]
fn test_wrong_type_rejected() {
    let toml_str = r#"
[sequences]
block_limit = "five"
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err());
}
