//! Axis configuration from TOML.

use serde::Deserialize;

use super::units::{Degrees, Steps};

/// Mechanical description of the nozzle axis.
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisConfig {
    /// Available travel in degrees, starting from the home switch.
    #[serde(rename = "angle_limit_deg", default = "default_angle_limit")]
    pub angle_limit: Degrees,

    /// Degrees covered by one position step (knob sensitivity).
    #[serde(default = "default_degrees_per_step")]
    pub degrees_per_step: Degrees,

    /// Motor pulses issued per position step.
    #[serde(default = "default_pulses_per_step")]
    pub pulses_per_step: u16,

    /// Reject keypad targets above the step limit.
    #[serde(default)]
    pub soft_limit: bool,

    /// Invert the motor direction pin.
    #[serde(default)]
    pub invert_direction: bool,
}

fn default_angle_limit() -> Degrees {
    Degrees(90.0)
}

fn default_degrees_per_step() -> Degrees {
    Degrees(8.1818)
}

fn default_pulses_per_step() -> u16 {
    25
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            angle_limit: default_angle_limit(),
            degrees_per_step: default_degrees_per_step(),
            pulses_per_step: default_pulses_per_step(),
            soft_limit: false,
            invert_direction: false,
        }
    }
}

impl AxisConfig {
    /// Highest legal position in steps.
    pub fn step_limit(&self) -> Steps {
        Steps::from_degrees(self.angle_limit, self.degrees_per_step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_step_limit() {
        assert_eq!(AxisConfig::default().step_limit(), Steps(11));
    }
}
