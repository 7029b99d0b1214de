//! System configuration - root configuration structure.

use serde::Deserialize;

use super::axis::AxisConfig;
use super::units::StepPeriod;

/// Root configuration structure from TOML.
///
/// Every table is optional; a missing table takes the controller defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SystemConfig {
    /// Axis geometry and soft limit policy.
    #[serde(default)]
    pub axis: AxisConfig,

    /// Saved sequence layout and playback.
    #[serde(default)]
    pub sequences: SequenceConfig,

    /// Motor pacing.
    #[serde(default)]
    pub speed: SpeedConfig,
}

/// Saved sequence layout and playback options.
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequenceConfig {
    /// Slots reserved per key.
    #[serde(default = "default_block_limit")]
    pub block_limit: u8,

    /// Wait for a key press between replayed moves.
    #[serde(default)]
    pub step_delay: bool,
}

fn default_block_limit() -> u8 {
    5
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            block_limit: default_block_limit(),
            step_delay: false,
        }
    }
}

/// Step periods for the two operating speeds.
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedConfig {
    /// Period during knob, keypad and replay moves.
    #[serde(rename = "motor_period_ms", default = "default_motor_period")]
    pub motor_period: StepPeriod,

    /// Period while cycling between two points.
    #[serde(rename = "cycle_period_ms", default = "default_cycle_period")]
    pub cycle_period: StepPeriod,
}

fn default_motor_period() -> StepPeriod {
    StepPeriod(2)
}

fn default_cycle_period() -> StepPeriod {
    StepPeriod(7)
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            motor_period: default_motor_period(),
            cycle_period: default_cycle_period(),
        }
    }
}

impl SystemConfig {
    /// Builder-style soft limit toggle.
    pub fn with_soft_limit(mut self, enabled: bool) -> Self {
        self.axis.soft_limit = enabled;
        self
    }

    /// Builder-style block limit override.
    pub fn with_block_limit(mut self, block_limit: u8) -> Self {
        self.sequences.block_limit = block_limit;
        self
    }

    /// Builder-style playback confirmation toggle.
    pub fn with_step_delay(mut self, enabled: bool) -> Self {
        self.sequences.step_delay = enabled;
        self
    }
}
