//! Travel constraints derived from configuration.

use super::system::SystemConfig;
use super::units::Steps;

/// Runtime bounds computed once from [`SystemConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TravelConstraints {
    /// Highest legal position (StepLimit).
    pub step_limit: Steps,

    /// Motor pulses per position step.
    pub pulses_per_step: u16,

    /// Whether absolute targets above `step_limit` are rejected.
    pub soft_limit: bool,
}

impl TravelConstraints {
    /// Derive constraints from the system configuration.
    pub fn from_config(config: &SystemConfig) -> Self {
        Self {
            step_limit: config.axis.step_limit(),
            pulses_per_step: config.axis.pulses_per_step,
            soft_limit: config.axis.soft_limit,
        }
    }

    /// Build constraints directly from a step limit.
    pub fn new(step_limit: Steps, pulses_per_step: u16, soft_limit: bool) -> Self {
        Self {
            step_limit,
            pulses_per_step,
            soft_limit,
        }
    }

    /// Whether `position` lies in `[0, step_limit]`.
    #[inline]
    pub fn contains(&self, position: Steps) -> bool {
        position >= Steps::ZERO && position <= self.step_limit
    }

    /// Whether an absolute target passes the soft limit policy.
    #[inline]
    pub fn accepts_target(&self, target: Steps) -> bool {
        !self.soft_limit || target <= self.step_limit
    }

    /// Motor pulses for a signed number of position steps.
    #[inline]
    pub fn pulses(&self, steps: i32) -> i32 {
        steps * i32::from(self.pulses_per_step)
    }
}
