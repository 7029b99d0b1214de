//! Unit types for the nozzle axis.
//!
//! Degrees only appear in configuration; everything at runtime is counted in
//! position steps, and the motor driver is paced by a step period.

use core::ops::{Add, Sub};

use serde::Deserialize;

/// Angle in degrees.
///
/// Used to express the configured travel range and step sensitivity.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Degrees(pub f32);

impl Degrees {
    /// Create a new Degrees value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

/// Axis position in steps, counted from the home end of travel.
///
/// Signed so that relative deltas share the type with absolute positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Steps(pub i32);

impl Steps {
    /// Home position.
    pub const ZERO: Self = Self(0);

    /// Create a new Steps value.
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Number of whole steps that fit in `range`, rounding down.
    #[inline]
    pub fn from_degrees(range: Degrees, degrees_per_step: Degrees) -> Self {
        Self(libm::floorf(range.0 / degrees_per_step.0) as i32)
    }
}

impl From<u16> for Steps {
    fn from(value: u16) -> Self {
        Self(i32::from(value))
    }
}

impl Add for Steps {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Steps {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Delay between motor pulses in milliseconds. Smaller is faster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct StepPeriod(pub u16);

impl StepPeriod {
    /// Fastest period the motor tolerates.
    pub const FASTEST: Self = Self(2);

    /// Get the raw value in milliseconds.
    #[inline]
    pub const fn millis(self) -> u16 {
        self.0
    }
}

impl Default for StepPeriod {
    fn default() -> Self {
        Self::FASTEST
    }
}
