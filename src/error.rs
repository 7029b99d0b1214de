//! Error types for nozzle-axis.
//!
//! Provides unified error handling across configuration, operator input,
//! motion, sequence storage, and motor hardware.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all nozzle-axis operations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Operator entered something the current prompt cannot accept
    Input(InputError),
    /// Motion request refused
    Motion(MotionError),
    /// Saved sequence storage error
    Storage(StorageError),
    /// Motor hardware error
    Motor(MotorError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Angle limit must be > 0
    InvalidAngleLimit(f32),
    /// Degrees per step must be > 0
    InvalidDegreesPerStep(f32),
    /// Pulses per step must be > 0
    InvalidPulsesPerStep(u16),
    /// Derived step limit is outside 1..=999
    InvalidStepLimit(i32),
    /// Block limit must be 1..=MAX_BLOCK_LIMIT
    InvalidBlockLimit(u8),
    /// Step period must be > 0
    InvalidPeriod(u16),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Operator input errors. Always recovered by resetting the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// A command letter arrived where digits were expected
    NotANumber,
    /// Submit pressed with no digits entered
    EmptySubmit,
    /// Both cycle targets are the same position
    DuplicateCycleTargets {
        /// The repeated target
        target: u16,
    },
    /// A cycle target exceeds the soft limit
    CycleTargetOverLimit {
        /// Offending target
        target: u16,
        /// Step limit in force
        limit: u16,
    },
}

/// Motion errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionError {
    /// Absolute target beyond the step limit while the soft limit is on
    OverLimit {
        /// Requested target
        target: i32,
        /// Step limit in force
        limit: i32,
    },
}

/// Saved sequence storage errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// First slot of the key's block is empty
    NoStoredData {
        /// Requested key
        key: u16,
    },
    /// Key does not fit in the storage device
    KeyOutOfRange {
        /// Requested key
        key: u16,
        /// Number of keys the device can hold
        max_keys: u16,
    },
    /// Step target cannot be stored in a slot
    TargetOutOfRange {
        /// Rejected target
        target: u16,
    },
    /// Byte address beyond the device capacity
    AddressOutOfRange(usize),
    /// Underlying device reported a failure
    Device,
}

/// Motor operation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// Pin operation failed
    PinError,
}

impl Error {
    /// Whether the error is an expected operator-facing condition that the
    /// interpreter recovers from locally.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Input(_)
                | Error::Motion(_)
                | Error::Storage(StorageError::NoStoredData { .. })
                | Error::Storage(StorageError::KeyOutOfRange { .. })
                | Error::Storage(StorageError::TargetOutOfRange { .. })
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Input(e) => write!(f, "Input error: {}", e),
            Error::Motion(e) => write!(f, "Motion error: {}", e),
            Error::Storage(e) => write!(f, "Storage error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidAngleLimit(v) => write!(f, "Invalid angle limit: {}. Must be > 0", v),
            ConfigError::InvalidDegreesPerStep(v) => {
                write!(f, "Invalid degrees per step: {}. Must be > 0", v)
            }
            ConfigError::InvalidPulsesPerStep(v) => {
                write!(f, "Invalid pulses per step: {}. Must be > 0", v)
            }
            ConfigError::InvalidStepLimit(v) => {
                write!(f, "Derived step limit {} is outside 1..=999", v)
            }
            ConfigError::InvalidBlockLimit(v) => write!(
                f,
                "Invalid block limit: {}. Must be 1-{}",
                v,
                crate::sequence::MAX_BLOCK_LIMIT
            ),
            ConfigError::InvalidPeriod(v) => write!(f, "Invalid step period: {}. Must be > 0", v),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotANumber => write!(f, "Must be a number, try again."),
            InputError::EmptySubmit => write!(f, "Must input a number, try again."),
            InputError::DuplicateCycleTargets { target } => {
                write!(f, "Cycle targets must differ (both {})", target)
            }
            InputError::CycleTargetOverLimit { target, limit } => {
                write!(f, "Cycle target {} is over the limit {}", target, limit)
            }
        }
    }
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::OverLimit { target, limit } => {
                write!(f, "Input {} is over the limit {}", target, limit)
            }
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::NoStoredData { key } => write!(f, "No save data on key {}", key),
            StorageError::KeyOutOfRange { key, max_keys } => {
                write!(f, "Key {} out of range, storage holds keys 0-{}", key, max_keys.saturating_sub(1))
            }
            StorageError::TargetOutOfRange { target } => {
                write!(f, "Step {} cannot be saved, maximum is {}", target, crate::sequence::MAX_TARGET)
            }
            StorageError::AddressOutOfRange(addr) => write!(f, "Address {} beyond storage", addr),
            StorageError::Device => write!(f, "Storage device failure"),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError => write!(f, "GPIO pin operation failed"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<InputError> for Error {
    fn from(e: InputError) -> Self {
        Error::Input(e)
    }
}

impl From<MotionError> for Error {
    fn from(e: MotionError) -> Self {
        Error::Motion(e)
    }
}

impl From<StorageError> for Error {
    fn from(e: StorageError) -> Self {
        Error::Storage(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}

#[cfg(feature = "std")]
impl std::error::Error for MotionError {}

#[cfg(feature = "std")]
impl std::error::Error for StorageError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}
