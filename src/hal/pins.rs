//! embedded-hal pin adapters.

use embedded_hal::digital::{InputPin, OutputPin};

use crate::error::{MotorError, Result};

use super::{ExitButton, LimitSwitch};

/// Input wired with a pull-up: reads low while the contact is closed.
///
/// Used for both the limit switch and the knob push button.
pub struct ActiveLow<P> {
    pin: P,
}

impl<P: InputPin> ActiveLow<P> {
    /// Wrap a pull-up input pin.
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Whether the contact is closed.
    pub fn is_active(&mut self) -> Result<bool> {
        self.pin.is_low().map_err(|_| MotorError::PinError.into())
    }

    /// Release the underlying pin.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin> LimitSwitch for ActiveLow<P> {
    fn is_engaged(&mut self) -> Result<bool> {
        self.is_active()
    }
}

impl<P: InputPin> ExitButton for ActiveLow<P> {
    fn is_pressed(&mut self) -> Result<bool> {
        self.is_active()
    }
}

/// Indicator lamp lit while the axis sits at either end of travel.
pub struct TravelLamp<P> {
    pin: P,
    lit: Option<bool>,
}

impl<P: OutputPin> TravelLamp<P> {
    /// Wrap an output pin. The lamp state is unknown until the first update.
    pub fn new(pin: P) -> Self {
        Self { pin, lit: None }
    }

    /// Drive the lamp, writing the pin only on change.
    pub fn update(&mut self, lit: bool) -> Result<()> {
        if self.lit == Some(lit) {
            return Ok(());
        }

        let result = if lit {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| MotorError::PinError)?;

        self.lit = Some(lit);
        Ok(())
    }

    /// Release the underlying pin.
    pub fn release(self) -> P {
        self.pin
    }
}
