//! Output lines with an active level
//!
//! Select lines, chip select and the LED are all driven through [`Line`],
//! which hides whether "on" means a high or a low pin.

use tally_hal::OutputPin;

use crate::config::PinConfig;

/// Output pin with a configured active level
pub struct Line<P> {
    pin: P,
    /// If true, asserted = pin LOW
    active_low: bool,
}

impl<P: OutputPin> Line<P> {
    /// Wrap a pin, leaving the line deasserted
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to drive
    /// - `active_low`: If true, the line is asserted when the pin is LOW
    pub fn new(pin: P, active_low: bool) -> Self {
        let mut line = Self { pin, active_low };
        line.deassert();
        line
    }

    /// Line asserted by driving the pin high
    pub fn active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Line asserted by driving the pin low
    pub fn active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Line whose polarity follows the pin's configuration
    pub fn from_config(pin: P, config: &PinConfig) -> Self {
        Self::new(pin, config.inverted)
    }

    /// Drive the active level
    pub fn assert(&mut self) {
        self.pin.set_state(!self.active_low);
    }

    /// Drive the inactive level
    pub fn deassert(&mut self) {
        self.pin.set_state(self.active_low);
    }

    /// Flip the line without reading it back
    pub fn toggle(&mut self) {
        self.pin.toggle();
    }

    /// Check if the line is at its active level
    pub fn is_asserted(&self) -> bool {
        self.pin.is_set_high() != self.active_low
    }

    /// Borrow the underlying pin
    pub fn pin(&self) -> &P {
        &self.pin
    }
}
