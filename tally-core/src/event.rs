//! Button event filtering and the press reaction
//!
//! Pin events arrive from whatever dispatches external interrupts. The
//! handler only reacts to events from its bound button pin; everything else
//! sharing the dispatch is ignored.

use tally_hal::OutputPin;

use crate::counter::Counter;
use crate::error::{DriverError, Resource};
use crate::line::Line;

/// An external interrupt fired on a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinEvent {
    /// Pin number (EXTI line) that transitioned
    pub pin: u8,
}

impl PinEvent {
    pub const fn new(pin: u8) -> Self {
        Self { pin }
    }
}

/// The pin whose events count as presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonBinding {
    pin: u8,
}

impl ButtonBinding {
    pub const fn new(pin: u8) -> Self {
        Self { pin }
    }

    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// Check if an event came from this button
    pub fn matches(&self, event: &PinEvent) -> bool {
        event.pin == self.pin
    }
}

/// Outcome of handling one pin event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatch {
    /// Event was a press; carries the new counter value
    Counted(u16),
    /// Event came from another pin
    Ignored,
}

/// Reacts to button presses: toggles the LED and advances the counter
///
/// Runs in the event context. Never blocks.
pub struct PressHandler<'a, L> {
    counter: &'a Counter,
    button: Option<ButtonBinding>,
    led: Option<Line<L>>,
}

impl<'a, L: OutputPin> PressHandler<'a, L> {
    /// Create an unbound handler advancing `counter`
    pub fn new(counter: &'a Counter) -> Self {
        Self {
            counter,
            button: None,
            led: None,
        }
    }

    /// Bind the LED toggled on each press
    pub fn configure_led(&mut self, led: Line<L>) -> Result<(), DriverError> {
        if self.led.is_some() {
            return Err(DriverError::AlreadyConfigured(Resource::Led));
        }
        self.led = Some(led);
        Ok(())
    }

    /// Bind the button pin
    pub fn configure_button(&mut self, button: ButtonBinding) -> Result<(), DriverError> {
        if self.button.is_some() {
            return Err(DriverError::AlreadyConfigured(Resource::Button));
        }
        self.button = Some(button);
        Ok(())
    }

    /// Handle one pin event
    ///
    /// A missing LED only skips the toggle; a missing button binding is an
    /// error since no event can qualify.
    pub fn handle(&mut self, event: PinEvent) -> Result<Dispatch, DriverError> {
        let button = self
            .button
            .ok_or(DriverError::NotConfigured(Resource::Button))?;

        if !button.matches(&event) {
            return Ok(Dispatch::Ignored);
        }

        if let Some(led) = self.led.as_mut() {
            led.toggle();
        }

        Ok(Dispatch::Counted(self.counter.increment()))
    }

    /// Counter advanced by this handler
    pub fn counter(&self) -> &'a Counter {
        self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::COUNTER_MAX;
    use crate::mock::CountingPin;
    use core::cell::Cell;

    const BUTTON: u8 = 13;

    fn bound<'a>(counter: &'a Counter, toggles: &'a Cell<u32>) -> PressHandler<'a, CountingPin<'a>> {
        let mut handler = PressHandler::new(counter);
        handler
            .configure_led(Line::active_high(CountingPin::new(toggles)))
            .unwrap();
        handler.configure_button(ButtonBinding::new(BUTTON)).unwrap();
        handler
    }

    #[test]
    fn test_press_counts_and_toggles() {
        let counter = Counter::new();
        let toggles = Cell::new(0);
        let mut handler = bound(&counter, &toggles);

        assert_eq!(handler.handle(PinEvent::new(BUTTON)), Ok(Dispatch::Counted(1)));
        assert_eq!(handler.handle(PinEvent::new(BUTTON)), Ok(Dispatch::Counted(2)));
        assert_eq!(counter.get(), 2);
        assert_eq!(toggles.get(), 2);
    }

    #[test]
    fn test_other_pins_ignored() {
        let counter = Counter::new();
        let toggles = Cell::new(0);
        let mut handler = bound(&counter, &toggles);

        for pin in (0..16).filter(|&p| p != BUTTON) {
            assert_eq!(handler.handle(PinEvent::new(pin)), Ok(Dispatch::Ignored));
        }
        assert_eq!(counter.get(), 0);
        assert_eq!(toggles.get(), 0);
    }

    #[test]
    fn test_one_toggle_per_press_across_wrap() {
        let counter = Counter::new();
        let toggles = Cell::new(0);
        let mut handler = bound(&counter, &toggles);

        for _ in 0..COUNTER_MAX {
            handler.handle(PinEvent::new(BUTTON)).unwrap();
        }
        assert_eq!(counter.get(), 999);

        assert_eq!(handler.handle(PinEvent::new(BUTTON)), Ok(Dispatch::Counted(0)));
        assert_eq!(handler.handle(PinEvent::new(BUTTON)), Ok(Dispatch::Counted(1)));
        assert_eq!(toggles.get(), 1001);
    }

    #[test]
    fn test_missing_led_still_counts() {
        let counter = Counter::new();
        let mut handler: PressHandler<'_, CountingPin<'_>> = PressHandler::new(&counter);
        handler.configure_button(ButtonBinding::new(BUTTON)).unwrap();

        assert_eq!(handler.handle(PinEvent::new(BUTTON)), Ok(Dispatch::Counted(1)));
        assert_eq!(handler.counter().get(), 1);
    }

    #[test]
    fn test_missing_button_is_reported() {
        let counter = Counter::new();
        let toggles = Cell::new(0);
        let mut handler = PressHandler::new(&counter);
        handler
            .configure_led(Line::active_high(CountingPin::new(&toggles)))
            .unwrap();

        assert_eq!(
            handler.handle(PinEvent::new(BUTTON)),
            Err(DriverError::NotConfigured(Resource::Button))
        );
        assert_eq!(counter.get(), 0);
        assert_eq!(toggles.get(), 0);
    }

    #[test]
    fn test_bindings_are_write_once() {
        let counter = Counter::new();
        let toggles = Cell::new(0);
        let mut handler = bound(&counter, &toggles);

        assert_eq!(
            handler.configure_button(ButtonBinding::new(0)),
            Err(DriverError::AlreadyConfigured(Resource::Button))
        );
        assert_eq!(
            handler.configure_led(Line::active_high(CountingPin::new(&toggles))),
            Err(DriverError::AlreadyConfigured(Resource::Led))
        );

        // First binding still in force
        assert_eq!(handler.handle(PinEvent::new(0)), Ok(Dispatch::Ignored));
    }

    #[test]
    fn test_handlers_share_counter() {
        let counter = Counter::new();
        let (a, b) = (Cell::new(0), Cell::new(0));
        let mut first = bound(&counter, &a);
        let mut second = bound(&counter, &b);

        first.handle(PinEvent::new(BUTTON)).unwrap();
        second.handle(PinEvent::new(BUTTON)).unwrap();
        assert_eq!(counter.get(), 2);
        assert_eq!((a.get(), b.get()), (1, 1));
    }
}
