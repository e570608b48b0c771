//! Three-digit multiplexed 7-segment display
//!
//! Only one digit is lit at a time. Each refresh cycle selects the
//! hundreds, tens and units digit in turn, shifts its segment pattern out
//! over SPI and holds it briefly. Called often enough (see
//! [`DisplayTiming`]), the three digits appear lit together.
//!
//! Calling [`SegmentDisplay::render`] repeatedly is the caller's job.

use embedded_hal::delay::DelayNs;
use tally_hal::{OutputPin, SpiBus};

use crate::config::DisplayTiming;
use crate::counter::Counter;
use crate::digits::{Digits, Position};
use crate::error::{DriverError, Resource};
use crate::line::Line;
use crate::segment::SegmentPattern;

/// SPI bus plus the chip select of the display's shift register
pub struct TransmitChannel<S, CS> {
    spi: S,
    cs: Line<CS>,
}

impl<S: SpiBus, CS: OutputPin> TransmitChannel<S, CS> {
    pub fn new(spi: S, cs: Line<CS>) -> Self {
        Self { spi, cs }
    }

    /// Shift out the pattern for `digit % 10` as a single byte
    ///
    /// Chip select is released even when the write fails. A register that
    /// latches on a rising edge (74HC595 RCLK) needs an active-low chip
    /// select, so the release after the write is the latching edge.
    pub fn transmit(&mut self, digit: u32) -> Result<(), DriverError> {
        let pattern = SegmentPattern::for_digit(digit);

        self.cs.assert();
        let result = self.spi.write(&[pattern.bits()]);
        self.cs.deassert();

        result.map_err(|_| DriverError::TransmitFailed)
    }
}

/// Select lines for the three digit positions
pub struct DisplayWiring<P> {
    pub hundreds: Line<P>,
    pub tens: Line<P>,
    pub units: Line<P>,
}

impl<P: OutputPin> DisplayWiring<P> {
    pub fn new(hundreds: Line<P>, tens: Line<P>, units: Line<P>) -> Self {
        Self {
            hundreds,
            tens,
            units,
        }
    }

    /// Select line for a position
    pub fn select(&mut self, position: Position) -> &mut Line<P> {
        match position {
            Position::Hundreds => &mut self.hundreds,
            Position::Tens => &mut self.tens,
            Position::Units => &mut self.units,
        }
    }
}

/// Multiplexing display driver
pub struct SegmentDisplay<P, S, CS, D> {
    wiring: Option<DisplayWiring<P>>,
    channel: Option<TransmitChannel<S, CS>>,
    delay: D,
    hold_ms: u32,
}

impl<P, S, CS, D> SegmentDisplay<P, S, CS, D>
where
    P: OutputPin,
    S: SpiBus,
    CS: OutputPin,
    D: DelayNs,
{
    /// Create a display with no wiring or channel bound yet
    pub fn new(delay: D, timing: &DisplayTiming) -> Self {
        Self {
            wiring: None,
            channel: None,
            delay,
            hold_ms: timing.hold_ms,
        }
    }

    /// Bind the digit select lines
    pub fn configure_wiring(&mut self, wiring: DisplayWiring<P>) -> Result<(), DriverError> {
        if self.wiring.is_some() {
            return Err(DriverError::AlreadyConfigured(Resource::DisplayWiring));
        }
        self.wiring = Some(wiring);
        Ok(())
    }

    /// Bind the SPI channel
    pub fn configure_transmit(
        &mut self,
        channel: TransmitChannel<S, CS>,
    ) -> Result<(), DriverError> {
        if self.channel.is_some() {
            return Err(DriverError::AlreadyConfigured(Resource::TransmitChannel));
        }
        self.channel = Some(channel);
        Ok(())
    }

    /// Run one refresh cycle showing `value`
    ///
    /// Digits are shown hundreds first. Values above 999 lose their
    /// thousands. On a transmit failure the lit digit is switched off and
    /// the rest of the cycle is skipped.
    pub fn render(&mut self, value: u16) -> Result<(), DriverError> {
        let wiring = self
            .wiring
            .as_mut()
            .ok_or(DriverError::NotConfigured(Resource::DisplayWiring))?;
        let channel = self
            .channel
            .as_mut()
            .ok_or(DriverError::NotConfigured(Resource::TransmitChannel))?;

        let digits = Digits::from_value(value);

        for position in Position::SCAN_ORDER {
            let select = wiring.select(position);

            select.assert();
            if let Err(e) = channel.transmit(digits.at(position) as u32) {
                select.deassert();
                return Err(e);
            }
            self.delay.delay_ms(self.hold_ms);
            select.deassert();
        }

        Ok(())
    }

    /// Run one refresh cycle showing the counter's current value
    pub fn render_counter(&mut self, counter: &Counter) -> Result<(), DriverError> {
        self.render(counter.get())
    }
}
