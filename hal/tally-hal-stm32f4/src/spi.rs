//! SPI bus driver for STM32F4
//!
//! Wraps any blocking `embedded-hal` SPI bus (in practice an
//! `embassy_stm32::spi::Spi` built with `new_blocking_txonly`) and converts
//! `tally-hal` configuration into embassy's.

use embassy_stm32::spi::{Config, Error as SpiError, MODE_0, MODE_1, MODE_2, MODE_3};
use embassy_stm32::time::Hertz;
use tally_hal::spi::{Mode, SpiConfig};
use tally_hal::SpiBus;

/// Error from SPI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiBusError {
    /// Frame format error
    Framing,
    /// CRC mismatch
    Crc,
    /// Mode fault (NSS pulled low while master)
    ModeFault,
    /// Overrun
    Overrun,
    /// Other error
    Other,
}

impl From<SpiError> for SpiBusError {
    fn from(e: SpiError) -> Self {
        match e {
            SpiError::Framing => SpiBusError::Framing,
            SpiError::Crc => SpiBusError::Crc,
            SpiError::ModeFault => SpiBusError::ModeFault,
            SpiError::Overrun => SpiBusError::Overrun,
            #[allow(unreachable_patterns)]
            _ => SpiBusError::Other,
        }
    }
}

/// Blocking SPI master exposed through the `tally-hal` trait
pub struct BlockingSpi<T> {
    bus: T,
}

impl<T> BlockingSpi<T> {
    pub fn new(bus: T) -> Self {
        Self { bus }
    }
}

impl<T> SpiBus for BlockingSpi<T>
where
    T: embedded_hal::spi::SpiBus<u8, Error = SpiError>,
{
    type Error = SpiBusError;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.bus.write(data)?;
        // Wait for the last byte to leave before chip select is released
        self.bus.flush()?;
        Ok(())
    }
}

/// Build an embassy SPI configuration
pub fn embassy_config(config: &SpiConfig) -> Config {
    let mut out = Config::default();
    out.frequency = Hertz(config.frequency);
    out.mode = match config.mode() {
        Mode::Mode0 => MODE_0,
        Mode::Mode1 => MODE_1,
        Mode::Mode2 => MODE_2,
        Mode::Mode3 => MODE_3,
    };
    out
}
