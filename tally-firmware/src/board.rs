//! Nucleo-F401RE pin assignment
//!
//! The display board is a single 74HC595 on SPI2 feeding the segment lines
//! of three common cathode digits, each switched by an NPN transistor on
//! its select pin.
//!
//! `main` takes the peripherals by name; every pin it takes goes through
//! [`claim`] or [`output_line`], which fail if it is not the pin `WIRING`
//! names.

use embassy_stm32::gpio::{Level, Output, Pin, Speed};
use embassy_stm32::Peri;
use tally_core::{BoardWiring, ConfigError, Line, PinConfig, Port};
use tally_hal_stm32f4::Stm32Output;

pub const WIRING: BoardWiring = BoardWiring {
    // LD2 (green user LED)
    led: PinConfig::new(Port::A, 5),
    // B1 (blue user button), pulled up externally, low while pressed
    button: PinConfig::inverted(Port::C, 13),
    // 74HC595 RCLK, latches on the rising edge, so released high after the write
    chip_select: PinConfig::inverted(Port::B, 12),
    hundreds: PinConfig::new(Port::C, 0),
    tens: PinConfig::new(Port::C, 1),
    units: PinConfig::new(Port::C, 2),
};

/// Check a taken peripheral pin is the one `config` names
pub fn claim<T: Pin>(pin: &Peri<'static, T>, config: &PinConfig) -> Result<(), ConfigError> {
    config.check_claimed(pin.port(), pin.pin())
}

/// Take a pin as an output line with the configured polarity
pub fn output_line<T: Pin>(
    pin: Peri<'static, T>,
    speed: Speed,
    config: &PinConfig,
) -> Result<Line<Stm32Output<'static>>, ConfigError> {
    claim(&pin, config)?;
    let output = Output::new(pin, Level::Low, speed);
    Ok(Line::from_config(Stm32Output::new(output), config))
}
