//! STM32F4-specific HAL for the Tally firmware
//!
//! This crate adapts `embassy-stm32` peripherals to the `tally-hal` traits
//! so the board-agnostic display and press logic can drive them.
//!
//! # Features
//!
//! - `stm32f401re` - STM32F401RE (Nucleo-F401RE)
//! - `stm32f411re` - STM32F411RE (Nucleo-F411RE)
//! - `defmt` - Enable debug formatting support

#![no_std]

pub mod gpio;
pub mod spi;

pub use gpio::Stm32Output;
pub use spi::{BlockingSpi, SpiBusError};
