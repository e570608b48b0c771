//! Board-agnostic core logic for the press counter firmware
//!
//! This crate contains everything that does not depend on a specific chip:
//!
//! - 7-segment digit encoding
//! - Three-digit display multiplexing over SPI
//! - The bounded press counter shared with the event context
//! - Button event filtering and the press reaction
//! - Board wiring and timing configuration types
//!
//! Hardware is reached through the `tally-hal` traits and
//! `embedded_hal::delay::DelayNs`, so the whole crate runs against fakes
//! on the host.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod counter;
pub mod digits;
pub mod display;
pub mod error;
pub mod event;
pub mod line;
pub mod segment;

#[cfg(test)]
mod mock;

pub use config::{BoardWiring, ConfigError, DisplayTiming, PinConfig, Port};
pub use counter::{Counter, COUNTER_MAX};
pub use digits::{Digits, Position};
pub use display::{DisplayWiring, SegmentDisplay, TransmitChannel};
pub use error::{DriverError, Resource};
pub use event::{ButtonBinding, Dispatch, PinEvent, PressHandler};
pub use line::Line;
pub use segment::SegmentPattern;
