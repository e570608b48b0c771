//! Recording fakes for the hardware traits

use core::cell::{Cell, RefCell};

use embedded_hal::delay::DelayNs;
use heapless::Vec;
use tally_hal::{OutputPin, SpiBus};

/// One observed hardware interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    High(&'static str),
    Low(&'static str),
    Toggle(&'static str),
    Write(u8),
    HoldMs(u32),
}

/// Shared, ordered record of interactions across several fakes
pub type Log = RefCell<Vec<Op, 128>>;

pub fn new_log() -> Log {
    RefCell::new(Vec::new())
}

fn record(log: &Log, op: Op) {
    log.borrow_mut().push(op).expect("mock log full");
}

/// Output pin that records every change
pub struct MockPin<'a> {
    name: &'static str,
    high: bool,
    log: &'a Log,
}

impl<'a> MockPin<'a> {
    pub fn new(name: &'static str, log: &'a Log) -> Self {
        Self {
            name,
            high: false,
            log,
        }
    }
}

impl OutputPin for MockPin<'_> {
    fn set_high(&mut self) {
        self.high = true;
        record(self.log, Op::High(self.name));
    }

    fn set_low(&mut self) {
        self.high = false;
        record(self.log, Op::Low(self.name));
    }

    fn toggle(&mut self) {
        self.high = !self.high;
        record(self.log, Op::Toggle(self.name));
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Output pin that only counts toggles, for long press sequences
pub struct CountingPin<'a> {
    high: bool,
    toggles: &'a Cell<u32>,
}

impl<'a> CountingPin<'a> {
    pub fn new(toggles: &'a Cell<u32>) -> Self {
        Self {
            high: false,
            toggles,
        }
    }
}

impl OutputPin for CountingPin<'_> {
    fn set_high(&mut self) {
        self.high = true;
    }

    fn set_low(&mut self) {
        self.high = false;
    }

    fn toggle(&mut self) {
        self.high = !self.high;
        self.toggles.set(self.toggles.get() + 1);
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// SPI bus that records written bytes, optionally failing from the n-th write
pub struct MockSpi<'a> {
    log: &'a Log,
    writes: u32,
    fail_from: Option<u32>,
}

impl<'a> MockSpi<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self {
            log,
            writes: 0,
            fail_from: None,
        }
    }

    /// Writes numbered `n` and later (0-based) fail
    pub fn failing_from(log: &'a Log, n: u32) -> Self {
        Self {
            log,
            writes: 0,
            fail_from: Some(n),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct MockSpiError;

impl SpiBus for MockSpi<'_> {
    type Error = MockSpiError;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        let n = self.writes;
        self.writes += 1;
        if self.fail_from.is_some_and(|from| n >= from) {
            return Err(MockSpiError);
        }
        for &byte in data {
            record(self.log, Op::Write(byte));
        }
        Ok(())
    }
}

/// Delay that records millisecond holds instead of sleeping
pub struct MockDelay<'a> {
    log: &'a Log,
}

impl<'a> MockDelay<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self { log }
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        record(self.log, Op::HoldMs(ms));
    }
}

/// 74HC595-style register: bytes shift in over SPI and a rising edge on
/// the latch clock copies them to the outputs
#[derive(Default)]
pub struct ShiftRegister {
    shifted: Cell<u8>,
    latched: Cell<u8>,
}

impl ShiftRegister {
    /// Pattern currently on the outputs
    pub fn latched(&self) -> u8 {
        self.latched.get()
    }
}

/// SPI side of a [`ShiftRegister`]
pub struct ShiftIn<'a> {
    register: &'a ShiftRegister,
}

impl<'a> ShiftIn<'a> {
    pub fn new(register: &'a ShiftRegister) -> Self {
        Self { register }
    }
}

impl SpiBus for ShiftIn<'_> {
    type Error = MockSpiError;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        for &byte in data {
            self.register.shifted.set(byte);
        }
        Ok(())
    }
}

/// Latch clock (RCLK) pin of a [`ShiftRegister`]
pub struct LatchClock<'a> {
    register: &'a ShiftRegister,
    high: bool,
}

impl<'a> LatchClock<'a> {
    pub fn new(register: &'a ShiftRegister) -> Self {
        Self {
            register,
            high: false,
        }
    }

    fn drive(&mut self, high: bool) {
        if high && !self.high {
            self.register.latched.set(self.register.shifted.get());
        }
        self.high = high;
    }
}

impl OutputPin for LatchClock<'_> {
    fn set_high(&mut self) {
        self.drive(true);
    }

    fn set_low(&mut self) {
        self.drive(false);
    }

    fn toggle(&mut self) {
        self.drive(!self.high);
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
