//! Bounded press counter
//!
//! The counter is written from the event context and read from the
//! display refresh loop. The increment and its wraparound happen in one
//! atomic read-modify-write, so readers only ever see values in
//! `0..=COUNTER_MAX`.

use portable_atomic::{AtomicU16, Ordering};

/// Largest value the counter holds before wrapping to 0
pub const COUNTER_MAX: u16 = 999;

/// Press counter shared between the event and refresh contexts
///
/// Read-only outside this crate:
///
/// ```compile_fail
/// let counter = tally_core::Counter::new();
/// counter.increment();
/// ```
#[derive(Debug)]
pub struct Counter {
    value: AtomicU16,
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

impl Counter {
    /// Create a counter at 0
    pub const fn new() -> Self {
        Self {
            value: AtomicU16::new(0),
        }
    }

    /// Current value
    pub fn get(&self) -> u16 {
        self.value.load(Ordering::Acquire)
    }

    /// Count one press and return the new value
    ///
    /// Incrementing past `COUNTER_MAX` stores 0 in the same update, so the
    /// 1000th press reads back as 0. Only [`PressHandler`] writes the
    /// counter; everything outside this crate gets [`Counter::get`].
    ///
    /// [`PressHandler`]: crate::event::PressHandler
    pub(crate) fn increment(&self) -> u16 {
        match self
            .value
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |v| Some(next(v)))
        {
            Ok(prev) | Err(prev) => next(prev),
        }
    }
}

const fn next(value: u16) -> u16 {
    if value >= COUNTER_MAX {
        0
    } else {
        value + 1
    }
}
