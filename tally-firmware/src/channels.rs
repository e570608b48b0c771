//! Inter-task communication channels
//!
//! External interrupt tasks post pin events here; the counter task drains
//! them. Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use tally_core::PinEvent;

/// Channel capacity for pin events
const PIN_EVENT_CHANNEL_SIZE: usize = 8;

/// Pin events from EXTI lines
pub static PIN_EVENTS: Channel<CriticalSectionRawMutex, PinEvent, PIN_EVENT_CHANNEL_SIZE> =
    Channel::new();
