//! Counter task
//!
//! Drains pin events into the press handler, which toggles the LED and
//! advances the shared counter.

use defmt::*;

use tally_core::{Dispatch, PressHandler};
use tally_hal_stm32f4::Stm32Output;

use crate::channels::PIN_EVENTS;

/// Press handler as wired on the board
pub type BoardPressHandler = PressHandler<'static, Stm32Output<'static>>;

#[embassy_executor::task]
pub async fn counter_task(mut handler: BoardPressHandler) {
    info!("Counter task started");

    loop {
        let event = PIN_EVENTS.receive().await;

        match handler.handle(event) {
            Ok(Dispatch::Counted(value)) => debug!("Press counted: {}", value),
            Ok(Dispatch::Ignored) => trace!("Ignored event on pin {}", event.pin),
            Err(e) => warn!("Press not handled: {:?}", e),
        }
    }
}
