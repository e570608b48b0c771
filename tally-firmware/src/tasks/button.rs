//! Button interrupt task
//!
//! Waits on the button's EXTI line and posts a pin event per press edge.
//! No debouncing: every edge the hardware reports is a press.

use defmt::*;
use embassy_stm32::exti::ExtiInput;

use tally_core::{PinConfig, PinEvent};

use crate::channels::PIN_EVENTS;

#[embassy_executor::task]
pub async fn button_task(mut btn: ExtiInput<'static>, pin: PinConfig) {
    info!("Button task started on P{}{}", pin.port.letter(), pin.pin);

    let event = PinEvent::new(pin.pin);

    loop {
        // Active-low buttons press on the falling edge
        if pin.inverted {
            btn.wait_for_falling_edge().await;
        } else {
            btn.wait_for_rising_edge().await;
        }

        // Never wait here: a full queue means presses are arriving faster
        // than they are counted, and they coalesce
        if PIN_EVENTS.try_send(event).is_err() {
            warn!("Pin event queue full, press dropped");
        }
    }
}
