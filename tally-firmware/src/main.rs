//! Tally - button press counter firmware
//!
//! Counts presses of the board's user button, toggles the user LED on each
//! one and shows the running count (0-999) on a three-digit multiplexed
//! 7-segment display driven over SPI.
//!
//! Two contexts share the counter: the button/counter tasks, woken by the
//! EXTI interrupt, write it; the refresh loop in `main` reads it.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::bind_interrupts;
use embassy_stm32::exti::{self, ExtiInput};
use embassy_stm32::gpio::{Pull, Speed};
use embassy_stm32::spi::Spi;
use embassy_time::{Delay, Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use tally_core::{Counter, DisplayWiring, PressHandler, SegmentDisplay, TransmitChannel};
use tally_hal_stm32f4::spi::embassy_config;
use tally_hal_stm32f4::BlockingSpi;

use crate::board::{claim, output_line};

mod board;
mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    EXTI15_10 => exti::InterruptHandler<embassy_stm32::interrupt::typelevel::EXTI15_10>;
});

/// Presses since boot, written by the counter task, read by the refresh loop
static COUNTER: Counter = Counter::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tally firmware starting on {}", config::BOARD_NAME);

    let p = embassy_stm32::init(Default::default());
    info!("Peripherals initialized");

    // Configuration
    let wiring = board::WIRING;
    unwrap!(wiring.validate());

    let timing = config::display_timing();
    unwrap!(timing.validate());
    info!(
        "Display timing: hold={}ms interval={}ms ({} Hz)",
        timing.hold_ms,
        timing.refresh_interval_ms,
        timing.refresh_rate_hz()
    );

    // Press side: LED + button on EXTI13
    let led = unwrap!(output_line(p.PA5, Speed::Low, &wiring.led));
    unwrap!(claim(&p.PC13, &wiring.button));
    let button = ExtiInput::new(p.PC13, p.EXTI13, Pull::None, Irqs);

    let mut handler = PressHandler::new(&COUNTER);
    unwrap!(handler.configure_led(led));
    unwrap!(handler.configure_button(wiring.button_binding()));

    spawner.spawn(tasks::counter_task(handler)).unwrap();
    spawner.spawn(tasks::button_task(button, wiring.button)).unwrap();

    // Display side: SPI2 (PB13=SCK, PB15=MOSI) into the shift register
    let spi_config = config::spi_config();
    let spi = Spi::new_blocking_txonly(p.SPI2, p.PB13, p.PB15, embassy_config(&spi_config));
    info!("SPI2 initialized at {} Hz", spi_config.frequency);

    let cs = unwrap!(output_line(p.PB12, Speed::High, &wiring.chip_select));

    let mut display = SegmentDisplay::new(Delay, &timing);
    unwrap!(display.configure_wiring(DisplayWiring::new(
        unwrap!(output_line(p.PC0, Speed::Low, &wiring.hundreds)),
        unwrap!(output_line(p.PC1, Speed::Low, &wiring.tens)),
        unwrap!(output_line(p.PC2, Speed::Low, &wiring.units)),
    )));
    unwrap!(display.configure_transmit(TransmitChannel::new(BlockingSpi::new(spi), cs)));

    info!("All tasks spawned, refreshing display");

    // Refresh loop. Each render blocks for 3 * hold_ms.
    let pause = Duration::from_millis(timing.refresh_interval_ms as u64);
    let mut last_error = None;

    loop {
        match display.render_counter(&COUNTER) {
            Ok(()) => {
                if last_error.take().is_some() {
                    info!("Display refresh recovered");
                }
            }
            Err(e) => {
                // Log once per failure streak, not every cycle
                if last_error != Some(e) {
                    warn!("Display refresh failed: {:?}", e);
                }
                last_error = Some(e);
            }
        }

        Timer::after(pause).await;
    }
}
