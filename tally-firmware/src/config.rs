//! Build-time board configuration
//!
//! `build.rs` validates `board.toml` and turns it into constants; this
//! module turns those into the core's configuration types.

use tally_core::DisplayTiming;
use tally_hal::spi::{Mode, SpiConfig};

mod generated {
    use super::Mode;

    include!(concat!(env!("OUT_DIR"), "/board_config.rs"));
}

pub use generated::BOARD_NAME;

/// Multiplex timing from `[display]`
pub fn display_timing() -> DisplayTiming {
    DisplayTiming {
        hold_ms: generated::HOLD_MS,
        refresh_interval_ms: generated::REFRESH_INTERVAL_MS,
    }
}

/// Display bus settings from `[spi]`
pub fn spi_config() -> SpiConfig {
    SpiConfig::new(generated::SPI_FREQUENCY_HZ, generated::SPI_MODE)
}
