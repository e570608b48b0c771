//! Driver error taxonomy

/// A bindable hardware resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resource {
    /// Indicator LED output
    Led,
    /// Button interrupt pin
    Button,
    /// Hundreds/tens/units select lines
    DisplayWiring,
    /// SPI bus plus chip select
    TransmitChannel,
}

/// Errors reported by the display and press drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError {
    /// Resource used before it was bound
    NotConfigured(Resource),
    /// Resource bound a second time
    AlreadyConfigured(Resource),
    /// SPI write failed; the current refresh cycle was aborted
    TransmitFailed,
}
