//! Board configuration types
//!
//! Pin assignment and multiplex timing. These are plain values, set once
//! at startup and checked before any driver is built from them.

/// Slowest refresh rate at which three multiplexed digits still look steady
pub const MIN_REFRESH_HZ: u32 = 30;

/// Number of pins per GPIO port
const PINS_PER_PORT: u8 = 16;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Pin string could not be parsed
    InvalidPin,
    /// Two roles bound to the same physical pin
    PinConflict(PinConfig),
    /// Claimed peripheral is not the pin the wiring names
    WrongPin(PinConfig),
    /// Select hold time of zero
    ZeroHold,
    /// Refresh period too long for a steady display
    RefreshTooSlow,
}

/// GPIO port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl Port {
    const ALL: [Port; 8] = [
        Port::A,
        Port::B,
        Port::C,
        Port::D,
        Port::E,
        Port::F,
        Port::G,
        Port::H,
    ];

    /// Port for a letter ('A'-'H')
    pub fn from_letter(c: char) -> Option<Self> {
        let index = (c as u32).checked_sub('A' as u32)?;
        Self::ALL.get(index as usize).copied()
    }

    /// Port letter
    pub fn letter(self) -> char {
        (b'A' + self as u8) as char
    }

    /// Port for a zero-based index (0 = A), as chip HALs number them
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Physical pin with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO port
    pub port: Port,
    /// Pin number within the port (0-15)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
}

impl PinConfig {
    /// Create a new active-high pin config
    pub const fn new(port: Port, pin: u8) -> Self {
        Self {
            port,
            pin,
            inverted: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(port: Port, pin: u8) -> Self {
        Self {
            port,
            pin,
            inverted: true,
        }
    }

    /// Parse a pin string
    ///
    /// Supports formats:
    /// - "PA0" -> Port A, Pin 0, active-high
    /// - "!PB1" -> Port B, Pin 1, inverted
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let s = s.trim();

        let (s, inverted) = match s.strip_prefix('!') {
            Some(rest) => (rest, true),
            None => (s, false),
        };

        let rest = s.strip_prefix('P').ok_or(ConfigError::InvalidPin)?;
        let mut chars = rest.chars();
        let port = chars
            .next()
            .and_then(Port::from_letter)
            .ok_or(ConfigError::InvalidPin)?;

        let pin: u8 = chars.as_str().parse().map_err(|_| ConfigError::InvalidPin)?;
        if pin >= PINS_PER_PORT {
            return Err(ConfigError::InvalidPin);
        }

        Ok(Self {
            port,
            pin,
            inverted,
        })
    }

    /// Same physical pin, regardless of polarity
    pub fn same_pin(&self, other: &PinConfig) -> bool {
        self.port == other.port && self.pin == other.pin
    }

    /// Check that a claimed peripheral pin, given as the chip HAL's port
    /// index and pin number, is this one
    pub fn check_claimed(&self, port_index: u8, pin: u8) -> Result<(), ConfigError> {
        match Port::from_index(port_index) {
            Some(port) if self.same_pin(&PinConfig::new(port, pin)) => Ok(()),
            _ => Err(ConfigError::WrongPin(*self)),
        }
    }
}

/// Tracks which pins are already claimed by a role
struct PinAllocator {
    /// One bitmask of claimed pins per port
    allocated: [u16; 8],
}

impl PinAllocator {
    fn new() -> Self {
        Self { allocated: [0; 8] }
    }

    fn allocate(&mut self, pin: &PinConfig) -> Result<(), ConfigError> {
        let mask = 1u16 << pin.pin;
        let port = &mut self.allocated[pin.port.index()];
        if *port & mask != 0 {
            return Err(ConfigError::PinConflict(*pin));
        }
        *port |= mask;
        Ok(())
    }
}

/// Complete pin assignment of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardWiring {
    /// Indicator LED
    pub led: PinConfig,
    /// Button (EXTI source)
    pub button: PinConfig,
    /// Display shift register chip select
    pub chip_select: PinConfig,
    /// Hundreds digit select
    pub hundreds: PinConfig,
    /// Tens digit select
    pub tens: PinConfig,
    /// Units digit select
    pub units: PinConfig,
}

impl BoardWiring {
    /// Check that every role has its own pin
    ///
    /// Returns the first pin found bound twice.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut allocator = PinAllocator::new();
        for pin in [
            &self.led,
            &self.button,
            &self.chip_select,
            &self.hundreds,
            &self.tens,
            &self.units,
        ] {
            if pin.pin >= PINS_PER_PORT {
                return Err(ConfigError::InvalidPin);
            }
            allocator.allocate(pin)?;
        }
        Ok(())
    }

    /// Binding that qualifies button events
    ///
    /// External interrupt lines are shared between ports, so only the pin
    /// number identifies the source.
    pub fn button_binding(&self) -> crate::event::ButtonBinding {
        crate::event::ButtonBinding::new(self.button.pin)
    }
}

/// Multiplex timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayTiming {
    /// How long each digit stays selected (ms)
    pub hold_ms: u32,
    /// Pause between refresh cycles (ms)
    pub refresh_interval_ms: u32,
}

impl Default for DisplayTiming {
    fn default() -> Self {
        Self {
            hold_ms: 1,
            refresh_interval_ms: 5,
        }
    }
}

impl DisplayTiming {
    /// Duration of one refresh cycle including the pause (ms)
    pub fn refresh_period_ms(&self) -> u32 {
        self.hold_ms
            .saturating_mul(3)
            .saturating_add(self.refresh_interval_ms)
    }

    /// Whole refresh cycles per second
    pub fn refresh_rate_hz(&self) -> u32 {
        1000 / self.refresh_period_ms().max(1)
    }

    /// Check the timing gives a visible, steady display
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hold_ms == 0 {
            return Err(ConfigError::ZeroHold);
        }
        if self.refresh_rate_hz() < MIN_REFRESH_HZ {
            return Err(ConfigError::RefreshTooSlow);
        }
        Ok(())
    }
}
