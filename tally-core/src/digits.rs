//! Decimal digit decomposition for the three-digit display

/// Digit position on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Position {
    Hundreds,
    Tens,
    Units,
}

impl Position {
    /// Order in which one refresh cycle visits the digits
    pub const SCAN_ORDER: [Position; 3] = [Position::Hundreds, Position::Tens, Position::Units];
}

/// A value split into its three lowest decimal digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digits {
    pub hundreds: u8,
    pub tens: u8,
    pub units: u8,
}

impl Digits {
    /// Split a value into digits
    ///
    /// Values above 999 are not rejected: each digit is taken modulo 10,
    /// which drops the thousands and above.
    pub const fn from_value(value: u16) -> Self {
        Self {
            hundreds: ((value / 100) % 10) as u8,
            tens: ((value / 10) % 10) as u8,
            units: (value % 10) as u8,
        }
    }

    /// Recombine into a number in 0-999
    pub const fn value(&self) -> u16 {
        self.hundreds as u16 * 100 + self.tens as u16 * 10 + self.units as u16
    }

    /// Digit shown at a position
    pub const fn at(&self, position: Position) -> u8 {
        match position {
            Position::Hundreds => self.hundreds,
            Position::Tens => self.tens,
            Position::Units => self.units,
        }
    }
}
