//! 7-segment digit encoding
//!
//! Segment layout:
//! ```text
//!    AAAAA
//!   F     B
//!   F     B
//!    GGGGG
//!   E     C
//!   E     C
//!    DDDDD
//! ```
//!
//! Bit 0 drives A through bit 6 driving G. Bit 7 (decimal point) is never
//! set by the encoder.

/// 8-bit segment pattern as shifted out to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentPattern(u8);

impl SegmentPattern {
    /// Segment A (top horizontal)
    pub const A: u8 = 0b0000_0001;
    /// Segment B (top right vertical)
    pub const B: u8 = 0b0000_0010;
    /// Segment C (bottom right vertical)
    pub const C: u8 = 0b0000_0100;
    /// Segment D (bottom horizontal)
    pub const D: u8 = 0b0000_1000;
    /// Segment E (bottom left vertical)
    pub const E: u8 = 0b0001_0000;
    /// Segment F (top left vertical)
    pub const F: u8 = 0b0010_0000;
    /// Segment G (middle horizontal)
    pub const G: u8 = 0b0100_0000;

    /// Encode a decimal digit
    ///
    /// Any value is accepted and reduced modulo 10, so the table can never
    /// be indexed out of range.
    pub const fn for_digit(digit: u32) -> Self {
        DIGIT_PATTERNS[(digit % 10) as usize]
    }

    /// Raw byte for the shift register
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check if the pattern lights a segment
    pub const fn contains(self, segment: u8) -> bool {
        self.0 & segment != 0
    }
}

const fn pattern(bits: u8) -> SegmentPattern {
    SegmentPattern(bits)
}

use self::SegmentPattern as S;

/// Patterns for 0-9
pub const DIGIT_PATTERNS: [SegmentPattern; 10] = [
    pattern(S::A | S::B | S::C | S::D | S::E | S::F),
    pattern(S::B | S::C),
    pattern(S::A | S::B | S::D | S::E | S::G),
    pattern(S::A | S::B | S::C | S::D | S::G),
    pattern(S::B | S::C | S::F | S::G),
    pattern(S::A | S::C | S::D | S::F | S::G),
    pattern(S::A | S::C | S::D | S::E | S::F | S::G),
    pattern(S::A | S::B | S::C),
    pattern(S::A | S::B | S::C | S::D | S::E | S::F | S::G),
    pattern(S::A | S::B | S::C | S::D | S::F | S::G),
];

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const GOLDEN: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];

    #[test]
    fn test_golden_table() {
        for (digit, expected) in GOLDEN.iter().enumerate() {
            assert_eq!(
                SegmentPattern::for_digit(digit as u32).bits(),
                *expected,
                "digit {}",
                digit
            );
        }
    }

    #[test]
    fn test_decimal_point_never_set() {
        for pattern in DIGIT_PATTERNS {
            assert_eq!(pattern.bits() & 0x80, 0);
        }
    }

    #[test]
    fn test_segments() {
        let one = SegmentPattern::for_digit(1);
        assert!(one.contains(SegmentPattern::B));
        assert!(one.contains(SegmentPattern::C));
        assert!(!one.contains(SegmentPattern::A));

        assert!(!SegmentPattern::for_digit(0).contains(SegmentPattern::G));
        assert!(SegmentPattern::for_digit(8).contains(SegmentPattern::G));
    }

    #[test]
    fn test_extreme_input() {
        assert_eq!(SegmentPattern::for_digit(u32::MAX).bits(), GOLDEN[5]);
    }

    proptest! {
        #[test]
        fn encoding_wraps_every_ten(d in 0u32..10, k in 0u32..400_000_000) {
            prop_assert_eq!(SegmentPattern::for_digit(d), SegmentPattern::for_digit(d + 10 * k));
        }
    }
}
