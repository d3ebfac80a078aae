//! Bit-level primitives for bytes that share a flag with a value
//!
//! Almost every K5 parameter byte packs a small magnitude next to one or two
//! flag bits. [`PackedField`] describes such a byte once, and both the parser
//! and the writer go through it.

/// One of the eight single-bit masks of a byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bit(u8);

impl Bit {
    pub const B0: Self = Self(1 << 0);
    pub const B1: Self = Self(1 << 1);
    pub const B2: Self = Self(1 << 2);
    pub const B3: Self = Self(1 << 3);
    pub const B4: Self = Self(1 << 4);
    pub const B5: Self = Self(1 << 5);
    pub const B6: Self = Self(1 << 6);
    pub const B7: Self = Self(1 << 7);

    /// All eight masks, lowest first
    pub const ALL: [Self; 8] = [
        Self::B0,
        Self::B1,
        Self::B2,
        Self::B3,
        Self::B4,
        Self::B5,
        Self::B6,
        Self::B7,
    ];

    /// Raw mask value
    pub const fn mask(self) -> u8 {
        self.0
    }
}

/// Set `bit` in `byte`
pub const fn set(byte: u8, bit: Bit) -> u8 {
    byte | bit.0
}

/// Clear `bit` in `byte`
pub const fn clear(byte: u8, bit: Bit) -> u8 {
    byte & !bit.0
}

/// Flip `bit` in `byte`
pub const fn toggle(byte: u8, bit: Bit) -> u8 {
    byte ^ bit.0
}

/// Check whether `bit` is set in `byte`
pub const fn has(byte: u8, bit: Bit) -> bool {
    byte & bit.0 != 0
}

/// Set or clear `bit` depending on `on`
pub const fn assign(byte: u8, bit: Bit, on: bool) -> u8 {
    if on { set(byte, bit) } else { clear(byte, bit) }
}

/// A magnitude and a flag bit sharing one byte
///
/// The magnitude occupies `mask << shift`; the flag is a single bit outside
/// that range. Overlap is rejected when the constant is built, so a bad
/// layout fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedField {
    pub flag: Bit,
    pub mask: u8,
    pub shift: u8,
}

impl PackedField {
    pub const fn new(flag: Bit, mask: u8, shift: u8) -> Self {
        assert!(shift < 8, "shift out of range");
        assert!(
            (mask << shift) >> shift == mask,
            "mask does not fit after shifting"
        );
        assert!(
            (mask << shift) & flag.0 == 0,
            "magnitude overlaps flag bit"
        );
        Self { flag, mask, shift }
    }

    /// Bits covered by the magnitude, in place
    pub const fn value_bits(self) -> u8 {
        self.mask << self.shift
    }

    /// Extract the magnitude
    pub const fn value(self, byte: u8) -> u8 {
        (byte >> self.shift) & self.mask
    }

    /// Extract the flag
    pub const fn flag(self, byte: u8) -> bool {
        has(byte, self.flag)
    }

    pub const fn decode(self, byte: u8) -> (u8, bool) {
        (self.value(byte), self.flag(byte))
    }

    /// Compose a byte from magnitude and flag; magnitude bits above the mask are dropped
    pub const fn encode(self, value: u8, on: bool) -> u8 {
        assign((value & self.mask) << self.shift, self.flag, on)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has() {
        assert!(has(0xFF, Bit::B7));
        assert!(!has(0x7F, Bit::B7));
        assert!(has(0x01, Bit::B0));
        assert!(!has(0x00, Bit::B0));
    }

    #[test]
    fn test_set_clear_toggle_all_bytes() {
        for byte in 0..=u8::MAX {
            for bit in Bit::ALL {
                assert!(has(set(byte, bit), bit));
                assert!(!has(clear(byte, bit), bit));
                assert_eq!(toggle(toggle(byte, bit), bit), byte);
                assert_ne!(toggle(byte, bit), byte);
                // Other bits stay put
                assert_eq!(set(byte, bit) & !bit.mask(), byte & !bit.mask());
                assert_eq!(clear(byte, bit) & !bit.mask(), byte & !bit.mask());
            }
        }
    }

    #[test]
    fn test_assign() {
        assert_eq!(assign(0x00, Bit::B6, true), 0x40);
        assert_eq!(assign(0x7F, Bit::B6, false), 0x3F);
    }

    #[test]
    fn test_packed_field_shifted() {
        let high = PackedField::new(Bit::B7, 0x03, 4);
        assert_eq!(high.value_bits(), 0x30);
        assert_eq!(high.encode(2, true), 0xA0);
        assert_eq!(high.decode(0xA0), (2, true));
        // Out-of-mask magnitude bits never reach the flag
        assert_eq!(high.encode(0xFF, false), 0x30);
    }
}
