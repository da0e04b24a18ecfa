//! Bit width selection.

use std::fmt;

use clap::ValueEnum;

/// Supported integer widths. On the command line they are `8`, `16` and `32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum BitWidth {
    #[default]
    #[value(name = "8")]
    W8,
    #[value(name = "16")]
    W16,
    #[value(name = "32")]
    W32,
}

impl BitWidth {
    /// Number of bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
        }
    }

    /// `2^bits`, the modulus for wrapping arithmetic.
    pub const fn modulus(self) -> u64 {
        1u64 << self.bits()
    }

    /// Largest unsigned value, `2^bits - 1`.
    pub const fn max_unsigned(self) -> u32 {
        (self.modulus() - 1) as u32
    }

    /// `2^(bits-1)`: first value whose top bit is set.
    pub const fn sign_bit(self) -> u32 {
        1u32 << (self.bits() - 1)
    }

    /// Number of hex digits needed, `ceil(bits / 4)`.
    pub const fn hex_digits(self) -> usize {
        self.bits().div_ceil(4) as usize
    }

    /// Number of bytes, `ceil(bits / 8)`.
    pub const fn byte_len(self) -> usize {
        self.bits().div_ceil(8) as usize
    }

    /// Display name for the width selector.
    pub fn name(self) -> &'static str {
        match self {
            Self::W8 => "8-bit",
            Self::W16 => "16-bit",
            Self::W32 => "32-bit",
        }
    }

    /// All widths, narrowest first.
    pub fn all() -> &'static [Self] {
        &[Self::W8, Self::W16, Self::W32]
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_constants() {
        assert_eq!(BitWidth::W8.max_unsigned(), 0xFF);
        assert_eq!(BitWidth::W16.max_unsigned(), 0xFFFF);
        assert_eq!(BitWidth::W32.max_unsigned(), u32::MAX);
        assert_eq!(BitWidth::W32.modulus(), 1 << 32);
        assert_eq!(BitWidth::W16.sign_bit(), 0x8000);
    }

    #[test]
    fn test_digit_and_byte_counts() {
        for &width in BitWidth::all() {
            assert_eq!(width.hex_digits(), width.bits() as usize / 4);
            assert_eq!(width.byte_len(), width.bits() as usize / 8);
        }
    }

    #[test]
    fn test_value_names_are_bit_counts() {
        for &width in BitWidth::all() {
            let name = width.bits().to_string();
            assert_eq!(BitWidth::from_str(&name, false), Ok(width));
        }
        assert!(BitWidth::from_str("12", false).is_err());
    }
}
