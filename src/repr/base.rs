//! Conversion between unsigned values and decimal/hex/binary text.
//!
//! Formatting is width-aware (zero padding, 4-bit grouping for binary).
//! Parsing is width-agnostic: it returns the raw integer and leaves wrapping
//! to [`wrap_int`] so the caller decides how out-of-range input behaves.

use std::fmt;

use super::width::BitWidth;
use crate::error::ParseError;
use crate::util::format::group_digits;

/// Number base of a text field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Base {
    Decimal,
    Hex,
    Binary,
}

impl Base {
    /// Numeric radix.
    pub const fn radix(self) -> u32 {
        match self {
            Self::Decimal => 10,
            Self::Hex => 16,
            Self::Binary => 2,
        }
    }

    /// Field label.
    pub fn name(self) -> &'static str {
        match self {
            Self::Decimal => "DEC",
            Self::Hex => "HEX",
            Self::Binary => "BIN",
        }
    }

    /// All bases in display order.
    pub fn all() -> &'static [Self] {
        &[Self::Decimal, Self::Hex, Self::Binary]
    }

    /// Literal prefixes stripped before parsing.
    fn prefixes(self) -> &'static [&'static str] {
        match self {
            Self::Decimal => &[],
            Self::Hex => &["0x", "0X"],
            Self::Binary => &["0b", "0B"],
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Decimal => "decimal",
            Self::Hex => "hex",
            Self::Binary => "binary",
        })
    }
}

/// Wrap any integer into `[0, 2^bits - 1]` (two's-complement style).
pub fn wrap_int(n: i64, width: BitWidth) -> u32 {
    n.rem_euclid(width.modulus() as i64) as u32
}

/// Wrap an arbitrary real into `[0, 2^bits - 1]`.
///
/// Fractions truncate toward zero; NaN and infinities become 0.
pub fn wrap_to_width(n: f64, width: BitWidth) -> u32 {
    if !n.is_finite() {
        return 0;
    }
    let truncated = n.trunc();
    // Values beyond i64 still wrap correctly via f64 remainder
    let modulus = width.modulus() as f64;
    let wrapped = truncated.rem_euclid(modulus);
    if wrapped >= modulus {
        0
    } else {
        wrapped as u32
    }
}

/// Render `value` in `base`, padded for `width`.
///
/// Hex is upper-case with `ceil(bits/4)` digits; binary is exactly `bits`
/// digits grouped by four.
pub fn format(value: u32, width: BitWidth, base: Base) -> String {
    let value = value & width.max_unsigned();
    match base {
        Base::Decimal => value.to_string(),
        Base::Hex => format!("{value:0digits$X}", digits = width.hex_digits()),
        Base::Binary => {
            let raw = format!("{value:0bits$b}", bits = width.bits() as usize);
            group_digits(&raw, 4)
        }
    }
}

/// Parse a field value in `base`.
///
/// Whitespace and `_` separators are ignored, as are `0x`/`0b` prefixes.
/// Decimal input may carry a leading `-`; the result is then negative and the
/// caller wraps it.
pub fn parse(input: &str, base: Base) -> Result<i64, ParseError> {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .collect();

    let (negative, digits) = match cleaned.strip_prefix('-') {
        Some(rest) if base == Base::Decimal => (true, rest),
        _ => (false, cleaned.as_str()),
    };
    let digits = base
        .prefixes()
        .iter()
        .find_map(|p| digits.strip_prefix(p))
        .unwrap_or(digits);

    if digits.is_empty() {
        return Err(ParseError::Empty(base));
    }
    if let Some(digit) = digits.chars().find(|c| !c.is_digit(base.radix())) {
        return Err(ParseError::InvalidDigit { base, digit });
    }

    let magnitude =
        u64::from_str_radix(digits, base.radix()).map_err(|_| ParseError::Overflow(base))?;
    let magnitude = i64::try_from(magnitude).map_err(|_| ParseError::Overflow(base))?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Parse and wrap into `width` in one step.
pub fn parse_wrapped(input: &str, base: Base, width: BitWidth) -> Result<u32, ParseError> {
    parse(input, base).map(|n| wrap_int(n, width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_examples() {
        assert_eq!(format(200, BitWidth::W8, Base::Hex), "C8");
        assert_eq!(format(200, BitWidth::W8, Base::Binary), "1100 1000");
        assert_eq!(format(200, BitWidth::W8, Base::Decimal), "200");
        assert_eq!(format(65000, BitWidth::W16, Base::Hex), "FDE8");
        assert_eq!(format(5, BitWidth::W16, Base::Hex), "0005");
        assert_eq!(
            format(1, BitWidth::W16, Base::Binary),
            "0000 0000 0000 0001"
        );
        assert_eq!(format(0xDEAD_BEEF, BitWidth::W32, Base::Hex), "DEADBEEF");
    }

    #[test]
    fn test_wrap_to_width() {
        assert_eq!(wrap_to_width(-1.0, BitWidth::W8), 255);
        assert_eq!(wrap_to_width(256.0, BitWidth::W8), 0);
        assert_eq!(wrap_to_width(300.0, BitWidth::W8), 44);
        assert_eq!(wrap_to_width(12.9, BitWidth::W8), 12);
        assert_eq!(wrap_to_width(-0.5, BitWidth::W8), 0);
        assert_eq!(wrap_to_width(f64::NAN, BitWidth::W16), 0);
        assert_eq!(wrap_to_width(f64::INFINITY, BitWidth::W16), 0);
        assert_eq!(wrap_to_width(-1.0, BitWidth::W32), u32::MAX);
    }

    #[test]
    fn test_wrap_int() {
        assert_eq!(wrap_int(-56, BitWidth::W8), 200);
        assert_eq!(wrap_int(65536, BitWidth::W16), 0);
        assert_eq!(wrap_int(-1, BitWidth::W32), u32::MAX);
        assert_eq!(wrap_int(1 << 40, BitWidth::W32), 0);
    }

    #[test]
    fn test_parse_accepts_prefixes_and_spacing() {
        assert_eq!(parse("0xC8", Base::Hex), Ok(200));
        assert_eq!(parse(" c8 ", Base::Hex), Ok(200));
        assert_eq!(parse("1100 1000", Base::Binary), Ok(200));
        assert_eq!(parse("0b1100_1000", Base::Binary), Ok(200));
        assert_eq!(parse("-56", Base::Decimal), Ok(-56));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse("", Base::Decimal), Err(ParseError::Empty(Base::Decimal)));
        assert_eq!(parse("0x", Base::Hex), Err(ParseError::Empty(Base::Hex)));
        assert_eq!(
            parse("12a", Base::Decimal),
            Err(ParseError::InvalidDigit {
                base: Base::Decimal,
                digit: 'a'
            })
        );
        assert_eq!(
            parse("102", Base::Binary),
            Err(ParseError::InvalidDigit {
                base: Base::Binary,
                digit: '2'
            })
        );
        assert_eq!(
            parse("-1", Base::Hex),
            Err(ParseError::InvalidDigit {
                base: Base::Hex,
                digit: '-'
            })
        );
        assert_eq!(
            parse("FFFFFFFFFFFFFFFFFF", Base::Hex),
            Err(ParseError::Overflow(Base::Hex))
        );
    }

    #[test]
    fn test_round_trip_narrow_widths_exhaustive() {
        for width in [BitWidth::W8, BitWidth::W16] {
            for v in 0..=width.max_unsigned() {
                for &base in Base::all() {
                    let text = format(v, width, base);
                    assert_eq!(parse(&text, base), Ok(i64::from(v)), "{base} {text}");
                }
            }
        }
    }

    #[test]
    fn test_round_trip_32_bit_sampled() {
        let samples = (0..=u32::MAX)
            .step_by(65_521)
            .chain([0x7FFF_FFFF, 0x8000_0000, u32::MAX]);
        for v in samples {
            for &base in Base::all() {
                let text = format(v, BitWidth::W32, base);
                assert_eq!(parse_wrapped(&text, base, BitWidth::W32), Ok(v));
            }
        }
    }
}
