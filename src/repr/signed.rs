//! Two's-complement interpretation of unsigned bit patterns.

use super::width::BitWidth;

/// Reinterpret `value` as a two's-complement signed integer of `width` bits.
///
/// Returns `value - 2^bits` when the sign bit is set, `value` otherwise.
pub fn to_signed(value: u32, width: BitWidth) -> i64 {
    let value = i64::from(value & width.max_unsigned());
    if value >= i64::from(width.sign_bit()) {
        value - width.modulus() as i64
    } else {
        value
    }
}

/// Inclusive range of signed values representable in `width` bits.
pub fn signed_range(width: BitWidth) -> (i64, i64) {
    let half = i64::from(width.sign_bit());
    (-half, half - 1)
}
