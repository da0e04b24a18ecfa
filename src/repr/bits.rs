//! Single-bit inspection and toggling for the bit grid.

use super::width::BitWidth;

/// Whether bit `index` (0 = least significant) is set.
#[inline]
pub fn bit_is_set(value: u32, index: u32) -> bool {
    index < 32 && (value >> index) & 1 == 1
}

/// Flip bit `index`. Indexes outside `width` leave the value unchanged.
#[inline]
pub fn toggle_bit(value: u32, index: u32, width: BitWidth) -> u32 {
    if index >= width.bits() {
        return value;
    }
    (value ^ (1 << index)) & width.max_unsigned()
}

/// Place value of bit `index`, `2^index`.
#[inline]
pub fn place_value(index: u32) -> u64 {
    1u64 << index.min(63)
}
