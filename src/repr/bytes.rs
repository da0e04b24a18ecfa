//! Big- and little-endian byte decomposition.

use super::width::BitWidth;

/// Split `value` into `ceil(bits/8)` bytes, most significant first.
pub fn to_big_endian_bytes(value: u32, width: BitWidth) -> Vec<u8> {
    (0..width.byte_len())
        .rev()
        .map(|i| ((value >> (8 * i)) & 0xFF) as u8)
        .collect()
}

/// The big-endian bytes in reverse order.
pub fn to_little_endian_bytes(value: u32, width: BitWidth) -> Vec<u8> {
    let mut bytes = to_big_endian_bytes(value, width);
    bytes.reverse();
    bytes
}
