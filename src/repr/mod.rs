//! Number representation engine.
//!
//! Pure functions over `(value, width, base)`:
//! - Width-aware wrapping and base conversion
//! - Two's-complement interpretation
//! - Endianness byte decomposition
//! - Bit toggling for the interactive bit grid

pub mod base;
pub mod bits;
pub mod bytes;
pub mod signed;
pub mod width;

pub use base::{format, parse, parse_wrapped, wrap_int, wrap_to_width, Base};
pub use bits::{bit_is_set, place_value, toggle_bit};
pub use bytes::{to_big_endian_bytes, to_little_endian_bytes};
pub use signed::{signed_range, to_signed};
pub use width::BitWidth;
