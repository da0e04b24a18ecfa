//! Text representation engine.
//!
//! - UTF-8 encoding, strict decoding, per-byte roles
//! - Code point extraction and display classification
//! - Parsing of pasted hex-byte text

pub mod classify;
pub mod hex_input;
pub mod utf8;

pub use classify::{classify, code_point_label, code_points, CodePointClass};
pub use hex_input::{decode_hex_text, parse_hex_bytes};
pub use utf8::{
    byte_role, char_breakdown, decode_utf8, encode_code_point, encode_utf8, ByteRole,
    CharBreakdown,
};
