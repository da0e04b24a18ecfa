//! Pasted hex-byte text, e.g. `48 65 0x6C 6c 6F`.

use super::utf8::decode_utf8;
use crate::error::{HexBytesError, HexDecodeError};

/// Parse whitespace-separated hex byte tokens.
///
/// Each token is one or two hex digits, optionally prefixed with `0x`/`0X`.
/// Empty input parses to an empty byte list.
pub fn parse_hex_bytes(input: &str) -> Result<Vec<u8>, HexBytesError> {
    input
        .split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            parse_token(token).ok_or_else(|| HexBytesError {
                index,
                token: token.to_string(),
            })
        })
        .collect()
}

fn parse_token(token: &str) -> Option<u8> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    if digits.is_empty() || digits.len() > 2 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(digits, 16).ok()
}

/// Parse hex bytes and decode them as UTF-8.
pub fn decode_hex_text(input: &str) -> Result<String, HexDecodeError> {
    let bytes = parse_hex_bytes(input)?;
    Ok(decode_utf8(&bytes)?)
}
