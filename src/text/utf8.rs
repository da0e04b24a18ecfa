//! UTF-8 encoding and strict decoding.
//!
//! Decoding never substitutes U+FFFD: malformed input is a [`DecodeError`].

use super::classify::{classify, code_point_label, CodePointClass};
use crate::error::DecodeError;

/// Largest Unicode scalar value.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// UTF-8 encode `text`.
pub fn encode_utf8(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Strictly decode UTF-8 `bytes`.
pub fn decode_utf8(bytes: &[u8]) -> Result<String, DecodeError> {
    let text = std::str::from_utf8(bytes)?;
    Ok(text.to_owned())
}

/// Encode one code point with the canonical bit packing.
///
/// ```text
/// U+0000..U+007F     0xxxxxxx
/// U+0080..U+07FF     110xxxxx 10xxxxxx
/// U+0800..U+FFFF     1110xxxx 10xxxxxx 10xxxxxx
/// U+10000..U+10FFFF  11110xxx 10xxxxxx 10xxxxxx 10xxxxxx
/// ```
///
/// Returns `None` for surrogates and values above U+10FFFF.
pub fn encode_code_point(cp: u32) -> Option<Vec<u8>> {
    const CONT: u32 = 0x80;
    const MASK: u32 = 0x3F;

    let bytes = match cp {
        0..=0x7F => vec![cp as u8],
        0x80..=0x7FF => vec![(0xC0 | (cp >> 6)) as u8, (CONT | (cp & MASK)) as u8],
        0xD800..=0xDFFF => return None,
        0x800..=0xFFFF => vec![
            (0xE0 | (cp >> 12)) as u8,
            (CONT | ((cp >> 6) & MASK)) as u8,
            (CONT | (cp & MASK)) as u8,
        ],
        0x10000..=MAX_CODE_POINT => vec![
            (0xF0 | (cp >> 18)) as u8,
            (CONT | ((cp >> 12) & MASK)) as u8,
            (CONT | ((cp >> 6) & MASK)) as u8,
            (CONT | (cp & MASK)) as u8,
        ],
        _ => return None,
    };
    Some(bytes)
}

/// Structural role of a byte inside a UTF-8 stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteRole {
    /// `0xxxxxxx`
    Ascii,
    /// Lead byte of a sequence of the given total length (2-4).
    Lead(u8),
    /// `10xxxxxx`
    Continuation,
    /// Never valid in UTF-8 (0xC0, 0xC1, 0xF5-0xFF).
    Invalid,
}

impl ByteRole {
    /// Number of high marker bits before the payload.
    pub fn marker_bits(self) -> u32 {
        match self {
            Self::Ascii => 1,
            Self::Lead(len) => u32::from(len) + 1,
            Self::Continuation => 2,
            Self::Invalid => 8,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Ascii => "ASCII",
            Self::Lead(2) => "lead (2-byte)",
            Self::Lead(3) => "lead (3-byte)",
            Self::Lead(_) => "lead (4-byte)",
            Self::Continuation => "continuation",
            Self::Invalid => "invalid",
        }
    }
}

/// Classify a single byte by its high bits.
pub fn byte_role(byte: u8) -> ByteRole {
    match byte {
        0x00..=0x7F => ByteRole::Ascii,
        0x80..=0xBF => ByteRole::Continuation,
        0xC2..=0xDF => ByteRole::Lead(2),
        0xE0..=0xEF => ByteRole::Lead(3),
        0xF0..=0xF4 => ByteRole::Lead(4),
        _ => ByteRole::Invalid,
    }
}

/// Per-character view of a string for the byte layout table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharBreakdown {
    pub ch: char,
    pub code_point: u32,
    pub label: String,
    pub class: CodePointClass,
    pub bytes: Vec<u8>,
}

impl CharBreakdown {
    /// Roles of this character's bytes, in order.
    pub fn roles(&self) -> impl Iterator<Item = ByteRole> + '_ {
        self.bytes.iter().map(|&b| byte_role(b))
    }
}

/// Break `text` into characters with their code point and UTF-8 bytes.
pub fn char_breakdown(text: &str) -> Vec<CharBreakdown> {
    text.chars()
        .filter_map(|ch| {
            let code_point = u32::from(ch);
            // A `char` is always a scalar value, so this never skips
            let bytes = encode_code_point(code_point)?;
            Some(CharBreakdown {
                ch,
                code_point,
                label: code_point_label(code_point),
                class: classify(code_point),
                bytes,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encode_examples() {
        assert_eq!(encode_utf8("Hi"), vec![0x48, 0x69]);
        assert_eq!(encode_utf8("é"), vec![0xC3, 0xA9]);
        assert_eq!(encode_utf8("€"), vec![0xE2, 0x82, 0xAC]);
        assert_eq!(encode_utf8("😀"), vec![0xF0, 0x9F, 0x98, 0x80]);
    }

    #[test]
    fn test_round_trip() {
        for s in ["", "Hello", "naïve café", "日本語", "emoji 😀🌍 mix", "\u{10FFFF}"] {
            assert_eq!(decode_utf8(&encode_utf8(s)).as_deref(), Ok(s));
        }
    }

    #[test]
    fn test_every_scalar_value() {
        let all: String = (0..=MAX_CODE_POINT).filter_map(char::from_u32).collect();
        let encoded = encode_utf8(&all);
        assert_eq!(decode_utf8(&encoded).as_deref(), Ok(all.as_str()));

        let mut packed = Vec::with_capacity(encoded.len());
        for ch in all.chars() {
            let mut buf = [0u8; 4];
            let bytes = encode_code_point(u32::from(ch));
            assert_eq!(bytes.as_deref(), Some(ch.encode_utf8(&mut buf).as_bytes()), "{ch:?}");
            packed.extend(bytes.unwrap_or_default());
        }
        assert!(packed == encoded);
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert_eq!(
            decode_utf8(&[0xFF, 0xFE]),
            Err(DecodeError::InvalidByte { offset: 0, len: 1 })
        );
        // Stray continuation byte after valid ASCII
        assert_eq!(decode_utf8(&[0x41, 0x80]).map_err(|e| e.offset()), Err(1));
        // Overlong encoding of '/'
        assert!(decode_utf8(&[0xC0, 0xAF]).is_err());
        // Encoded surrogate U+D800
        assert!(decode_utf8(&[0xED, 0xA0, 0x80]).is_err());
        // Truncated 3-byte sequence
        assert_eq!(
            decode_utf8(&[0x41, 0xE2, 0x82]),
            Err(DecodeError::Truncated { offset: 1 })
        );
    }

    #[test]
    fn test_encode_code_point_rejects_non_scalars() {
        for cp in [0xD800, 0xDBFF, 0xDC00, 0xDFFF, 0x110000, u32::MAX] {
            assert_eq!(encode_code_point(cp), None, "U+{cp:04X}");
        }
        assert_eq!(encode_code_point(0x7FF), Some(vec![0xDF, 0xBF]));
        assert_eq!(encode_code_point(0xFFFF), Some(vec![0xEF, 0xBF, 0xBF]));
        assert_eq!(encode_code_point(MAX_CODE_POINT), Some(vec![0xF4, 0x8F, 0xBF, 0xBF]));
    }

    #[test]
    fn test_byte_roles() {
        assert_eq!(byte_role(b'A'), ByteRole::Ascii);
        assert_eq!(byte_role(0xC3), ByteRole::Lead(2));
        assert_eq!(byte_role(0xE2), ByteRole::Lead(3));
        assert_eq!(byte_role(0xF0), ByteRole::Lead(4));
        assert_eq!(byte_role(0xA9), ByteRole::Continuation);
        assert_eq!(byte_role(0xC0), ByteRole::Invalid);
        assert_eq!(byte_role(0xFF), ByteRole::Invalid);
        assert_eq!(ByteRole::Lead(3).marker_bits(), 4);
    }

    #[test]
    fn test_char_breakdown() {
        let rows = char_breakdown("a€");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "U+0061");
        assert_eq!(rows[0].class, CodePointClass::BasicLatinAlnum);
        assert_eq!(rows[1].bytes, vec![0xE2, 0x82, 0xAC]);
        assert_eq!(
            rows[1].roles().collect::<Vec<_>>(),
            vec![
                ByteRole::Lead(3),
                ByteRole::Continuation,
                ByteRole::Continuation
            ]
        );

        let text = "é 日本 😀\u{10FFFF}";
        let rows = char_breakdown(text);
        assert_eq!(rows.len(), text.chars().count());
        let joined: Vec<u8> = rows.iter().flat_map(|r| r.bytes.iter().copied()).collect();
        assert_eq!(joined, encode_utf8(text));
    }
}
