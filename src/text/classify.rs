//! Code point extraction and display classification.
//!
//! Classification is a display label, not a Unicode category lookup.
//! Buckets are checked in order: ASCII alphanumeric, whitespace, the two
//! emoji blocks, then everything else.

use std::fmt;
use std::ops::RangeInclusive;

/// Emoticons block.
pub const EMOTICON_RANGE: RangeInclusive<u32> = 0x1F600..=0x1F64F;
/// Miscellaneous Symbols and Pictographs block.
pub const PICTOGRAPH_RANGE: RangeInclusive<u32> = 0x1F300..=0x1F5FF;

/// Display bucket for a code point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodePointClass {
    BasicLatinAlnum,
    Space,
    EmojiEmoticon,
    EmojiPictograph,
    Unicode,
}

impl CodePointClass {
    pub fn name(self) -> &'static str {
        match self {
            Self::BasicLatinAlnum => "Basic Latin",
            Self::Space => "Space",
            Self::EmojiEmoticon => "Emoji (emoticon)",
            Self::EmojiPictograph => "Emoji (pictograph)",
            Self::Unicode => "Unicode",
        }
    }
}

impl fmt::Display for CodePointClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a code point into its display bucket.
pub fn classify(code_point: u32) -> CodePointClass {
    let ch = char::from_u32(code_point);
    if ch.is_some_and(|c| c.is_ascii_alphanumeric()) {
        CodePointClass::BasicLatinAlnum
    } else if ch.is_some_and(char::is_whitespace) {
        CodePointClass::Space
    } else if EMOTICON_RANGE.contains(&code_point) {
        CodePointClass::EmojiEmoticon
    } else if PICTOGRAPH_RANGE.contains(&code_point) {
        CodePointClass::EmojiPictograph
    } else {
        CodePointClass::Unicode
    }
}

/// One entry per Unicode scalar value, in text order.
pub fn code_points(text: &str) -> Vec<u32> {
    text.chars().map(u32::from).collect()
}

/// `U+` label with at least four hex digits, e.g. `U+0048`, `U+1F600`.
pub fn code_point_label(code_point: u32) -> String {
    format!("U+{code_point:04X}")
}
