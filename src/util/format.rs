//! Formatting utility functions.
//!
//! Text layout helpers shared by the number, text and decoder tools.

use std::fmt::Write;

/// Insert a space between every `group` characters, counting from the right.
///
/// # Examples
/// ```
/// use reprlab::util::format::group_digits;
/// assert_eq!(group_digits("11001000", 4), "1100 1000");
/// assert_eq!(group_digits("101", 4), "101");
/// ```
pub fn group_digits(digits: &str, group: usize) -> String {
    if group == 0 {
        return digits.to_string();
    }
    let chars: Vec<char> = digits.chars().collect();
    let mut output = String::with_capacity(chars.len() + chars.len() / group);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % group == 0 {
            output.push(' ');
        }
        output.push(*c);
    }
    output
}

/// Space-separated upper-case hex bytes, e.g. `48 65 6C`.
pub fn hex_bytes(bytes: &[u8]) -> String {
    let mut output = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            output.push(' ');
        }
        let _ = write!(output, "{byte:02X}");
    }
    output
}

/// Format a hex dump string for a UTF-8 byte buffer.
///
/// Format: `XXXX  XX XX XX XX XX XX XX XX  |........|`
pub fn hex_dump(data: &[u8]) -> String {
    const BYTES_PER_LINE: usize = 8;

    let mut output = String::with_capacity(data.len() * 4);

    for (line, chunk) in data.chunks(BYTES_PER_LINE).enumerate() {
        // Offset
        let _ = write!(output, "{:04X}  ", line * BYTES_PER_LINE);

        for &byte in chunk {
            let _ = write!(output, "{byte:02X} ");
        }
        for _ in chunk.len()..BYTES_PER_LINE {
            output.push_str("   ");
        }

        output.push_str(" |");
        for &byte in chunk {
            if (0x20..=0x7e).contains(&byte) {
                output.push(byte as char);
            } else {
                output.push('.');
            }
        }
        output.push_str("|\n");
    }

    output
}
