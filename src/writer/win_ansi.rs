//! WinAnsi (Windows-1252) text encoding for Base-14 fonts.
//!
//! Standard fonts are declared with `/Encoding /WinAnsiEncoding`, so shown
//! strings must be single bytes in that code page. Bytes outside printable
//! ASCII are written as octal escapes, which keeps content streams 7-bit.

/// Byte used for characters the code page cannot represent.
pub const REPLACEMENT: u8 = b'?';

/// Map a Unicode scalar to its WinAnsi byte.
///
/// Direct mapping for 0x00-0x7F and 0xA0-0xFF; the 0x80-0x9F range holds
/// the typographic characters where Windows-1252 differs from Latin-1.
pub fn unicode_to_winansi(ch: char) -> Option<u8> {
    let codepoint = ch as u32;
    if codepoint < 0x80 || (0xA0..=0xFF).contains(&codepoint) {
        return Some(codepoint as u8);
    }

    match codepoint {
        0x20AC => Some(0x80), // Euro sign
        0x201A => Some(0x82),
        0x0192 => Some(0x83),
        0x201E => Some(0x84),
        0x2026 => Some(0x85), // Horizontal ellipsis
        0x2020 => Some(0x86),
        0x2021 => Some(0x87),
        0x02C6 => Some(0x88),
        0x2030 => Some(0x89),
        0x0160 => Some(0x8A),
        0x2039 => Some(0x8B),
        0x0152 => Some(0x8C),
        0x017D => Some(0x8E),
        0x2018 => Some(0x91),
        0x2019 => Some(0x92), // Right single quotation mark
        0x201C => Some(0x93),
        0x201D => Some(0x94),
        0x2022 => Some(0x95), // Bullet
        0x2013 => Some(0x96), // En dash
        0x2014 => Some(0x97), // Em dash
        0x02DC => Some(0x98),
        0x2122 => Some(0x99),
        0x0161 => Some(0x9A),
        0x203A => Some(0x9B),
        0x0153 => Some(0x9C),
        0x017E => Some(0x9E),
        0x0178 => Some(0x9F),
        _ => None,
    }
}

/// Encode text to WinAnsi bytes, substituting [`REPLACEMENT`] for
/// characters outside the code page.
pub fn encode(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| unicode_to_winansi(ch).unwrap_or(REPLACEMENT))
        .collect()
}

/// Append `bytes` to `out` with PDF literal-string escaping (without the
/// surrounding parentheses).
pub fn escape_literal_into(bytes: &[u8], out: &mut Vec<u8>) {
    for &b in bytes {
        match b {
            b'(' => out.extend_from_slice(b"\\("),
            b')' => out.extend_from_slice(b"\\)"),
            b'\\' => out.extend_from_slice(b"\\\\"),
            0x0A => out.extend_from_slice(b"\\n"),
            0x0D => out.extend_from_slice(b"\\r"),
            0x09 => out.extend_from_slice(b"\\t"),
            0x08 => out.extend_from_slice(b"\\b"),
            0x0C => out.extend_from_slice(b"\\f"),
            0x20..=0x7E => out.push(b),
            _ => out.extend_from_slice(format!("\\{:03o}", b).as_bytes()),
        }
    }
}
