//! Printable "string binary" representation of arbitrary bytes
//!
//! Printable bytes are kept as they are, everything else is written as a
//! `\xHH` escape with upper-case hex digits.
//!
//! # Example
//!
//! ```
//! # use hexbin::{to_bytes_binary, to_string_binary};
//! let s = to_string_binary(b"row\x00\x01key");
//! assert_eq!(s, "row\\x00\\x01key");
//! assert_eq!(to_bytes_binary(&s), b"row\x00\x01key");
//! ```

use crate::nibble::{decode_hex_nibble, encode_hex_nibble, is_hex_digit};

/// Non-alphanumeric bytes that are emitted without escaping
const PRINTABLE_SYMBOLS: &[u8] = b"`~!@#$%^&*()-_=+[]{}|;:'\",.<>/? ";

/// Bytes emitted verbatim by [`to_string_binary`]
const PRINTABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = (i as u8).is_ascii_alphanumeric();
        i += 1;
    }
    let mut j = 0;
    while j < PRINTABLE_SYMBOLS.len() {
        table[PRINTABLE_SYMBOLS[j] as usize] = true;
        j += 1;
    }
    table
};

/// Length of one `\xHH` escape
const ESCAPE_LEN: usize = 4;

/// Check whether `byte` is written without escaping
#[inline(always)]
pub const fn is_printable(byte: u8) -> bool { PRINTABLE[byte as usize] }

/// Render bytes as a printable string, escaping everything else as `\xHH`
pub fn to_string_binary(bytes: &[u8]) -> String {
    let escaped = bytes.iter().filter(|&&b| !is_printable(b)).count();
    let mut output = String::with_capacity(bytes.len() + escaped * (ESCAPE_LEN - 1));

    for &byte in bytes {
        if is_printable(byte) {
            output.push(byte as char);
        } else {
            output.push_str("\\x");
            output.push(encode_hex_nibble(byte >> 4) as char);
            output.push(encode_hex_nibble(byte) as char);
        }
    }
    output
}

/// Parse a string produced by [`to_string_binary`] back into bytes
///
/// A `\x` must be followed by two upper-case hex digits. A bogus escape is
/// not an error: its backslash is dropped and the remaining characters are
/// read as they are. Every other character contributes its low byte.
pub fn to_bytes_binary(input: &str) -> Vec<u8> {
    let bytes = input.as_bytes();
    let mut output = Vec::with_capacity(bytes.len());
    let mut chars = input.char_indices();

    while let Some((i, ch)) = chars.next() {
        if ch == '\\' && bytes.get(i + 1) == Some(&b'x') {
            match escaped_byte(&bytes[i + 2..]) {
                Some(byte) => {
                    output.push(byte);
                    // `x` and both digits are single-byte chars
                    chars.nth(ESCAPE_LEN - 2);
                }
                None => tracing::debug!(position = i, "skipping bogus escape"),
            }
            continue;
        }
        output.push(ch as u8);
    }

    output
}

/// Decode the two digits following `\x`, if both are hex digits
///
/// Bytes of multi-byte chars are never hex digits, so `rest` can be
/// inspected as raw UTF-8.
#[inline]
fn escaped_byte(rest: &[u8]) -> Option<u8> {
    let &[hi, lo, ..] = rest else { return None };
    if !is_hex_digit(hi) || !is_hex_digit(lo) {
        return None;
    }
    Some((decode_hex_nibble(hi) << 4) | decode_hex_nibble(lo))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_passthrough() {
        let input = b"Hello, World! `~@#$%^&*()-_=+[]{}|;:'\",.<>/?";
        assert_eq!(to_string_binary(input), core::str::from_utf8(input).unwrap());
    }

    #[test]
    fn test_escapes() {
        let test_cases = [
            (&[0x00u8] as &[u8], "\\x00"),
            (b"\\", "\\x5C"),
            (b"a\nb", "a\\x0Ab"),
            (&[0xFF, b'z'], "\\xFFz"),
            (b"\t \x7F", "\\x09 \\x7F"),
        ];

        for (input, expected) in test_cases {
            assert_eq!(to_string_binary(input), expected);
            assert_eq!(to_bytes_binary(expected), input);
        }
    }

    #[test]
    fn test_round_trip_all_bytes() {
        let all: Vec<u8> = (0..=u8::MAX).collect();
        let rendered = to_string_binary(&all);
        assert!(rendered.is_ascii());
        assert_eq!(to_bytes_binary(&rendered), all);
    }

    #[test]
    fn test_bogus_escapes() {
        // lower-case digits are not hex digits, the backslash is dropped
        assert_eq!(to_bytes_binary("\\xab"), b"xab");
        assert_eq!(to_bytes_binary("\\xG0!"), b"xG0!");
        // too short to carry two digits
        assert_eq!(to_bytes_binary("\\x"), b"x");
        assert_eq!(to_bytes_binary("\\xA"), b"xA");
        // not an escape at all
        assert_eq!(to_bytes_binary("\\y"), b"\\y");
        assert_eq!(to_bytes_binary("\\"), b"\\");
    }

    #[test]
    fn test_adjacent_escapes() {
        assert_eq!(to_bytes_binary("\\x00\\x01\\x02"), [0, 1, 2]);
        assert_eq!(to_bytes_binary("\\x\\x41"), b"xA");
    }

    #[test]
    fn test_non_ascii_narrowing() {
        // U+0141 narrows to its low byte
        assert_eq!(to_bytes_binary("\u{141}"), [0x41]);
        assert_eq!(to_bytes_binary("\\x\u{141}0"), b"x\x410");
    }

    #[test]
    fn test_escapes_between_multibyte_chars() {
        assert_eq!(to_bytes_binary("\u{141}\\x41\u{142}"), [0x41, 0x41, 0x42]);
        assert_eq!(to_bytes_binary("\\x7F\u{1F600}\\x00"), [0x7F, 0x00, 0x00]);
        assert_eq!(to_bytes_binary("\\xA\u{141}"), b"xA\x41");
    }
}
