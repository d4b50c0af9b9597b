//! Hex string encode/decode built on the nibble primitive
//!
//! Upper-case only, two characters per byte, high nibble first.

use crate::{
    error::DecodeError,
    nibble::{HEX_CHARS, decode_hex_nibble_checked},
};

/// Decode lookup table: maps ASCII characters to 0-15 or 0xFF (invalid)
pub(crate) const HEX_TABLE: &[u8; 256] = &{
    let mut buf = [0xFF; 256];
    let mut i: u8 = 0;
    loop {
        buf[i as usize] = match decode_hex_nibble_checked(i) {
            Ok(n) => n,
            Err(_) => 0xFF,
        };
        if i == 255 {
            break buf;
        }
        i += 1;
    }
};

/// Decode two hex characters into one byte
#[inline(always)]
pub const fn hex_to_byte(hi: u8, lo: u8) -> Option<u8> {
    let high = HEX_TABLE[hi as usize];
    if high == 0xFF {
        return None;
    }
    let low = HEX_TABLE[lo as usize];
    if low == 0xFF {
        return None;
    }
    Some((high << 4) | low)
}

/// Exact length after encoding
#[inline(always)]
pub const fn encoded_len(input_len: usize) -> usize { input_len * 2 }

/// Decode an upper-case hex string
///
/// # Error
///
/// - [`DecodeError::OddLength`]: input length is not a multiple of two
/// - [`DecodeError::InvalidDigit`]: input contains a byte outside `0-9A-F`
///
/// # Example
///
/// ```
/// # use hexbin::decode_hex;
/// assert_eq!(decode_hex(b"00FF7A").unwrap(), [0x00, 0xFF, 0x7A]);
/// assert!(decode_hex(b"7a").is_err());
/// ```
pub fn decode_hex(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    if input.len() % 2 != 0 {
        return Err(DecodeError::OddLength { len: input.len() });
    }

    let mut output = Vec::with_capacity(input.len() / 2);
    for (i, pair) in input.chunks_exact(2).enumerate() {
        let position = i * 2;
        let high = decode_hex_nibble_checked(pair[0]).map_err(|e| DecodeError::at(e, position))?;
        let low = decode_hex_nibble_checked(pair[1]).map_err(|e| DecodeError::at(e, position + 1))?;
        output.push((high << 4) | low);
    }

    tracing::trace!(input = input.len(), output = output.len(), "decoded hex");
    Ok(output)
}

/// Encode bytes as an upper-case hex string
pub fn encode_hex(bytes: &[u8]) -> String {
    let mut output = String::with_capacity(encoded_len(bytes.len()));
    for &byte in bytes {
        output.push(HEX_CHARS[(byte >> 4) as usize] as char);
        output.push(HEX_CHARS[(byte & 0x0F) as usize] as char);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(encode_hex(b""), "");
        assert_eq!(decode_hex(b"").unwrap(), b"");
    }

    #[test]
    fn test_basic() {
        let test_cases = [
            (&[0x00u8] as &[u8], "00"),
            (&[0x0F], "0F"),
            (&[0xF0], "F0"),
            (&[0xDE, 0xAD, 0xBE, 0xEF], "DEADBEEF"),
            (b"hbase", "6862617365"),
        ];

        for (input, expected) in test_cases {
            let encoded = encode_hex(input);
            assert_eq!(encoded, expected);
            assert_eq!(decode_hex(encoded.as_bytes()).unwrap(), input);
        }
    }

    #[test]
    fn test_matches_reference_encoder() {
        let all: Vec<u8> = (0..=u8::MAX).collect();
        let encoded = encode_hex(&all);
        assert_eq!(encoded, hex::encode_upper(&all));
        assert_eq!(decode_hex(encoded.as_bytes()).unwrap(), all);
    }

    #[test]
    fn test_hex_to_byte() {
        assert_eq!(hex_to_byte(b'7', b'F'), Some(0x7F));
        assert_eq!(hex_to_byte(b'0', b'0'), Some(0x00));
        assert_eq!(hex_to_byte(b'f', b'f'), None);
        assert_eq!(hex_to_byte(b'0', b'x'), None);
    }

    #[test]
    fn test_table_agrees_with_primitive() {
        for c in 0..=u8::MAX {
            match HEX_TABLE[c as usize] {
                0xFF => assert!(decode_hex_nibble_checked(c).is_err()),
                n => assert_eq!(crate::nibble::decode_hex_nibble(c), n),
            }
        }
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(decode_hex(b"ABC"), Err(DecodeError::OddLength { len: 3 }));

        match decode_hex(b"00ab") {
            Err(DecodeError::InvalidDigit { byte: b'a', position: 2 }) => {}
            other => panic!("Expected InvalidDigit error, got: {:?}", other),
        }

        match decode_hex(b"0G") {
            Err(DecodeError::InvalidDigit { byte: b'G', position: 1 }) => {}
            other => panic!("Expected InvalidDigit error, got: {:?}", other),
        }
    }
}
