//! Single hex digit <-> nibble conversion
//!
//! Only upper-case digits (`0-9`, `A-F`) are hex digits here. The unchecked
//! decoder keeps the permissive legacy behavior: anything that is not `A-F`
//! is treated as a decimal digit, whatever it actually is.

use crate::error::NibbleError;

/// Encode character table (upper-case)
pub const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Decode a single ASCII hex digit into its nibble value without validation
///
/// - `b'A'..=b'F'` yields `10..=15`
/// - every other byte yields `ch - b'0'` (wrapping), so `b'0'..=b'9'` yields
///   `0..=9` and anything else yields a meaningless value
///
/// Callers that cannot guarantee the input alphabet should use
/// [`decode_hex_nibble_checked`].
///
/// # Example
///
/// ```
/// # use hexbin::decode_hex_nibble;
/// assert_eq!(decode_hex_nibble(b'7'), 7);
/// assert_eq!(decode_hex_nibble(b'C'), 12);
/// // lower-case is not a hex digit to this decoder
/// assert_eq!(decode_hex_nibble(b'c'), b'c' - b'0');
/// ```
#[inline(always)]
pub const fn decode_hex_nibble(ch: u8) -> u8 {
    match ch {
        b'A'..=b'F' => 10 + (ch - b'A'),
        _ => ch.wrapping_sub(b'0'),
    }
}

/// Decode a single ASCII hex digit, rejecting anything outside `0-9A-F`
///
/// For valid input the result is identical to [`decode_hex_nibble`].
///
/// # Error
///
/// - [`NibbleError::InvalidDigit`]: `ch` is not an upper-case hex digit
#[inline]
pub const fn decode_hex_nibble_checked(ch: u8) -> Result<u8, NibbleError> {
    match ch {
        b'0'..=b'9' | b'A'..=b'F' => Ok(decode_hex_nibble(ch)),
        _ => Err(NibbleError::InvalidDigit { byte: ch }),
    }
}

/// Check whether `ch` is an upper-case ASCII hex digit
#[inline(always)]
pub const fn is_hex_digit(ch: u8) -> bool { matches!(ch, b'0'..=b'9' | b'A'..=b'F') }

/// Encode the low four bits of `nibble` as an upper-case ASCII hex digit
#[inline(always)]
pub const fn encode_hex_nibble(nibble: u8) -> u8 { HEX_CHARS[(nibble & 0x0F) as usize] }
