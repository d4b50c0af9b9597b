//! ASCII hex digit decoding and escaped binary strings
//!
//! The core is [`decode_hex_nibble`], which turns one upper-case hex digit
//! into its value without validating it. Everything else is layered on top:
//!
//! - [`decode_hex_nibble_checked`]: the same, rejecting non hex digits
//! - [`decode_hex`] / [`encode_hex`]: upper-case hex strings
//! - [`to_string_binary`] / [`to_bytes_binary`]: printable text with `\xHH`
//!   escapes for everything else
//!
//! # Example
//!
//! ```
//! use hexbin::{decode_hex, decode_hex_nibble, decode_hex_nibble_checked};
//!
//! assert_eq!(decode_hex_nibble(b'F'), 15);
//! assert!(decode_hex_nibble_checked(b'f').is_err());
//! assert_eq!(decode_hex(b"CAFE").unwrap(), [0xCA, 0xFE]);
//! ```

extern crate alloc;

mod binary;
pub mod config;
mod convert;
mod error;
mod hex;
mod nibble;

// Public API
pub use binary::{is_printable, to_bytes_binary, to_string_binary};
pub use convert::{ConvertError, convert};
pub use error::{DecodeError, NibbleError};
pub use hex::{decode_hex, encode_hex, encoded_len, hex_to_byte};
pub use nibble::{
    HEX_CHARS, decode_hex_nibble, decode_hex_nibble_checked, encode_hex_nibble, is_hex_digit,
};
