//! Whole-buffer conversions behind the command-line tool

use crate::{binary, config::Mode, error::DecodeError, hex};
use core::{fmt, str::Utf8Error};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConvertError {
    Decode(DecodeError),
    Utf8(Utf8Error),
}

impl ConvertError {
    #[inline]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Decode(_) => "invalid_hex",
            Self::Utf8(_) => "invalid_utf8",
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "{}: {e}", self.error_type()),
            Self::Utf8(e) => write!(f, "{}: {e}", self.error_type()),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) => Some(e),
            Self::Utf8(e) => Some(e),
        }
    }
}

impl From<DecodeError> for ConvertError {
    #[inline]
    fn from(e: DecodeError) -> Self { Self::Decode(e) }
}

impl From<Utf8Error> for ConvertError {
    #[inline]
    fn from(e: Utf8Error) -> Self { Self::Utf8(e) }
}

/// Drop one trailing `\n` or `\r\n`, nothing else
///
/// Spaces are data in string binary text, so no wider trimming is done.
#[inline]
pub fn strip_line_ending(input: &[u8]) -> &[u8] {
    match input {
        [rest @ .., b'\r', b'\n'] | [rest @ .., b'\n'] => rest,
        _ => input,
    }
}

/// Apply `mode` to a complete input buffer
///
/// Text inputs (`decode`, `unescape`) lose a single trailing line ending
/// first.
pub fn convert(mode: Mode, input: &[u8]) -> Result<Vec<u8>, ConvertError> {
    let output = match mode {
        Mode::Decode => hex::decode_hex(strip_line_ending(input))?,
        Mode::Encode => hex::encode_hex(input).into_bytes(),
        Mode::Escape => binary::to_string_binary(input).into_bytes(),
        Mode::Unescape => {
            let text = core::str::from_utf8(strip_line_ending(input))?;
            binary::to_bytes_binary(text)
        }
    };
    tracing::debug!(%mode, input = input.len(), output = output.len(), "converted");
    Ok(output)
}
