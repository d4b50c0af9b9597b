use core::fmt;

/// Single hex digit decode error
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NibbleError {
    /// Byte is not an upper-case hex digit (`0-9`, `A-F`)
    InvalidDigit {
        /// Invalid byte value
        byte: u8,
    },
}

impl fmt::Display for NibbleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NibbleError::InvalidDigit { byte } => write!(
                f,
                "invalid hex digit '{}' (0x{:02X})",
                byte.escape_ascii(),
                byte
            ),
        }
    }
}

impl std::error::Error for NibbleError {}

/// Hex string decode error
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// Input has an odd number of characters
    OddLength {
        /// Input length
        len: usize,
    },
    /// Encountered a character that is not an upper-case hex digit
    InvalidDigit {
        /// Invalid byte value
        byte: u8,
        /// Position of byte in input
        position: usize,
    },
}

impl DecodeError {
    #[inline]
    pub(crate) const fn at(err: NibbleError, position: usize) -> Self {
        match err {
            NibbleError::InvalidDigit { byte } => DecodeError::InvalidDigit { byte, position },
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::OddLength { len } => {
                write!(f, "hex input has odd length {len}")
            }
            DecodeError::InvalidDigit { byte, position } => {
                write!(
                    f,
                    "invalid hex digit '{}' (0x{:02X}) at position {}",
                    byte.escape_ascii(),
                    byte,
                    position
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            NibbleError::InvalidDigit { byte: b'g' }.to_string(),
            "invalid hex digit 'g' (0x67)"
        );
        assert_eq!(DecodeError::OddLength { len: 3 }.to_string(), "hex input has odd length 3");
        assert_eq!(
            DecodeError::InvalidDigit { byte: b'\n', position: 4 }.to_string(),
            "invalid hex digit '\\n' (0x0A) at position 4"
        );
    }
}
