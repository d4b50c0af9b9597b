//! Environment driven configuration

use alloc::borrow::Cow;
use core::{fmt, str::FromStr};
use std::ffi::OsStr;

/// Conversion performed by the command-line tool
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    /// Hex text -> raw bytes
    #[default]
    Decode,
    /// Raw bytes -> hex text
    Encode,
    /// Raw bytes -> string binary
    Escape,
    /// String binary -> raw bytes
    Unescape,
}

impl Mode {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Decode => "decode",
            Self::Encode => "encode",
            Self::Escape => "escape",
            Self::Unescape => "unescape",
        }
    }
}

impl fmt::Display for Mode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Unknown mode name
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseModeError(pub String);

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown mode '{}', expected one of: decode, encode, escape, unescape",
            self.0
        )
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "decode" => Ok(Self::Decode),
            "encode" => Ok(Self::Encode),
            "escape" => Ok(Self::Escape),
            "unescape" => Ok(Self::Unescape),
            other => Err(ParseModeError(other.to_owned())),
        }
    }
}

pub trait ParseFromEnv: Sized + 'static {
    type Result: From<Self>;

    fn parse_from_env(key: &str) -> Option<Self::Result>;
    #[inline]
    fn parse_from_env_or(key: &str, default: Self) -> Self::Result {
        Self::parse_from_env(key).unwrap_or(default.into())
    }
}

/// Parse a boolean flag: `true`/`1` or `false`/`0`, trimmed, any case
pub fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") || value == "1" {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") || value == "0" {
        Some(false)
    } else {
        None
    }
}

impl ParseFromEnv for bool {
    type Result = Self;

    #[inline]
    fn parse_from_env(key: &str) -> Option<bool> {
        ::std::env::var(key).ok().as_deref().and_then(parse_bool)
    }
}

impl ParseFromEnv for &'static str {
    type Result = Cow<'static, str>;

    #[inline]
    fn parse_from_env(key: &str) -> Option<Cow<'static, str>> {
        let value = ::std::env::var(key).ok()?;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == value.len() {
            Some(Cow::Owned(value))
        } else {
            Some(Cow::Owned(trimmed.to_owned()))
        }
    }
}

impl ParseFromEnv for Mode {
    type Result = Self;

    fn parse_from_env(key: &str) -> Option<Mode> {
        let value = <&'static str as ParseFromEnv>::parse_from_env(key)?;
        match value.parse() {
            Ok(mode) => Some(mode),
            Err(e) => {
                tracing::warn!("ignoring {key}: {e}");
                None
            }
        }
    }
}

#[inline]
pub fn parse_from_env<T: ParseFromEnv>(key: &str, default: T) -> T::Result {
    T::parse_from_env_or(key, default)
}

/// Pick the mode: positional argument first, then `env_key`, then `decode`
///
/// A bad argument is an error. A bad environment value only logs a warning.
pub fn select_mode(arg: Option<&OsStr>, env_key: &str) -> Result<Mode, ParseModeError> {
    match arg {
        Some(arg) => match arg.to_str() {
            Some(arg) => arg.parse(),
            None => Err(ParseModeError(arg.to_string_lossy().into_owned())),
        },
        None => Ok(parse_from_env(env_key, Mode::Decode)),
    }
}
