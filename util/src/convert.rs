//! Widening conversions over fixed-width integers and lenient boolean
//! parsing.

use serde_json::Value;
use thiserror::Error;

/// Type alias for Result with `ConvertError`
pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConvertError {
    #[error("unsupported input kind: {0}")]
    UnsupportedKind(String),

    #[error("invalid boolean string; was '{0}'")]
    InvalidBool(String),
}

/// A signed integer of any fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signed {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
}

impl Signed {
    /// Widens the value to `i64`.
    pub fn as_i64(self) -> i64 {
        match self {
            Self::I8(n) => i64::from(n),
            Self::I16(n) => i64::from(n),
            Self::I32(n) => i64::from(n),
            Self::I64(n) => n,
            Self::Isize(n) => n as i64,
        }
    }
}

impl From<i8> for Signed {
    fn from(n: i8) -> Self {
        Self::I8(n)
    }
}

impl From<i16> for Signed {
    fn from(n: i16) -> Self {
        Self::I16(n)
    }
}

impl From<i32> for Signed {
    fn from(n: i32) -> Self {
        Self::I32(n)
    }
}

impl From<i64> for Signed {
    fn from(n: i64) -> Self {
        Self::I64(n)
    }
}

impl From<isize> for Signed {
    fn from(n: isize) -> Self {
        Self::Isize(n)
    }
}

impl TryFrom<&Value> for Signed {
    type Error = ConvertError;

    /// Accepts dynamic JSON values holding an integer representable as
    /// `i64`; anything else is an unsupported kind.
    fn try_from(value: &Value) -> Result<Self> {
        value
            .as_i64()
            .map(Self::I64)
            .ok_or_else(|| ConvertError::UnsupportedKind(kind_of(value).to_string()))
    }
}

/// An unsigned integer of any fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsigned {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
}

impl Unsigned {
    /// Widens the value to `u64`.
    pub fn as_u64(self) -> u64 {
        match self {
            Self::U8(n) => u64::from(n),
            Self::U16(n) => u64::from(n),
            Self::U32(n) => u64::from(n),
            Self::U64(n) => n,
            Self::Usize(n) => n as u64,
        }
    }
}

impl From<u8> for Unsigned {
    fn from(n: u8) -> Self {
        Self::U8(n)
    }
}

impl From<u16> for Unsigned {
    fn from(n: u16) -> Self {
        Self::U16(n)
    }
}

impl From<u32> for Unsigned {
    fn from(n: u32) -> Self {
        Self::U32(n)
    }
}

impl From<u64> for Unsigned {
    fn from(n: u64) -> Self {
        Self::U64(n)
    }
}

impl From<usize> for Unsigned {
    fn from(n: usize) -> Self {
        Self::Usize(n)
    }
}

impl TryFrom<&Value> for Unsigned {
    type Error = ConvertError;

    /// Accepts dynamic JSON values holding an integer representable as
    /// `u64`; anything else, including negative numbers, is an unsupported
    /// kind.
    fn try_from(value: &Value) -> Result<Self> {
        value
            .as_u64()
            .map(Self::U64)
            .ok_or_else(|| ConvertError::UnsupportedKind(kind_of(value).to_string()))
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parses the boolean value represented by `s`.
///
/// Accepts for true: 1, t, true, yes, y, ok; for false: 0, f, false, no, n
/// (case-insensitive). Any other value is an error. This works much like
/// the standard `bool::from_str` except that more values are accepted and
/// matching ignores case.
pub fn parse_bool(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "1" | "t" | "true" | "yes" | "y" | "ok" => Ok(true),
        "0" | "f" | "false" | "no" | "n" => Ok(false),
        _ => Err(ConvertError::InvalidBool(s.to_string())),
    }
}
