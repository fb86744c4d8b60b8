//! OSC argument values

use std::fmt;

use bytes::Bytes;

use super::codec::{put_blob, put_padded_str};
use super::{BuildError, TypeTag, padded_str_len, pad_len};

/// A single typed OSC argument
///
/// Equality compares floats by bit pattern, so a NaN payload equals itself
/// and `0.0` differs from `-0.0`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OscValue {
    /// `i`
    Int32(i32),
    /// `f`
    Float32(f32),
    /// `s`, must not contain NUL
    String(String),
    /// `b`
    Blob(Bytes),
    /// `T` or `F`
    Bool(bool),
}

impl OscValue {
    /// Type tag written for this value
    #[must_use]
    pub const fn type_tag(&self) -> TypeTag {
        match self {
            Self::Int32(_) => TypeTag::Int32,
            Self::Float32(_) => TypeTag::Float32,
            Self::String(_) => TypeTag::String,
            Self::Blob(_) => TypeTag::Blob,
            Self::Bool(true) => TypeTag::True,
            Self::Bool(false) => TypeTag::False,
        }
    }

    /// Payload bytes this value occupies on the wire, padding included
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        match self {
            Self::Int32(_) | Self::Float32(_) => 4,
            Self::String(s) => padded_str_len(s.len()),
            Self::Blob(b) => 4 + b.len() + pad_len(b.len()),
            Self::Bool(_) => 0,
        }
    }

    /// Append the payload to `buf`
    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        match self {
            Self::Int32(v) => buf.extend_from_slice(&v.to_be_bytes()),
            Self::Float32(v) => buf.extend_from_slice(&v.to_bits().to_be_bytes()),
            Self::String(s) => put_padded_str(buf, s.as_bytes()),
            Self::Blob(b) => put_blob(buf, b),
            Self::Bool(_) => {}
        }
    }

    /// Check that the value can be written as-is
    pub(crate) fn validate(&self, index: usize) -> Result<(), BuildError> {
        match self {
            Self::String(s) if s.as_bytes().contains(&0) => Err(BuildError::InvalidArgument {
                index,
                reason: "string contains NUL".into(),
            }),
            Self::Blob(b) if u32::try_from(b.len()).is_err() => {
                Err(BuildError::InvalidArgument {
                    index,
                    reason: format!("blob of {} bytes exceeds u32 length prefix", b.len()),
                })
            }
            _ => Ok(()),
        }
    }

    /// Get as integer
    #[must_use]
    pub const fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int32(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as float
    #[must_use]
    pub const fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float32(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string slice
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as blob bytes
    #[must_use]
    pub fn as_blob(&self) -> Option<&Bytes> {
        match self {
            Self::Blob(b) => Some(b),
            _ => None,
        }
    }

    /// Get as boolean
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl PartialEq for OscValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int32(a), Self::Int32(b)) => a == b,
            (Self::Float32(a), Self::Float32(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Blob(a), Self::Blob(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for OscValue {}

impl fmt::Display for OscValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int32(v) => write!(f, "{v}"),
            Self::Float32(v) => write!(f, "{v:?}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Blob(b) => {
                write!(f, "blob[")?;
                for (i, byte) in b.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{byte:02x}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<i32> for OscValue {
    fn from(value: i32) -> Self {
        Self::Int32(value)
    }
}

impl From<f32> for OscValue {
    fn from(value: f32) -> Self {
        Self::Float32(value)
    }
}

impl From<bool> for OscValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for OscValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for OscValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Bytes> for OscValue {
    fn from(value: Bytes) -> Self {
        Self::Blob(value)
    }
}

impl From<Vec<u8>> for OscValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Blob(Bytes::from(value))
    }
}

impl From<&[u8]> for OscValue {
    fn from(value: &[u8]) -> Self {
        Self::Blob(Bytes::copy_from_slice(value))
    }
}

impl<const N: usize> From<&[u8; N]> for OscValue {
    fn from(value: &[u8; N]) -> Self {
        Self::Blob(Bytes::copy_from_slice(value))
    }
}

impl TryFrom<i64> for OscValue {
    type Error = BuildError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        i32::try_from(value)
            .map(Self::Int32)
            .map_err(|_| BuildError::InvalidArgument {
                index: 0,
                reason: format!("integer {value} does not fit in 32 bits"),
            })
    }
}

impl TryFrom<f64> for OscValue {
    type Error = BuildError;

    #[allow(clippy::cast_possible_truncation)]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_finite() && value.abs() > f64::from(f32::MAX) {
            return Err(BuildError::InvalidArgument {
                index: 0,
                reason: format!("float {value} overflows 32 bits"),
            });
        }
        Ok(Self::Float32(value as f32))
    }
}

/// Dynamically-typed host boundary
///
/// Booleans are matched before numbers so `true` never becomes `1`.
#[cfg(feature = "json")]
impl TryFrom<&serde_json::Value> for OscValue {
    type Error = BuildError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        let unsupported = |what: &str| BuildError::InvalidArgument {
            index: 0,
            reason: format!("unsupported JSON {what}"),
        };

        match value {
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::try_from(i)
                } else if n.is_u64() {
                    Err(BuildError::InvalidArgument {
                        index: 0,
                        reason: format!("integer {n} does not fit in 32 bits"),
                    })
                } else {
                    n.as_f64()
                        .ok_or_else(|| unsupported("number"))
                        .and_then(Self::try_from)
                }
            }
            Value::String(s) => Ok(Self::String(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_u64()
                        .and_then(|b| u8::try_from(b).ok())
                        .ok_or_else(|| unsupported("array element (blobs are arrays of 0..=255)"))
                })
                .collect::<Result<Vec<u8>, _>>()
                .map(Self::from),
            Value::Null => Err(unsupported("null")),
            Value::Object(_) => Err(unsupported("object")),
        }
    }
}
