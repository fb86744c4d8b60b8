//! OSC type tags

use std::fmt;

/// OSC argument type tags
///
/// Booleans carry their value in the tag itself, so `True` and `False`
/// have no payload on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TypeTag {
    /// 32-bit big-endian two's-complement integer
    Int32 = b'i',
    /// 32-bit big-endian IEEE-754 float
    Float32 = b'f',
    /// NUL-terminated, NUL-padded UTF-8 string
    String = b's',
    /// Length-prefixed, zero-padded byte sequence
    Blob = b'b',
    /// Boolean true
    True = b'T',
    /// Boolean false
    False = b'F',
}

impl TypeTag {
    /// Convert from a tag byte
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            b'i' => Some(Self::Int32),
            b'f' => Some(Self::Float32),
            b's' => Some(Self::String),
            b'b' => Some(Self::Blob),
            b'T' => Some(Self::True),
            b'F' => Some(Self::False),
            _ => None,
        }
    }

    /// Convert to a tag byte
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Tag character as it appears in the type-tag string
    #[must_use]
    pub const fn as_char(self) -> char {
        self as u8 as char
    }

    /// Payload size for fixed-width tags, `None` for strings and blobs
    #[must_use]
    pub const fn payload_len(self) -> Option<usize> {
        match self {
            Self::Int32 | Self::Float32 => Some(4),
            Self::True | Self::False => Some(0),
            Self::String | Self::Blob => None,
        }
    }

    /// Check if the payload size depends on the value
    #[must_use]
    pub const fn is_variable_length(self) -> bool {
        self.payload_len().is_none()
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int32 => "int32",
            Self::Float32 => "float32",
            Self::String => "string",
            Self::Blob => "blob",
            Self::True => "true",
            Self::False => "false",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrip() {
        for byte in *b"ifsbTF" {
            let tag = TypeTag::from_u8(byte).unwrap();
            assert_eq!(tag.as_u8(), byte);
            assert_eq!(tag.as_char(), byte as char);
        }
    }

    #[test]
    fn test_unknown_tags_rejected() {
        for byte in [b'd', b'h', b'N', b'I', b't', b'[', b',', 0] {
            assert_eq!(TypeTag::from_u8(byte), None);
        }
    }

    #[test]
    fn test_payload_len() {
        assert_eq!(TypeTag::Int32.payload_len(), Some(4));
        assert_eq!(TypeTag::Float32.payload_len(), Some(4));
        assert_eq!(TypeTag::True.payload_len(), Some(0));
        assert_eq!(TypeTag::False.payload_len(), Some(0));
        assert!(TypeTag::String.is_variable_length());
        assert!(TypeTag::Blob.is_variable_length());
    }
}
