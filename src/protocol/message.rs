//! OSC message implementation

use std::fmt;

use bytes::Bytes;

use super::{BuildError, Error, OscValue, ParseError, TYPE_TAG_PREFIX, padded_str_len};

/// OSC message
///
/// Immutable once built; the type-tag string is always derived from the
/// arguments and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "MessageParts")
)]
pub struct OscMessage {
    /// Address, starts with `/`
    address: String,
    /// Arguments in wire order
    args: Vec<OscValue>,
}

impl OscMessage {
    /// Create a new message
    ///
    /// # Errors
    ///
    /// - [`BuildError::InvalidAddress`] if the address is empty, does not
    ///   start with `/`, or contains NUL
    /// - [`BuildError::InvalidArgument`] if a string contains NUL
    pub fn new<I>(address: impl Into<String>, args: I) -> Result<Self, BuildError>
    where
        I: IntoIterator,
        I::Item: Into<OscValue>,
    {
        let address = address.into();
        validate_address(&address)?;

        let args: Vec<OscValue> = args.into_iter().map(Into::into).collect();
        for (index, arg) in args.iter().enumerate() {
            arg.validate(index)?;
        }

        Ok(Self { address, args })
    }

    /// Start building a message argument by argument
    pub fn builder(address: impl Into<String>) -> OscMessageBuilder {
        OscMessageBuilder {
            address: address.into(),
            args: Vec::new(),
        }
    }

    /// Build from loosely-typed JSON values
    ///
    /// # Errors
    ///
    /// Same as [`OscMessage::new`], plus [`BuildError::InvalidArgument`] for
    /// values with no OSC representation.
    #[cfg(feature = "json")]
    pub fn from_json(
        address: impl Into<String>,
        values: &[serde_json::Value],
    ) -> Result<Self, BuildError> {
        let args = values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                OscValue::try_from(value).map_err(|err| match err {
                    BuildError::InvalidArgument { reason, .. } => {
                        BuildError::InvalidArgument { index, reason }
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(address, args)
    }

    /// Assemble from already-validated parts
    pub(crate) fn from_parts(address: String, args: Vec<OscValue>) -> Self {
        debug_assert!(validate_address(&address).is_ok());
        Self { address, args }
    }

    /// Get address
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Get all arguments
    #[must_use]
    pub fn args(&self) -> &[OscValue] {
        &self.args
    }

    /// Get argument count
    #[must_use]
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Get argument by index
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] past the last argument.
    pub fn arg(&self, index: usize) -> super::Result<&OscValue> {
        self.args.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.args.len(),
        })
    }

    /// Type-tag string, e.g. `,isfFTb`
    #[must_use]
    pub fn type_tags(&self) -> String {
        std::iter::once(char::from(TYPE_TAG_PREFIX))
            .chain(self.args.iter().map(|arg| arg.type_tag().as_char()))
            .collect()
    }

    /// Exact datagram size
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        padded_str_len(self.address.len())
            + padded_str_len(self.args.len() + 1)
            + self.args.iter().map(OscValue::encoded_len).sum::<usize>()
    }

    /// Encode message to a datagram
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        super::encode(self)
    }

    /// Decode message from a datagram
    pub fn decode(bytes: &[u8]) -> Result<Self, ParseError> {
        super::decode(Bytes::copy_from_slice(bytes))
    }

    /// Hex dump of the encoded datagram
    #[must_use]
    pub fn hexdump(&self) -> String {
        super::hexdump(&self.encode())
    }

    /// Take ownership of the arguments
    #[must_use]
    pub fn into_args(self) -> Vec<OscValue> {
        self.args
    }
}

impl fmt::Display for OscMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.address, self.type_tags())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

impl TryFrom<&[u8]> for OscMessage {
    type Error = ParseError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::decode(bytes)
    }
}

fn validate_address(address: &str) -> Result<(), BuildError> {
    let reason = if address.is_empty() {
        "address is empty"
    } else if !address.starts_with('/') {
        "address must start with '/'"
    } else if address.contains('\0') {
        "address contains NUL"
    } else {
        return Ok(());
    };

    Err(BuildError::InvalidAddress {
        address: address.to_owned(),
        reason,
    })
}

/// Incremental [`OscMessage`] construction
#[derive(Debug, Clone)]
pub struct OscMessageBuilder {
    address: String,
    args: Vec<OscValue>,
}

impl OscMessageBuilder {
    /// Append one argument
    #[must_use]
    pub fn arg(mut self, value: impl Into<OscValue>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Append several arguments
    #[must_use]
    pub fn args<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OscValue>,
    {
        self.args.extend(values.into_iter().map(Into::into));
        self
    }

    /// Validate and build
    pub fn build(self) -> Result<OscMessage, BuildError> {
        OscMessage::new(self.address, self.args)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct MessageParts {
    address: String,
    args: Vec<OscValue>,
}

#[cfg(feature = "serde")]
impl TryFrom<MessageParts> for OscMessage {
    type Error = BuildError;

    fn try_from(parts: MessageParts) -> Result<Self, Self::Error> {
        Self::new(parts.address, parts.args)
    }
}
