//! OSC error types

use thiserror::Error;

/// Errors raised while constructing a message
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Address is empty, does not start with `/`, or contains NUL
    #[error("OscBuildError: invalid address {address:?}: {reason}")]
    InvalidAddress {
        /// Offending address
        address: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Argument cannot be represented on the wire
    #[error("OscBuildError: invalid argument at index {index}: {reason}")]
    InvalidArgument {
        /// Argument position
        index: usize,
        /// Why it was rejected
        reason: String,
    },
}

/// Errors raised while parsing a datagram
///
/// Every variant renders with an `OscParseError:` prefix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Datagram does not start with a NUL-terminated `/` address
    #[error("OscParseError: missing address: {reason}")]
    MissingAddress {
        /// Why the address could not be read
        reason: &'static str,
    },

    /// Address padding runs past the end of the datagram
    #[error("OscParseError: truncated address: need {needed} bytes, got {got}")]
    TruncatedAddress {
        /// Bytes needed to reach the 4-byte boundary
        needed: usize,
        /// Bytes available
        got: usize,
    },

    /// No `,`-prefixed type-tag string after the address
    #[error("OscParseError: missing type tag string at offset {offset}")]
    MissingTypeTag {
        /// Cursor position
        offset: usize,
    },

    /// Type-tag string is unterminated or its padding is cut short
    #[error("OscParseError: truncated type tag string at offset {offset}")]
    TruncatedTypeTag {
        /// Cursor position
        offset: usize,
    },

    /// Tag character outside `ifsbTF`
    #[error("OscParseError: unknown type tag {tag:?} at offset {offset}")]
    UnknownTypeTag {
        /// Offending character
        tag: char,
        /// Position in the datagram
        offset: usize,
    },

    /// Tag string declares more arguments than allowed
    #[error("OscParseError: too many arguments: {count} (max {max})")]
    TooManyArguments {
        /// Declared argument count
        count: usize,
        /// Configured maximum
        max: usize,
    },

    /// Fewer bytes remain than the argument payload requires
    #[error(
        "OscParseError: truncated argument {index} ('{tag}'): need {needed} bytes, got {remaining}"
    )]
    TruncatedArgument {
        /// Argument position
        index: usize,
        /// Argument type tag
        tag: char,
        /// Bytes needed
        needed: usize,
        /// Bytes remaining
        remaining: usize,
    },

    /// Blob length prefix exceeds the remaining datagram
    #[error(
        "OscParseError: invalid blob length for argument {index}: declared {declared} bytes, {remaining} remaining"
    )]
    InvalidBlobLength {
        /// Argument position
        index: usize,
        /// Length prefix as found on the wire
        declared: u32,
        /// Bytes remaining after the prefix
        remaining: usize,
    },

    /// String argument has no NUL before the end of the datagram
    #[error("OscParseError: missing terminator for string argument {index}")]
    MissingTerminator {
        /// Argument position
        index: usize,
    },

    /// Text field is not valid UTF-8
    #[error("OscParseError: invalid UTF-8 in {field}")]
    InvalidUtf8 {
        /// Which field failed
        field: &'static str,
    },

    /// Bytes follow a complete message and the decoder rejects them
    #[error("OscParseError: {count} trailing bytes at offset {offset}")]
    TrailingBytes {
        /// Where the message ended
        offset: usize,
        /// How many bytes follow
        count: usize,
    },
}

impl ParseError {
    /// Kind name, stable across message wording changes
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingAddress { .. } => "MissingAddress",
            Self::TruncatedAddress { .. } => "TruncatedAddress",
            Self::MissingTypeTag { .. } => "MissingTypeTag",
            Self::TruncatedTypeTag { .. } => "TruncatedTypeTag",
            Self::UnknownTypeTag { .. } => "UnknownTypeTag",
            Self::TooManyArguments { .. } => "TooManyArguments",
            Self::TruncatedArgument { .. } => "TruncatedArgument",
            Self::InvalidBlobLength { .. } => "InvalidBlobLength",
            Self::MissingTerminator { .. } => "MissingTerminator",
            Self::InvalidUtf8 { .. } => "InvalidUtf8",
            Self::TrailingBytes { .. } => "TrailingBytes",
        }
    }
}

/// OSC codec errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Message construction failed
    #[error(transparent)]
    Build(#[from] BuildError),

    /// Datagram parsing failed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Argument index past the end of the argument list
    #[error("index out of range: {index} (message has {len} arguments)")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Argument count
        len: usize,
    },
}

impl Error {
    /// Check if this is a parse failure
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Check if this is a construction failure
    #[must_use]
    pub const fn is_build(&self) -> bool {
        matches!(self, Self::Build(_))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
