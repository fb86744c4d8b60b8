//! Decoder configuration

/// What to do with bytes left over after a structurally complete message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailingBytes {
    /// Ignore them; the message parses successfully
    #[default]
    Ignore,
    /// Fail with [`ParseError::TrailingBytes`](super::ParseError::TrailingBytes)
    Reject,
}

/// Configurable parameters for [`decode_with`](super::decode_with).
#[derive(Debug, Clone)]
pub struct DecodeConfig {
    /// Policy for bytes past the last argument.
    pub trailing: TrailingBytes,
    /// Upper bound on the number of declared arguments.
    pub max_arguments: usize,
}

impl DecodeConfig {
    /// Reject anything that does not end exactly at the last argument
    #[must_use]
    pub fn strict() -> Self {
        Self {
            trailing: TrailingBytes::Reject,
            ..Self::default()
        }
    }

    /// Set the argument limit
    #[must_use]
    pub const fn with_max_arguments(mut self, max: usize) -> Self {
        self.max_arguments = max;
        self
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            trailing: TrailingBytes::Ignore,
            max_arguments: usize::MAX,
        }
    }
}
