//! OSC message codec (encode/decode)
//!
//! Parsing is a single forward pass over a bounds-checked cursor:
//! address, type-tag string, then one payload per tag. Blob payloads are
//! sliced out of the input without copying.

use bytes::Bytes;
use tracing::{debug, trace};

use super::{
    DecodeConfig, OscMessage, OscValue, ParseError, TYPE_TAG_PREFIX, TrailingBytes, TypeTag,
    pad_len, padded_str_len,
};

/// Encode a message to a datagram
///
/// # Format
///
/// ```text
/// [ADDRESS\0 pad] [,TAGS\0 pad] [ARG 0] [ARG 1] ...
/// ```
///
/// Every section is a multiple of 4 bytes, so the datagram is too.
#[must_use]
pub fn encode(message: &OscMessage) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(message.encoded_len());

    put_padded_str(&mut bytes, message.address().as_bytes());

    // Type-tag string, written in place to avoid building it separately
    bytes.push(TYPE_TAG_PREFIX);
    for arg in message.args() {
        bytes.push(arg.type_tag().as_u8());
    }
    bytes.push(0);
    let tag_field_len = message.arg_count() + 2;
    bytes.resize(bytes.len() + pad_len(tag_field_len), 0);

    for arg in message.args() {
        arg.encode_into(&mut bytes);
    }

    trace!(
        address = message.address(),
        args = message.arg_count(),
        len = bytes.len(),
        "encoded OSC message"
    );
    bytes
}

/// Decode a datagram with the default [`DecodeConfig`]
///
/// Bytes after the last argument are ignored.
///
/// # Errors
///
/// Returns a [`ParseError`] naming the first structural problem found.
/// Arbitrary input never panics.
pub fn decode(bytes: Bytes) -> Result<OscMessage, ParseError> {
    decode_with(bytes, &DecodeConfig::default())
}

/// Decode a datagram with an explicit configuration
///
/// # Errors
///
/// Returns a [`ParseError`] naming the first structural problem found.
pub fn decode_with(bytes: Bytes, config: &DecodeConfig) -> Result<OscMessage, ParseError> {
    let total = bytes.len();
    let result = Parser::new(&bytes).parse(config);
    match &result {
        Ok(message) => trace!(
            address = message.address(),
            args = message.arg_count(),
            len = total,
            "decoded OSC message"
        ),
        Err(err) => debug!(kind = err.kind(), len = total, error = %err, "rejected OSC datagram"),
    }
    result
}

/// Append `text`, its NUL terminator, and padding to the next 4-byte boundary
pub(super) fn put_padded_str(buf: &mut Vec<u8>, text: &[u8]) {
    buf.extend_from_slice(text);
    buf.push(0);
    buf.resize(buf.len() + pad_len(text.len() + 1), 0);
}

/// Append a blob's length prefix, bytes, and padding
#[allow(clippy::cast_possible_truncation)]
pub(super) fn put_blob(buf: &mut Vec<u8>, blob: &[u8]) {
    // Lengths beyond u32 are rejected when the message is built
    buf.extend_from_slice(&(blob.len() as u32).to_be_bytes());
    buf.extend_from_slice(blob);
    buf.resize(buf.len() + pad_len(blob.len()), 0);
}

/// Forward-only cursor; `pos <= bytes.len()` always holds
struct Parser<'a> {
    bytes: &'a Bytes,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(bytes: &'a Bytes) -> Self {
        Self { bytes, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn rest(&self) -> &'a [u8] {
        let bytes: &'a [u8] = self.bytes;
        bytes.get(self.pos..).unwrap_or_default()
    }

    /// Offset of the first NUL relative to the cursor
    fn find_nul(&self) -> Option<usize> {
        self.rest().iter().position(|&b| b == 0)
    }

    fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        let end = self.pos.checked_add(n)?;
        let bytes: &'a [u8] = self.bytes;
        let slice = bytes.get(self.pos..end)?;
        self.pos = end;
        Some(slice)
    }

    fn parse(mut self, config: &DecodeConfig) -> Result<OscMessage, ParseError> {
        let address = self.read_address()?;
        let tags = self.read_type_tags(config)?;

        let mut args = Vec::with_capacity(tags.len());
        for (index, tag) in tags.into_iter().enumerate() {
            args.push(self.read_argument(index, tag)?);
        }

        let trailing = self.remaining();
        if trailing > 0 {
            match config.trailing {
                TrailingBytes::Ignore => {
                    debug!(offset = self.pos, count = trailing, "ignoring trailing bytes");
                }
                TrailingBytes::Reject => {
                    return Err(ParseError::TrailingBytes {
                        offset: self.pos,
                        count: trailing,
                    });
                }
            }
        }

        Ok(OscMessage::from_parts(address, args))
    }

    fn read_address(&mut self) -> Result<String, ParseError> {
        match self.rest().first() {
            Some(b'/') => {}
            Some(_) => {
                return Err(ParseError::MissingAddress {
                    reason: "datagram does not start with '/'",
                });
            }
            None => {
                return Err(ParseError::MissingAddress {
                    reason: "empty datagram",
                });
            }
        }

        let nul = self.find_nul().ok_or(ParseError::MissingAddress {
            reason: "address is not NUL-terminated",
        })?;

        let needed = padded_str_len(nul);
        let got = self.remaining();
        let field = self
            .take(needed)
            .ok_or(ParseError::TruncatedAddress { needed, got })?;

        std::str::from_utf8(&field[..nul])
            .map(str::to_owned)
            .map_err(|_| ParseError::InvalidUtf8 { field: "address" })
    }

    fn read_type_tags(&mut self, config: &DecodeConfig) -> Result<Vec<TypeTag>, ParseError> {
        let offset = self.pos;
        if self.rest().first() != Some(&TYPE_TAG_PREFIX) {
            return Err(ParseError::MissingTypeTag { offset });
        }

        let nul = self
            .find_nul()
            .ok_or(ParseError::TruncatedTypeTag { offset })?;
        let field = self
            .take(padded_str_len(nul))
            .ok_or(ParseError::TruncatedTypeTag { offset })?;

        // Skip the leading ','
        let tag_bytes = &field[1..nul];
        if tag_bytes.len() > config.max_arguments {
            return Err(ParseError::TooManyArguments {
                count: tag_bytes.len(),
                max: config.max_arguments,
            });
        }

        tag_bytes
            .iter()
            .enumerate()
            .map(|(i, &byte)| {
                TypeTag::from_u8(byte).ok_or(ParseError::UnknownTypeTag {
                    tag: char::from(byte),
                    offset: offset + 1 + i,
                })
            })
            .collect()
    }

    fn read_argument(&mut self, index: usize, tag: TypeTag) -> Result<OscValue, ParseError> {
        let truncated = |needed: usize, remaining: usize| ParseError::TruncatedArgument {
            index,
            tag: tag.as_char(),
            needed,
            remaining,
        };

        match tag {
            TypeTag::Int32 => {
                let remaining = self.remaining();
                let raw = self.read_word().ok_or_else(|| truncated(4, remaining))?;
                Ok(OscValue::Int32(i32::from_be_bytes(raw)))
            }
            TypeTag::Float32 => {
                let remaining = self.remaining();
                let raw = self.read_word().ok_or_else(|| truncated(4, remaining))?;
                Ok(OscValue::Float32(f32::from_bits(u32::from_be_bytes(raw))))
            }
            TypeTag::String => {
                let nul = self
                    .find_nul()
                    .ok_or(ParseError::MissingTerminator { index })?;
                let needed = padded_str_len(nul);
                let remaining = self.remaining();
                let field = self
                    .take(needed)
                    .ok_or_else(|| truncated(needed, remaining))?;
                std::str::from_utf8(&field[..nul])
                    .map(|s| OscValue::String(s.to_owned()))
                    .map_err(|_| ParseError::InvalidUtf8 {
                        field: "string argument",
                    })
            }
            TypeTag::Blob => {
                let remaining = self.remaining();
                let raw = self.read_word().ok_or_else(|| truncated(4, remaining))?;
                let declared = u32::from_be_bytes(raw);
                let remaining = self.remaining();

                // Validate the untrusted prefix before using it as an offset
                let len = usize::try_from(declared).ok();
                let padded = len.and_then(|len| len.checked_add(pad_len(len)));
                let (Some(len), Some(padded)) = (len, padded) else {
                    return Err(ParseError::InvalidBlobLength {
                        index,
                        declared,
                        remaining,
                    });
                };
                if padded > remaining {
                    return Err(ParseError::InvalidBlobLength {
                        index,
                        declared,
                        remaining,
                    });
                }

                let start = self.pos;
                self.pos += padded;
                Ok(OscValue::Blob(self.bytes.slice(start..start + len)))
            }
            TypeTag::True => Ok(OscValue::Bool(true)),
            TypeTag::False => Ok(OscValue::Bool(false)),
        }
    }

    fn read_word(&mut self) -> Option<[u8; 4]> {
        self.take(4)?.try_into().ok()
    }
}
