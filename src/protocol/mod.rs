//! OSC protocol core implementation
//!
//! This module provides the wire format, argument types, and codec for OSC
//! messages.

mod codec;
mod config;
mod error;
mod hexdump;
mod message;
mod types;
mod value;

pub use codec::{decode, decode_with, encode};
pub use config::{DecodeConfig, TrailingBytes};
pub use error::{BuildError, Error, ParseError, Result};
pub use hexdump::hexdump;
pub use message::{OscMessage, OscMessageBuilder};
pub use types::TypeTag;
pub use value::OscValue;

/// Every field, and therefore every datagram, is a multiple of this size
pub const ALIGNMENT: usize = 4;

/// First byte of the type-tag string
pub const TYPE_TAG_PREFIX: u8 = b',';

/// Smallest legal datagram: `/` + 3 pad bytes, `,` + 3 pad bytes
pub const MIN_DATAGRAM_SIZE: usize = 8;

/// Zero bytes needed to bring `len` up to the next 4-byte boundary
#[inline]
#[must_use]
pub const fn pad_len(len: usize) -> usize {
    (ALIGNMENT - len % ALIGNMENT) % ALIGNMENT
}

/// Encoded size of a NUL-terminated, padded string with `len` text bytes
#[inline]
#[must_use]
pub const fn padded_str_len(len: usize) -> usize {
    let with_nul = len + 1;
    with_nul + pad_len(with_nul)
}
