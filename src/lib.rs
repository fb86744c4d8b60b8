//! nosc - Open Sound Control (OSC) message codec
//!
//! This library builds typed OSC messages, encodes them into byte-exact
//! datagrams, and parses datagrams back while rejecting malformed input
//! with a typed error instead of panicking.
//!
//! # Quick Start
//!
//! ```rust
//! use nosc::{OscMessage, OscValue};
//!
//! // Create a message
//! let msg = OscMessage::builder("/test/string")
//!     .arg(1)
//!     .arg("Hello World")
//!     .arg(1.23_f32)
//!     .arg(false)
//!     .arg(true)
//!     .arg(b"Hello")
//!     .build()?;
//! assert_eq!(msg.type_tags(), ",isfFTb");
//!
//! // Encode to a datagram
//! let bytes = msg.encode();
//! assert_eq!(bytes.len() % 4, 0);
//!
//! // Decode from bytes
//! let decoded = OscMessage::decode(&bytes)?;
//! assert_eq!(decoded.arg(1)?, &OscValue::from("Hello World"));
//! assert_eq!(decoded.to_string(), msg.to_string());
//! # Ok::<(), nosc::Error>(())
//! ```
//!
//! # Features
//!
//! - **Closed argument set** - `i`, `f`, `s`, `b`, `T`, `F`
//! - **Zero-copy blobs** - decoded blobs share the input [`bytes::Bytes`]
//! - **Panic-free parsing** - every malformed datagram maps to a [`ParseError`]
//! - **`serde`** - serialize messages and values
//! - **`json`** - build messages from loosely-typed JSON values
//!
//! Bundles, address pattern matching, and transport are out of scope.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod protocol;

pub use protocol::{
    BuildError, DecodeConfig, Error, OscMessage, OscMessageBuilder, OscValue, ParseError, Result,
    TrailingBytes, TypeTag, decode, decode_with, encode, hexdump,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
