//! # Compound UUIDv8 Codec
//!
//! Encodes caller-supplied integers and a name digest into 128-bit identifiers
//! that are valid version-8 UUIDs per RFC 9562, and decodes them back exactly.
//! Every identifier is bijective with respect to its integer fields: decoding
//! recovers the encoded values bit-for-bit, including negative extremes.
//!
//! ## API Surface
//!
//! - **Layouts**: [`Layout`] - the five fixed byte-allocation schemes
//! - **Encoding**: [`encode`] / [`Layout::encode`] - build an identifier + digest
//! - **Decoding**: [`decode`] / [`Layout::decode`] - recover fields + digest
//! - **Fields**: [`FieldBag`] - named integer parameters (`Value0`..`Value2`)
//! - **Bit injection**: [`rfc9562`] - version/variant mutation and readback
//! - **Hashing**: [`hashing`] - one-shot non-cryptographic hash registry
//! - **Name-based IDs**: [`v5`] - namespace UUIDv5 generation
//!
//! ## Quick Start
//!
//! ```rust
//! use compound_uuid::{decode, encode, fields, FieldBag};
//!
//! let mut bag = FieldBag::new();
//! bag.insert(fields::VALUE0, 42);
//! bag.insert(fields::VALUE1, -1);
//!
//! let encoded = encode("I32I32", "example", &bag)?;
//! assert_eq!(encoded.uuid.as_bytes()[6] >> 4, 8); // version 8
//!
//! let decoded = decode("I32I32", encoded.uuid)?;
//! decoded.ensure_rfc9562_v8()?;
//! assert_eq!(decoded.fields.get(fields::VALUE0), Some(42));
//! assert_eq!(decoded.fields.get(fields::VALUE1), Some(-1));
//! assert_eq!(decoded.hash_output, encoded.hash_output);
//! # Ok::<(), compound_uuid::CodecError>(())
//! ```
//!
//! ## Layout Reference
//!
//! Byte ranges are half-open over the 16 big-endian identifier bytes. The
//! remaining bytes carry a hash of the NFC-normalized UTF-8 name (XXH3 for
//! 8-byte fillers, XXH32 for 4-byte fillers).
//!
//! | Layout    | Fields                                                | Hash/digest bytes |
//! |-----------|-------------------------------------------------------|-------------------|
//! | I32       | Value0 i32 → [12,16)                                  | [0,4) + [8,12)    |
//! | I32I32    | Value0 i32 → [12,16), Value1 i32 → [0,4)              | [4,12)            |
//! | I32I32I32 | Value0 → [12,16), Value1 → [0,4), Value2 → [4,6)+[10,12) | [6,10)         |
//! | I64       | Value0 i64 → [0,4)+[12,16)                            | [4,12)            |
//! | I64I32    | Value0 i64 → [0,4)+[12,16), Value1 i32 → [4,6)+[10,12) | [6,10)           |
//!
//! ## Digest Semantics
//!
//! The hex digest returned by [`encode`] is extracted from the *final*
//! identifier bytes, after the version nibble (byte 6) and variant bits
//! (byte 8) have been injected. For every layout those bytes fall inside or
//! adjacent to the hash filler, so the digest is the name hash with 2-6 bits
//! forcibly overwritten. [`decode`] re-extracts the identical digest, which is
//! what makes it usable as a tamper indicator. It is not a cryptographic
//! proof and must not be treated as one.

use thiserror::Error;

pub mod fields;
pub mod hashing;
pub mod layout;
pub mod rfc9562;
pub mod span;
pub mod v5;

pub use fields::FieldBag;
pub use hashing::HashAlgorithm;
pub use layout::{decode, encode, Decoded, Encoded, Layout};
pub use rfc9562::{identifier_from_slice, VersionVariant};
pub use span::ByteSpan;
pub use uuid::Uuid;

/// UUID version number stamped into every compound identifier
pub const COMPOUND_UUID_VERSION: u8 = 8;

/// Byte length of an identifier
pub const IDENTIFIER_LEN: usize = 16;

/// Codec errors
///
/// All variants indicate caller contract violations. Operations either fully
/// succeed or fail with one of these; no partial results are produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Unrecognized layout type '{0}'")]
    UnknownLayout(String),

    #[error("Required layout parameter '{0}' is not specified")]
    MissingField(&'static str),

    #[error("Layout parameter '{field}' does not fit in 32 bits: {value}")]
    FieldOutOfRange { field: &'static str, value: i64 },

    #[error("Identifier buffer too small: need {need} bytes, got {got}")]
    BufferTooSmall { need: usize, got: usize },

    #[error("Not an RFC 9562 version-8 identifier: version {version:#x}, variant nibble {variant:#x}")]
    InvalidIdentifierFormat { version: u8, variant: u8 },

    #[error("Unrecognized non-cryptographic hash algorithm '{0}'")]
    UnknownHashAlgorithm(String),

    #[error("Unrecognized well-known UUID namespace '{0}'")]
    UnknownNamespace(String),
}

/// Result type for codec operations
pub type CodecResult<T> = std::result::Result<T, CodecError>;
