//! Non-cryptographic hashing primitives
//!
//! Two roles: the fixed-width name hashes consumed by the layout codecs
//! ([`xxh3_64_bytes`], [`xxh32_bytes`]), and a closed name-addressed registry
//! of one-shot hash functions ([`HashAlgorithm`]) for callers that just want
//! a digest of an arbitrary payload. Hash words are rendered big-endian so
//! the byte order matches the digest bytes embedded in identifiers.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use unicode_normalization::UnicodeNormalization;
use xxhash_rust::xxh32::xxh32;
use xxhash_rust::xxh3::{xxh3_128, xxh3_64};
use xxhash_rust::xxh64::xxh64;

use crate::{CodecError, CodecResult};

/// 64-bit XXH3 digest of `data` in big-endian byte order.
pub fn xxh3_64_bytes(data: &[u8]) -> [u8; 8] {
    xxh3_64(data).to_be_bytes()
}

/// 32-bit XXH32 digest of `data` (seed 0) in big-endian byte order.
pub fn xxh32_bytes(data: &[u8]) -> [u8; 4] {
    xxh32(data, 0).to_be_bytes()
}

/// Unicode form C normalization followed by UTF-8 encoding.
///
/// Applied to every caller-supplied name before hashing so that canonically
/// equivalent strings produce the same identifier.
pub(crate) fn normalized_utf8(name: &str) -> Vec<u8> {
    name.nfc().collect::<String>().into_bytes()
}

/// One-shot non-cryptographic hash functions, addressable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    XxHash32,
    XxHash64,
    XxHash3,
    XxHash128,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 4] = [
        HashAlgorithm::XxHash32,
        HashAlgorithm::XxHash64,
        HashAlgorithm::XxHash3,
        HashAlgorithm::XxHash128,
    ];

    /// Resolve an algorithm by its ASCII case-insensitive name.
    pub fn from_name(name: &str) -> CodecResult<Self> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| CodecError::UnknownHashAlgorithm(name.to_string()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::XxHash32 => "XxHash32",
            HashAlgorithm::XxHash64 => "XxHash64",
            HashAlgorithm::XxHash3 => "XxHash3",
            HashAlgorithm::XxHash128 => "XxHash128",
        }
    }

    pub fn digest_len(&self) -> usize {
        match self {
            HashAlgorithm::XxHash32 => 4,
            HashAlgorithm::XxHash64 | HashAlgorithm::XxHash3 => 8,
            HashAlgorithm::XxHash128 => 16,
        }
    }

    /// Hash `payload` into its big-endian digest bytes.
    pub fn compute(&self, payload: &[u8]) -> HashDigest {
        let bytes = match self {
            HashAlgorithm::XxHash32 => xxh32(payload, 0).to_be_bytes().to_vec(),
            HashAlgorithm::XxHash64 => xxh64(payload, 0).to_be_bytes().to_vec(),
            HashAlgorithm::XxHash3 => xxh3_64(payload).to_be_bytes().to_vec(),
            HashAlgorithm::XxHash128 => xxh3_128(payload).to_be_bytes().to_vec(),
        };
        HashDigest { bytes }
    }
}

/// Resolve `algorithm` by name and hash `payload` in one call.
pub fn hash_named(algorithm: &str, payload: &[u8]) -> CodecResult<HashDigest> {
    Ok(HashAlgorithm::from_name(algorithm)?.compute(payload))
}

/// Digest bytes with the renderings callers consume
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashDigest {
    bytes: Vec<u8>,
}

impl HashDigest {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Lowercase hex, two digits per byte, no separators.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    pub fn to_base64(&self) -> String {
        BASE64_STANDARD.encode(&self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Published empty-input vectors for the XXH family pin the primitives.
    #[test]
    fn test_known_empty_vectors() {
        assert_eq!(xxh32_bytes(b""), [0x02, 0xCC, 0x5D, 0x05]);
        assert_eq!(
            xxh3_64_bytes(b""),
            [0x2D, 0x06, 0x80, 0x05, 0x38, 0xD3, 0x94, 0xC2]
        );
        assert_eq!(
            HashAlgorithm::XxHash64.compute(b"").to_hex(),
            "ef46db3751d8e999"
        );
    }

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(
            HashAlgorithm::from_name("xxhash3").unwrap(),
            HashAlgorithm::XxHash3
        );
        assert_eq!(
            HashAlgorithm::from_name("XXHASH128").unwrap(),
            HashAlgorithm::XxHash128
        );
        assert_eq!(
            HashAlgorithm::from_name("Crc32"),
            Err(CodecError::UnknownHashAlgorithm("Crc32".to_string()))
        );
    }

    #[test]
    fn test_digest_lengths_and_renderings() {
        for algorithm in HashAlgorithm::ALL {
            let digest = algorithm.compute(b"payload");
            assert_eq!(digest.as_bytes().len(), algorithm.digest_len());
            assert_eq!(digest.to_hex().len(), algorithm.digest_len() * 2);
        }
        let digest = HashAlgorithm::XxHash32.compute(b"");
        assert_eq!(digest.to_base64(), "AsxdBQ==");
    }

    #[test]
    fn test_normalized_utf8_composes() {
        // U+0065 U+0301 composes to U+00E9
        assert_eq!(normalized_utf8("e\u{0301}"), "\u{00E9}".as_bytes());
        assert_eq!(normalized_utf8(""), Vec::<u8>::new());
    }

    #[test]
    fn test_hash_named_dispatch() {
        let direct = HashAlgorithm::XxHash3.compute(b"abc");
        assert_eq!(hash_named("xxhash3", b"abc").unwrap(), direct);
        assert!(hash_named("Sha256", b"abc").is_err());
    }
}
