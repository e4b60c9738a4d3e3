//! Compound layout codecs and the layout registry
//!
//! A layout is a fixed allocation of the 16 identifier bytes between integer
//! fields and a name-hash filler. The five layouts form a closed set; each is
//! declared as a static span table so the encode/decode symmetry is visible
//! in the data rather than buried in slicing code.
//!
//! Encode places the hash and the fields, injects the version-8/variant bits,
//! then re-extracts the digest from the mutated bytes. Bytes 6 and 8 overlap
//! the hash spans in every layout, so the digest a caller receives is never
//! the pristine name hash. Decode reverses the field and digest extraction
//! and reports the version/variant flags instead of failing outright; callers
//! that require a well-formed compound identifier use
//! [`Decoded::ensure_rfc9562_v8`].

use tracing::{trace, warn};
use uuid::Uuid;

use crate::fields::{FieldBag, VALUE0, VALUE1, VALUE2};
use crate::span::{self, ByteSpan};
use crate::{hashing, rfc9562, CodecError, CodecResult, COMPOUND_UUID_VERSION, IDENTIFIER_LEN};

/// Hash function filling a layout's non-field bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HashKind {
    /// 64-bit XXH3, 8 digest bytes
    Xxh3,
    /// 32-bit XXH32, 4 digest bytes
    Xxh32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldWidth {
    I32,
    I64,
}

struct FieldSpec {
    name: &'static str,
    width: FieldWidth,
    spans: &'static [ByteSpan],
}

struct LayoutSpec {
    name: &'static str,
    hash: HashKind,
    fields: &'static [FieldSpec],
    /// Placement of the hash bytes; also the digest extraction ranges.
    hash_spans: &'static [ByteSpan],
}

static I32_SPEC: LayoutSpec = LayoutSpec {
    name: "I32",
    hash: HashKind::Xxh3,
    fields: &[FieldSpec {
        name: VALUE0,
        width: FieldWidth::I32,
        spans: &[ByteSpan::new(12, 16)],
    }],
    hash_spans: &[ByteSpan::new(0, 4), ByteSpan::new(8, 12)],
};

static I32I32_SPEC: LayoutSpec = LayoutSpec {
    name: "I32I32",
    hash: HashKind::Xxh3,
    fields: &[
        FieldSpec {
            name: VALUE0,
            width: FieldWidth::I32,
            spans: &[ByteSpan::new(12, 16)],
        },
        FieldSpec {
            name: VALUE1,
            width: FieldWidth::I32,
            spans: &[ByteSpan::new(0, 4)],
        },
    ],
    hash_spans: &[ByteSpan::new(4, 12)],
};

static I32I32I32_SPEC: LayoutSpec = LayoutSpec {
    name: "I32I32I32",
    hash: HashKind::Xxh32,
    fields: &[
        FieldSpec {
            name: VALUE0,
            width: FieldWidth::I32,
            spans: &[ByteSpan::new(12, 16)],
        },
        FieldSpec {
            name: VALUE1,
            width: FieldWidth::I32,
            spans: &[ByteSpan::new(0, 4)],
        },
        FieldSpec {
            name: VALUE2,
            width: FieldWidth::I32,
            spans: &[ByteSpan::new(4, 6), ByteSpan::new(10, 12)],
        },
    ],
    hash_spans: &[ByteSpan::new(6, 10)],
};

static I64_SPEC: LayoutSpec = LayoutSpec {
    name: "I64",
    hash: HashKind::Xxh3,
    fields: &[FieldSpec {
        name: VALUE0,
        width: FieldWidth::I64,
        spans: &[ByteSpan::new(0, 4), ByteSpan::new(12, 16)],
    }],
    hash_spans: &[ByteSpan::new(4, 12)],
};

static I64I32_SPEC: LayoutSpec = LayoutSpec {
    name: "I64I32",
    hash: HashKind::Xxh32,
    fields: &[
        FieldSpec {
            name: VALUE0,
            width: FieldWidth::I64,
            spans: &[ByteSpan::new(0, 4), ByteSpan::new(12, 16)],
        },
        FieldSpec {
            name: VALUE1,
            width: FieldWidth::I32,
            spans: &[ByteSpan::new(4, 6), ByteSpan::new(10, 12)],
        },
    ],
    hash_spans: &[ByteSpan::new(6, 10)],
};

/// The closed set of compound layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    I32,
    I32I32,
    I32I32I32,
    I64,
    I64I32,
}

impl Layout {
    pub const ALL: [Layout; 5] = [
        Layout::I32,
        Layout::I32I32,
        Layout::I32I32I32,
        Layout::I64,
        Layout::I64I32,
    ];

    /// Resolve a layout by its ASCII case-insensitive name.
    pub fn from_name(name: &str) -> CodecResult<Self> {
        Self::ALL
            .into_iter()
            .find(|layout| layout.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| CodecError::UnknownLayout(name.to_string()))
    }

    pub fn name(&self) -> &'static str {
        self.spec().name
    }

    /// Names of the integer fields this layout requires, in field order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.spec().fields.iter().map(|field| field.name)
    }

    fn spec(&self) -> &'static LayoutSpec {
        match self {
            Layout::I32 => &I32_SPEC,
            Layout::I32I32 => &I32I32_SPEC,
            Layout::I32I32I32 => &I32I32I32_SPEC,
            Layout::I64 => &I64_SPEC,
            Layout::I64I32 => &I64I32_SPEC,
        }
    }

    /// Encode `fields` and a digest of `name` into a version-8 identifier.
    ///
    /// `name` is NFC-normalized and UTF-8 encoded before hashing; the empty
    /// string stands in for an absent name. The returned digest is extracted
    /// from the final identifier bytes and therefore reflects the injected
    /// version/variant bits.
    pub fn encode(&self, name: &str, fields: &FieldBag) -> CodecResult<Encoded> {
        let spec = self.spec();
        trace!(layout = spec.name, "encoding compound identifier");

        let mut buf = [0u8; IDENTIFIER_LEN];
        for field in spec.fields {
            match field.width {
                FieldWidth::I32 => span::write_i32(fields.require_i32(field.name)?, field.spans, &mut buf),
                FieldWidth::I64 => span::write_i64(fields.require_i64(field.name)?, field.spans, &mut buf),
            }
        }

        let name_bytes = hashing::normalized_utf8(name);
        match spec.hash {
            HashKind::Xxh3 => span::scatter(&hashing::xxh3_64_bytes(&name_bytes), spec.hash_spans, &mut buf),
            HashKind::Xxh32 => span::scatter(&hashing::xxh32_bytes(&name_bytes), spec.hash_spans, &mut buf),
        }

        let uuid = rfc9562::apply_version_variant(buf, COMPOUND_UUID_VERSION);
        let hash_output = hex::encode(span::gather_vec(uuid.as_bytes(), spec.hash_spans));
        Ok(Encoded { uuid, hash_output })
    }

    /// Recover the integer fields and verification digest of `identifier`.
    ///
    /// Never fails on bit patterns: the version/variant flags are reported in
    /// the result and [`Decoded::ensure_rfc9562_v8`] turns bad flags into an
    /// error at the caller's discretion.
    pub fn decode(&self, identifier: Uuid) -> Decoded {
        let spec = self.spec();
        trace!(layout = spec.name, "decoding compound identifier");

        let bytes = identifier.as_bytes();
        let vv = rfc9562::read_version_variant(&identifier);

        let mut fields = FieldBag::new();
        for field in spec.fields {
            let value = match field.width {
                FieldWidth::I32 => i64::from(span::read_i32(bytes, field.spans)),
                FieldWidth::I64 => span::read_i64(bytes, field.spans),
            };
            fields.insert(field.name, value);
        }

        Decoded {
            fields,
            hash_output: hex::encode(span::gather_vec(bytes, spec.hash_spans)),
            version: vv.version,
            variant: vv.variant,
            is_rfc9562_variant: vv.is_rfc9562_variant,
        }
    }
}

/// Result of a successful encode
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Encoded {
    pub uuid: Uuid,
    /// Lowercase hex digest extracted from the final identifier bytes
    pub hash_output: String,
}

/// Result of a decode
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Decoded {
    pub fields: FieldBag,
    /// Lowercase hex digest re-extracted from the identifier bytes
    pub hash_output: String,
    /// High nibble of byte 6
    pub version: u8,
    /// High nibble of byte 8
    pub variant: u8,
    pub is_rfc9562_variant: bool,
}

impl Decoded {
    /// Reject identifiers that are not RFC 9562 variant, version 8.
    pub fn ensure_rfc9562_v8(&self) -> CodecResult<()> {
        if !self.is_rfc9562_variant || self.version != COMPOUND_UUID_VERSION {
            warn!(
                version = self.version,
                variant = self.variant,
                "identifier failed RFC 9562 version/variant check"
            );
            return Err(CodecError::InvalidIdentifierFormat {
                version: self.version,
                variant: self.variant,
            });
        }
        Ok(())
    }
}

/// Encode with a layout resolved by name.
pub fn encode(layout_name: &str, name: &str, fields: &FieldBag) -> CodecResult<Encoded> {
    Layout::from_name(layout_name)?.encode(name, fields)
}

/// Decode with a layout resolved by name.
pub fn decode(layout_name: &str, identifier: Uuid) -> CodecResult<Decoded> {
    Ok(Layout::from_name(layout_name)?.decode(identifier))
}
