//! Named integer parameters for layout encode/decode
//!
//! Fields travel by name (`Value0`, `Value1`, `Value2`) in both directions:
//! encode consumes a [`FieldBag`], decode produces one. A layout's required
//! field that is absent from the bag is a caller error, never a defaulted
//! value.

use std::collections::BTreeMap;

use crate::{CodecError, CodecResult};

pub const VALUE0: &str = "Value0";
pub const VALUE1: &str = "Value1";
pub const VALUE2: &str = "Value2";

/// Ordered name → value map of layout parameters
///
/// Values are stored as `i64`; 32-bit layouts range-check on extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldBag {
    values: BTreeMap<String, i64>,
}

impl FieldBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: i64) {
        self.values.insert(name.into(), value);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: i64) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub(crate) fn require_i64(&self, name: &'static str) -> CodecResult<i64> {
        self.get(name).ok_or(CodecError::MissingField(name))
    }

    pub(crate) fn require_i32(&self, name: &'static str) -> CodecResult<i32> {
        let value = self.require_i64(name)?;
        i32::try_from(value).map_err(|_| CodecError::FieldOutOfRange { field: name, value })
    }
}
