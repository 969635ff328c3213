//! Structured output for logging boundaries.
//!
//! - [`MaskedJson`]: a JSON value built from an already-masked clone
//! - [`MaskedJsonExt`]: produces [`MaskedJson`] from any `Mask + Serialize` type

use std::fmt;

use serde::Serialize;
use serde_json::Value as JsonValue;

use super::traits::Mask;

// =============================================================================
// MaskedJson - JSON produced from a masked value
// =============================================================================

/// JSON representation of a value taken *after* masking.
///
/// The original value is never serialized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskedJson(JsonValue);

impl MaskedJson {
    pub(crate) fn new(value: JsonValue) -> Self {
        Self(value)
    }

    /// Borrows the masked JSON value.
    pub fn value(&self) -> &JsonValue {
        &self.0
    }

    /// Returns the masked JSON value.
    pub fn into_inner(self) -> JsonValue {
        self.0
    }
}

impl fmt::Display for MaskedJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

fn masked_to_json<T: Serialize>(masked: &T) -> MaskedJson {
    let value = serde_json::to_value(masked).unwrap_or_else(|err| {
        JsonValue::String(format!("Failed to serialize masked value: {err}"))
    });
    MaskedJson::new(value)
}

/// Masks `value` and serializes the result.
pub(crate) fn mask_into_json<T: Mask + Serialize>(value: T) -> MaskedJson {
    masked_to_json(&value.masked())
}

// =============================================================================
// MaskedJsonExt - Extension trait for masked JSON
// =============================================================================

/// Extension trait for serializing the masked form of a value.
///
/// If serialization fails, the returned value holds a JSON string describing
/// the failure instead of propagating an error.
pub trait MaskedJsonExt {
    /// Masks a clone of `self` and serializes it.
    fn masked_json(&self) -> MaskedJson;

    /// Masks `self` and serializes it.
    fn into_masked_json(self) -> MaskedJson
    where
        Self: Sized;
}

impl<T> MaskedJsonExt for T
where
    T: Mask + Clone + Serialize,
{
    fn masked_json(&self) -> MaskedJson {
        masked_to_json(&self.clone_masked())
    }

    fn into_masked_json(self) -> MaskedJson {
        mask_into_json(self)
    }
}
