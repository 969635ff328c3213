//! Adapters for emitting masked values through `slog`.
//!
//! This module connects [`Mask`] with `slog` by providing `slog::Value`
//! implementations that only ever see masked data:
//!
//! - [`MaskedJson`] serializes as structured JSON via `slog`'s nested-value
//!   support.
//! - [`MaskedDisplay`] emits the masked string.
//!
//! Serialization failures are represented as placeholder strings rather than
//! propagated as errors. This module does not configure `slog`.

use serde::Serialize;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::masking::{Mask, MaskedDisplay, MaskedJson, mask_into_json};

/// Marker trait for types whose `slog` integration always emits masked output.
///
/// Implemented only for adapters that mask before logging, never for raw types.
///
/// ```compile_fail
/// use masker::slog::SlogMasked;
///
/// fn assert_slog_masked<T: SlogMasked>() {}
///
/// assert_slog_masked::<String>();
/// ```
pub trait SlogMasked: SlogValue {}

impl<T: SlogMasked + ?Sized> SlogMasked for &T {}

impl SlogValue for MaskedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value().clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl SlogMasked for MaskedJson {}

impl SlogValue for MaskedDisplay<'_> {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, &self.masked())
    }
}

impl SlogMasked for MaskedDisplay<'_> {}

/// Extension trait for logging masked values as structured JSON.
///
/// ## Example
/// ```ignore
/// use masker::slog::SlogMaskedExt;
///
/// info!(logger, "signup"; "user" => user.slog_masked_json());
/// ```
pub trait SlogMaskedExt: Mask + Serialize + Sized {
    /// Masks `self` and returns a `slog::Value` that serializes as JSON.
    ///
    /// If serialization fails, the value holds a JSON string starting with
    /// `"Failed to serialize masked value"`.
    fn slog_masked_json(self) -> MaskedJson {
        mask_into_json(self)
    }
}

impl<T> SlogMaskedExt for T where T: Mask + Serialize {}
