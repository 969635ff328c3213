//! `serde_json::Value` support for masking traversal.
//!
//! A JSON value is walked recursively: every string is masked, and every
//! number is replaced by the masked form of its decimal text. Booleans and
//! nulls carry no free text and are kept. Object keys are never masked.
//!
//! An unannotated `Value` field is masked with [`MaskStrategy::Generic`], since
//! its contents are unknown.

use serde_json::Value as JsonValue;

use super::traits::{Mask, MaskLeaf};
use crate::mask::MaskStrategy;

impl MaskLeaf for JsonValue {
    fn mask_leaf(&mut self, strategy: MaskStrategy) {
        match self {
            JsonValue::String(text) => text.mask_leaf(strategy),
            JsonValue::Number(number) => {
                *self = JsonValue::String(strategy.apply(&number.to_string()));
            }
            JsonValue::Array(items) => items.mask_leaf(strategy),
            JsonValue::Object(map) => {
                for value in map.values_mut() {
                    value.mask_leaf(strategy);
                }
            }
            JsonValue::Bool(_) | JsonValue::Null => {}
        }
    }
}

impl Mask for JsonValue {
    fn mask(&mut self) {
        self.mask_leaf(MaskStrategy::Generic);
    }
}
