//! Strategy tags and the tag-to-function table.
//!
//! A [`MaskStrategy`] names one of the masking functions in
//! [`super::text`]. Schemas, config files and the `Mask` derive refer to
//! strategies by these tags; the lookup itself is a plain `match`.

use std::{fmt, str::FromStr};

use super::text::{mask_as_card_pan, mask_as_email, mask_as_generic, mask_as_password, mask_as_phone};
use crate::masking::MaskedDisplay;

/// Signature shared by every masking function.
pub type MaskFn = fn(&str) -> String;

/// Identifies a masking strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaskStrategy {
    /// Every non-whitespace character is masked.
    Generic,
    /// Any non-empty value becomes `"********"`.
    Password,
    /// The local part is partially masked, the domain kept.
    Email,
    /// First four and last four digits kept.
    Phone,
    /// First six and last four digits kept.
    #[cfg_attr(feature = "serde", serde(rename = "CardPAN"))]
    CardPan,
}

impl MaskStrategy {
    /// All strategies in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Generic,
        Self::Password,
        Self::Email,
        Self::Phone,
        Self::CardPan,
    ];

    /// Returns the stable tag name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Generic => "Generic",
            Self::Password => "Password",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::CardPan => "CardPAN",
        }
    }

    /// Returns the masking function for this tag.
    pub const fn mask_fn(self) -> MaskFn {
        match self {
            Self::Generic => mask_as_generic,
            Self::Password => mask_as_password,
            Self::Email => mask_as_email,
            Self::Phone => mask_as_phone,
            Self::CardPan => mask_as_card_pan,
        }
    }

    /// Masks `value` with this strategy.
    ///
    /// ```
    /// use masker::MaskStrategy;
    ///
    /// assert_eq!(MaskStrategy::Phone.apply("+12345678901"), "+1234***8901");
    /// ```
    #[must_use]
    pub fn apply(self, value: &str) -> String {
        (self.mask_fn())(value)
    }

    /// Wraps `value` so that formatting it prints the masked form.
    ///
    /// Nothing is computed until the wrapper is formatted.
    pub fn display(self, value: &str) -> MaskedDisplay<'_> {
        MaskedDisplay::new(self, value)
    }
}

impl fmt::Display for MaskStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no known strategy.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown mask strategy `{input}` (expected one of Generic, Password, Email, Phone, CardPAN)")]
pub struct ParseStrategyError {
    input: String,
}

impl ParseStrategyError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for MaskStrategy {
    type Err = ParseStrategyError;

    /// Parses a tag name, ignoring ASCII case, `_` and `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-'))
            .collect();
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| ParseStrategyError {
                input: s.to_string(),
            })
    }
}
