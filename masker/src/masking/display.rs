//! Lazily masked display of a borrowed string.

use std::fmt;

use crate::mask::MaskStrategy;

/// Display wrapper that prints the masked form of a string.
///
/// Obtained from [`MaskStrategy::display`]. `Debug` prints the same masked
/// text, quoted, so the raw value can't leak through `{:?}` either.
#[derive(Clone, Copy)]
pub struct MaskedDisplay<'a> {
    strategy: MaskStrategy,
    value: &'a str,
}

impl<'a> MaskedDisplay<'a> {
    pub(crate) fn new(strategy: MaskStrategy, value: &'a str) -> Self {
        Self { strategy, value }
    }

    /// The strategy applied when formatting.
    pub fn strategy(&self) -> MaskStrategy {
        self.strategy
    }

    /// Returns the masked string.
    #[must_use]
    pub fn masked(&self) -> String {
        self.strategy.apply(self.value)
    }
}

impl fmt::Display for MaskedDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl fmt::Debug for MaskedDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.masked(), f)
    }
}
