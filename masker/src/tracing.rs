//! Adapters for emitting masked values through `tracing`.
//!
//! [`MaskedDisplay`] already implements `Display`, so single strings can be
//! logged with `%`:
//!
//! ```ignore
//! tracing::info!(email = %MaskStrategy::Email.display(&user.email));
//! ```
//!
//! For whole structs, [`TracingMaskedExt`] masks a clone and logs its `Debug`
//! form:
//!
//! ```ignore
//! use masker::tracing::TracingMaskedExt;
//!
//! tracing::info!(user = %user.tracing_masked());
//! ```

use std::fmt;

use tracing::field::{DisplayValue, display};

use crate::masking::{Mask, MaskedDisplay};

/// Marker trait for values whose `tracing` output is always masked.
///
/// Implemented only for adapters, never as a blanket impl for raw types.
pub trait TracingMasked {}

impl TracingMasked for MaskedDisplay<'_> {}

#[cfg(feature = "json")]
impl TracingMasked for crate::masking::MaskedJson {}

/// Extension trait for logging masked values as display strings.
pub trait TracingMaskedExt {
    /// Masks a clone of the value and wraps its `Debug` text for `tracing`.
    fn tracing_masked(&self) -> DisplayValue<String>;
}

impl<T> TracingMaskedExt for T
where
    T: Mask + Clone + fmt::Debug,
{
    fn tracing_masked(&self) -> DisplayValue<String> {
        display(format!("{:?}", self.clone_masked()))
    }
}
