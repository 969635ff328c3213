//! In-place masking of structured values.
//!
//! This module provides the machinery behind `#[derive(Mask)]`:
//!
//! - **`traits`**: Core traits (`Mask`, `MaskLeaf`)
//! - **`containers`**: implementations for std scalars, strings and collections
//! - **`display`**: lazily masked display of a single string (`MaskedDisplay`)
//! - **`output`**: masked JSON for logging boundaries (`json` feature)
//!
//! The strategy functions themselves live in `crate::mask`.

mod containers;
mod display;
#[cfg(feature = "json")]
mod json;
#[cfg(feature = "json")]
mod output;
mod traits;

pub use display::MaskedDisplay;
#[cfg(feature = "json")]
pub(crate) use output::mask_into_json;
#[cfg(feature = "json")]
pub use output::{MaskedJson, MaskedJsonExt};
pub use traits::{Mask, MaskLeaf};
