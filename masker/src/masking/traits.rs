//! Core traits for masking structured values in place.
//!
//! - [`Mask`]: types that can be walked and masked (usually derived)
//! - [`MaskLeaf`]: string-like values a [`MaskStrategy`] applies to

use std::borrow::Cow;

use crate::mask::MaskStrategy;

// =============================================================================
// Mask - Types that contain maskable data
// =============================================================================

/// A type whose sensitive fields can be masked in place.
///
/// Derive it with `#[derive(Mask)]` and annotate string fields with
/// `#[mask(Strategy)]`. Standard containers and scalars have built-in
/// implementations; scalars and bare strings pass through unchanged.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Mask`",
    label = "this type cannot be walked for maskable fields",
    note = "use `#[derive(Mask)]` on the type definition",
    note = "or use `#[mask(Strategy)]` if this is a leaf value like String",
    note = "or use `#[not_masked]` to leave the field untouched"
)]
pub trait Mask {
    /// Masks every annotated field of `self`, recursing into nested values.
    fn mask(&mut self);

    /// Consumes `self` and returns it masked.
    #[must_use]
    fn masked(mut self) -> Self
    where
        Self: Sized,
    {
        self.mask();
        self
    }

    /// Returns a masked copy, leaving `self` untouched.
    #[must_use]
    fn clone_masked(&self) -> Self
    where
        Self: Clone,
    {
        self.clone().masked()
    }
}

// =============================================================================
// MaskLeaf - String-like values a strategy applies to
// =============================================================================

/// A value that a [`MaskStrategy`] can be applied to.
///
/// Implemented for `String` and `Cow<str>`, and for the common std wrappers
/// and collections of those, so `#[mask(Email)]` works on `Option<String>`,
/// `Vec<String>`, `HashMap<K, String>` and so on.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be masked with a strategy",
    label = "`#[mask(..)]` needs a string-like field",
    note = "strategies apply to `String`, `Cow<str>` and std containers of those"
)]
pub trait MaskLeaf {
    /// Replaces every string in `self` with its masked form.
    fn mask_leaf(&mut self, strategy: MaskStrategy);
}

impl MaskLeaf for String {
    fn mask_leaf(&mut self, strategy: MaskStrategy) {
        *self = strategy.apply(self);
    }
}

impl MaskLeaf for Cow<'_, str> {
    fn mask_leaf(&mut self, strategy: MaskStrategy) {
        *self = Cow::Owned(strategy.apply(self));
    }
}
