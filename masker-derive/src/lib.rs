//! Derive macro for `masker`.
//!
//! This crate generates the traversal code behind `#[derive(Mask)]`. It:
//! - reads `#[mask(...)]` and `#[not_masked]` field attributes
//! - emits a `masker::Mask` implementation that masks annotated fields in place
//!
//! It does **not** implement any masking strategy. Those live in the main
//! `masker` crate and are applied at runtime.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Result, parse_macro_input, spanned::Spanned};

mod derive_enum;
mod derive_struct;
mod generics;
mod strategy;
mod transform;
mod types;
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::add_bounds;
use strategy::reject_container_attributes;
use transform::DeriveContext;

/// Derives `masker::Mask` for structs and enums.
///
/// # Field Attributes
///
/// - **No annotation**: the field is walked with `Mask::mask`, so nested
///   types masked by their own `#[derive(Mask)]` are handled recursively.
///   Bare scalars (`u32`, `bool`, ...) and `PhantomData<T>` are skipped.
///
/// - `#[mask(Strategy)]`: applies the strategy to a string-like field through
///   `MaskLeaf`. `Strategy` is one of `Generic`, `Password`, `Email`, `Phone`
///   or `CardPan` (`CardPAN` is accepted too). Works for `String`,
///   `Option<String>`, `Vec<String>`, `Box<String>`, maps with string values
///   and any nesting of those.
///
/// - `#[not_masked]`: explicit passthrough. Use it for foreign types that do
///   not implement `Mask`.
///
/// Type parameters used by walked fields get a `Mask` bound, those used by
/// `#[mask(..)]` fields get a `MaskLeaf` bound.
///
/// Unions are rejected at compile time.
///
/// # Example
///
/// ```ignore
/// use masker::Mask;
///
/// #[derive(Clone, Mask)]
/// struct Customer {
///     #[mask(Email)]
///     email: String,
///     #[mask(Phone)]
///     phones: Vec<String>,
///     billing: Billing,
///     id: u64,
/// }
///
/// #[derive(Clone, Mask)]
/// struct Billing {
///     #[mask(CardPan)]
///     pan: Option<String>,
/// }
/// ```
#[proc_macro_derive(Mask, attributes(mask, not_masked))]
pub fn derive_mask(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the masker crate root.
///
/// Handles crate renaming (e.g., `pii = { package = "masker", ... }`). Inside
/// `masker` itself, `::masker` resolves through its `extern crate self as
/// masker`, which also covers its doctests.
fn crate_root() -> TokenStream {
    match crate_name("masker") {
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::masker },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_ident = format_ident!("{}", item);
    quote! { #root::#item_ident }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    reject_container_attributes(&attrs)?;

    let mut walked_generics = Vec::new();
    let mut leaf_generics = Vec::new();
    let mut ctx = DeriveContext {
        generics: &generics,
        walked_generics: &mut walked_generics,
        leaf_generics: &mut leaf_generics,
    };

    let body = match &data {
        Data::Struct(data) => derive_struct(&mut ctx, data)?,
        Data::Enum(data) => derive_enum(&mut ctx, data)?,
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Mask` cannot be derived for unions",
            ));
        }
    };

    let mask_path = crate_path("Mask");
    let leaf_path = crate_path("MaskLeaf");
    let generics = add_bounds(generics, &walked_generics, &mask_path);
    let generics = add_bounds(generics, &leaf_generics, &leaf_path);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #mask_path for #ident #ty_generics #where_clause {
            fn mask(&mut self) {
                #body
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::DeriveInput;

    use super::expand;

    fn expand_str(tokens: proc_macro2::TokenStream) -> syn::Result<String> {
        let input: DeriveInput = syn::parse2(tokens).expect("should parse as DeriveInput");
        expand(input).map(|tokens| tokens.to_string())
    }

    #[test]
    fn named_struct_binds_only_masked_fields() {
        let out = expand_str(quote! {
            struct User {
                #[mask(Email)]
                email: String,
                id: u64,
                #[not_masked]
                raw: Foreign,
            }
        })
        .unwrap();
        assert!(out.contains("let Self { email , .. } = self"));
        assert!(out.contains("MaskStrategy :: Email"));
        assert!(!out.contains("raw"));
    }

    #[test]
    fn tuple_struct_keeps_positions() {
        let out = expand_str(quote! {
            struct Pair(u32, #[mask(Phone)] String);
        })
        .unwrap();
        assert!(out.contains("let Self (_ , field_1) = self"));
    }

    #[test]
    fn unit_struct_has_empty_body() {
        let out = expand_str(quote! { struct Marker; }).unwrap();
        assert!(out.contains("fn mask (& mut self) { }"));
    }

    #[test]
    fn enum_generates_arm_per_variant() {
        let out = expand_str(quote! {
            enum Contact {
                Email(#[mask(Email)] String),
                Phone { #[mask(Phone)] number: String },
                Unknown,
            }
        })
        .unwrap();
        assert!(out.contains("Self :: Email (field_0)"));
        assert!(out.contains("Self :: Phone { number , .. }"));
        assert!(out.contains("Self :: Unknown =>"));
    }

    #[test]
    fn generics_get_bounds_by_usage() {
        let out = expand_str(quote! {
            struct Wrapper<T, S, M> {
                inner: T,
                #[mask(Generic)]
                text: S,
                _marker: PhantomData<M>,
            }
        })
        .unwrap();
        assert!(out.contains("T : :: masker :: Mask"));
        assert!(out.contains("S : :: masker :: MaskLeaf"));
        assert!(!out.contains("M : "));
    }

    #[test]
    fn unions_are_rejected() {
        let err = expand_str(quote! {
            union Bits { a: u32, b: f32 }
        })
        .unwrap_err();
        assert!(err.to_string().contains("cannot be derived for unions"));
    }

    #[test]
    fn strategy_on_scalar_is_rejected() {
        let err = expand_str(quote! {
            struct Bad { #[mask(CardPan)] pan: u64 }
        })
        .unwrap_err();
        assert!(err.to_string().contains("string-like fields"));
    }
}
