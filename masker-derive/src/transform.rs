//! Shared field transformation logic for struct and enum derivation.
//!
//! Structs and enum variants both reduce to a set of fields; this module turns
//! those fields into a destructuring pattern plus the masking statements for
//! the bound fields.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote, quote_spanned};
use syn::{Fields, Result, spanned::Spanned};

use crate::{
    crate_path,
    generics::collect_generics_from_type,
    strategy::{Strategy, parse_field_strategy},
    types::{is_phantom_data, is_scalar_type},
};

/// Accumulated state during field processing.
pub(crate) struct DeriveContext<'a> {
    pub(crate) generics: &'a syn::Generics,
    /// Generics used by walked fields; they need `Mask`.
    pub(crate) walked_generics: &'a mut Vec<Ident>,
    /// Generics used by `#[mask(..)]` fields; they need `MaskLeaf`.
    pub(crate) leaf_generics: &'a mut Vec<Ident>,
}

/// Destructuring pattern and statements for one set of fields.
pub(crate) struct FieldsOutput {
    /// Pattern following `Self` or `Self::Variant`, binding only the fields
    /// that get transformed.
    pub(crate) pattern: TokenStream,
    /// Masking statements for the bound fields.
    pub(crate) body: TokenStream,
    /// Whether any field is transformed.
    pub(crate) touches_fields: bool,
}

/// Generates the masking statement for a single field.
///
/// Returns `None` when the field is left untouched.
///
/// ## Field Transformation Rules
///
/// | Annotation           | Behavior                                      |
/// |----------------------|-----------------------------------------------|
/// | None                 | Walk with `Mask`; scalars and `PhantomData` skipped |
/// | `#[mask(Strategy)]`  | `MaskLeaf::mask_leaf` with the strategy       |
/// | `#[not_masked]`      | Skipped                                       |
fn generate_field_transform(
    ctx: &mut DeriveContext<'_>,
    ty: &syn::Type,
    binding: &Ident,
    span: Span,
    strategy: &Strategy,
) -> Result<Option<TokenStream>> {
    match strategy {
        Strategy::NotMasked => Ok(None),
        Strategy::Walk => {
            if is_scalar_type(ty) || is_phantom_data(ty) {
                return Ok(None);
            }
            collect_generics_from_type(ty, ctx.generics, ctx.walked_generics);
            let mask_path = crate_path("Mask");
            Ok(Some(quote_spanned! { span =>
                #mask_path::mask(#binding);
            }))
        }
        Strategy::Apply(variant) => {
            if is_scalar_type(ty) {
                return Err(syn::Error::new(
                    span,
                    "#[mask(..)] applies to string-like fields; \
                     scalar fields carry no text to mask",
                ));
            }
            collect_generics_from_type(ty, ctx.generics, ctx.leaf_generics);
            let leaf_path = crate_path("MaskLeaf");
            let strategy_path = crate_path("MaskStrategy");
            Ok(Some(quote_spanned! { span =>
                #leaf_path::mask_leaf(#binding, #strategy_path::#variant);
            }))
        }
    }
}

/// Builds the pattern and masking statements for `fields`.
pub(crate) fn derive_fields(ctx: &mut DeriveContext<'_>, fields: &Fields) -> Result<FieldsOutput> {
    let mut patterns = Vec::new();
    let mut transforms = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let span = field.span();
        let strategy = parse_field_strategy(&field.attrs)?;
        let binding = field
            .ident
            .clone()
            .unwrap_or_else(|| format_ident!("field_{index}"));
        let transform = generate_field_transform(ctx, &field.ty, &binding, span, &strategy)?;

        match transform {
            Some(transform) => {
                patterns.push(quote! { #binding });
                transforms.push(transform);
            }
            // Tuple fields keep their position in the pattern.
            None if field.ident.is_none() => patterns.push(quote! { _ }),
            None => {}
        }
    }

    let touches_fields = !transforms.is_empty();
    let pattern = match fields {
        Fields::Named(_) => quote! { { #(#patterns,)* .. } },
        Fields::Unnamed(_) if touches_fields => quote! { ( #(#patterns),* ) },
        Fields::Unnamed(_) => quote! { (..) },
        Fields::Unit => TokenStream::new(),
    };

    Ok(FieldsOutput {
        pattern,
        body: quote! { #(#transforms)* },
        touches_fields,
    })
}
