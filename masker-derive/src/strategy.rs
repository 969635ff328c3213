//! Parsing of `#[mask(...)]` and `#[not_masked]` field attributes.
//!
//! This module maps attribute syntax to traversal decisions and produces
//! structured errors for invalid forms.

use proc_macro2::{Ident, Span};
use syn::{Attribute, Meta, Result, spanned::Spanned};

/// Strategy names accepted inside `#[mask(...)]`, paired with the
/// `MaskStrategy` variant they select.
const STRATEGIES: &[(&str, &str)] = &[
    ("Generic", "Generic"),
    ("Password", "Password"),
    ("Email", "Email"),
    ("Phone", "Phone"),
    ("CardPan", "CardPan"),
    ("CardPAN", "CardPan"),
];

/// Field transformation strategy based on `#[mask(...)]` attributes.
///
/// ## Strategy Mapping
///
/// | Attribute           | Strategy          | Behavior                               |
/// |---------------------|-------------------|----------------------------------------|
/// | None                | `Walk`            | Walk containers; scalars pass through  |
/// | `#[mask(Strategy)]` | `Apply(variant)`  | Apply the masking strategy             |
/// | `#[not_masked]`     | `NotMasked`       | Explicit passthrough (no traversal)    |
#[derive(Clone, Debug)]
pub(crate) enum Strategy {
    /// No annotation: walk containers, scalars pass through unchanged.
    Walk,
    /// `#[mask(Strategy)]`: the `MaskStrategy` variant to apply.
    Apply(Ident),
    /// `#[not_masked]`: explicit passthrough, no traversal or transformation.
    NotMasked,
}

fn set_strategy(target: &mut Option<Strategy>, next: Strategy, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "multiple #[mask] or #[not_masked] attributes on the same field",
        ));
    }
    *target = Some(next);
    Ok(())
}

fn resolve_variant(ident: &Ident) -> Result<Ident> {
    let name = ident.to_string();
    STRATEGIES
        .iter()
        .find(|(accepted, _)| *accepted == name)
        .map(|(_, variant)| Ident::new(variant, ident.span()))
        .ok_or_else(|| {
            syn::Error::new(
                ident.span(),
                format!(
                    "unknown mask strategy `{name}`; expected one of \
                     Generic, Password, Email, Phone, CardPan"
                ),
            )
        })
}

pub(crate) fn parse_field_strategy(attrs: &[Attribute]) -> Result<Strategy> {
    let mut strategy: Option<Strategy> = None;
    for attr in attrs {
        if attr.path().is_ident("not_masked") {
            match &attr.meta {
                Meta::Path(_) => {
                    set_strategy(&mut strategy, Strategy::NotMasked, attr.span())?;
                }
                _ => {
                    return Err(syn::Error::new(
                        attr.span(),
                        "#[not_masked] does not take arguments",
                    ));
                }
            }
            continue;
        }

        if !attr.path().is_ident("mask") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "missing strategy: use #[mask(Strategy)] \
                     (e.g., #[mask(Email)], #[mask(CardPan)])",
                ));
            }
            Meta::List(list) => {
                let Ok(ident) = syn::parse2::<Ident>(list.tokens.clone()) else {
                    return Err(syn::Error::new(
                        attr.span(),
                        "expected a strategy name (e.g., #[mask(Email)])",
                    ));
                };
                let variant = resolve_variant(&ident)?;
                set_strategy(&mut strategy, Strategy::Apply(variant), attr.span())?;
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "expected #[mask(Strategy)] syntax \
                     (e.g., #[mask(Email)], #[mask(Phone)])",
                ));
            }
        }
    }

    Ok(strategy.unwrap_or(Strategy::Walk))
}

/// Rejects `#[mask]` and `#[not_masked]` on the type itself.
pub(crate) fn reject_container_attributes(attrs: &[Attribute]) -> Result<()> {
    for attr in attrs {
        if attr.path().is_ident("mask") || attr.path().is_ident("not_masked") {
            return Err(syn::Error::new(
                attr.span(),
                "#[mask] and #[not_masked] belong on fields, not on the type",
            ));
        }
    }
    Ok(())
}
