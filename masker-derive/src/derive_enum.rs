//! Enum-specific `Mask` derivation.
//!
//! Each variant gets its own match arm; variants without masked fields map
//! to an empty arm.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataEnum, Result};

use crate::transform::{DeriveContext, derive_fields};

pub(crate) fn derive_enum(ctx: &mut DeriveContext<'_>, data: &DataEnum) -> Result<TokenStream> {
    if data.variants.is_empty() {
        return Ok(quote! { match *self {} });
    }

    let mut arms = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        let ident = &variant.ident;
        let output = derive_fields(ctx, &variant.fields)?;
        let pattern = output.pattern;
        let body = output.body;
        arms.push(quote! {
            Self::#ident #pattern => {
                #body
            }
        });
    }

    Ok(quote! {
        match self {
            #(#arms)*
        }
    })
}
