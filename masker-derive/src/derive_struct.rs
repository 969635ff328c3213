//! Struct-specific `Mask` derivation.
//!
//! Structs without masked fields (including unit structs) get an empty
//! `mask` body.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataStruct, Result};

use crate::transform::{DeriveContext, derive_fields};

pub(crate) fn derive_struct(ctx: &mut DeriveContext<'_>, data: &DataStruct) -> Result<TokenStream> {
    let output = derive_fields(ctx, &data.fields)?;
    if !output.touches_fields {
        return Ok(TokenStream::new());
    }

    let pattern = output.pattern;
    let body = output.body;
    Ok(quote! {
        let Self #pattern = self;
        #body
    })
}
