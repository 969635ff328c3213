//! Type utilities for the derive macro.

/// Checks if a type is `PhantomData<...>` or `std::marker::PhantomData<...>`.
///
/// `PhantomData<T>` never carries data, so fields of this type are left
/// alone without requiring `T: Mask`.
pub(crate) fn is_phantom_data(ty: &syn::Type) -> bool {
    if let syn::Type::Path(path) = ty {
        if let Some(last_segment) = path.path.segments.last() {
            return last_segment.ident == "PhantomData"
                && matches!(
                    last_segment.arguments,
                    syn::PathArguments::AngleBracketed(_)
                );
        }
    }
    false
}

/// Checks if a type is a recognized scalar primitive.
///
/// Returns `true` for bare primitive type names like `i32`, `bool`, `f64`.
/// Qualified paths, generic types and type aliases are not recognized; those
/// are walked with `Mask`, whose scalar impls are no-ops anyway.
pub(crate) fn is_scalar_type(ty: &syn::Type) -> bool {
    let syn::Type::Path(path) = ty else {
        return false;
    };
    if path.qself.is_some() || path.path.leading_colon.is_some() || path.path.segments.len() != 1
    {
        return false;
    }
    let Some(segment) = path.path.segments.last() else {
        return false;
    };
    if !segment.arguments.is_empty() {
        return false;
    }
    matches!(
        segment.ident.to_string().as_str(),
        "i8" | "i16"
            | "i32"
            | "i64"
            | "i128"
            | "isize"
            | "u8"
            | "u16"
            | "u32"
            | "u64"
            | "u128"
            | "usize"
            | "f32"
            | "f64"
            | "bool"
            | "char"
    )
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn recognizes_bare_scalars() {
        assert!(is_scalar_type(&parse_quote!(u64)));
        assert!(is_scalar_type(&parse_quote!(bool)));
        assert!(is_scalar_type(&parse_quote!(char)));
    }

    #[test]
    fn rejects_non_scalars() {
        assert!(!is_scalar_type(&parse_quote!(String)));
        assert!(!is_scalar_type(&parse_quote!(Option<u64>)));
        assert!(!is_scalar_type(&parse_quote!(std::primitive::u64)));
        assert!(!is_scalar_type(&parse_quote!(&'static str)));
    }

    #[test]
    fn recognizes_phantom_data() {
        assert!(is_phantom_data(&parse_quote!(PhantomData<T>)));
        assert!(is_phantom_data(&parse_quote!(::std::marker::PhantomData<T>)));
        assert!(!is_phantom_data(&parse_quote!(PhantomData)));
        assert!(!is_phantom_data(&parse_quote!(Vec<T>)));
    }
}
