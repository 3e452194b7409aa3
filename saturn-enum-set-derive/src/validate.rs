//! Semantic checks that need the whole [`EnumIr`].

use syn::spanned::Spanned;

use crate::ir::EnumIr;

/// `VARIANTS` is an associated `'static` slice, so the enum cannot be generic.
pub fn check(ir: &EnumIr) -> syn::Result<()> {
    if !ir.generics.params.is_empty() {
        return Err(syn::Error::new(
            ir.generics.span(),
            "Enumerable cannot be derived for generic enums",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::derive_input_to_ir;
    use syn::{parse_quote, DeriveInput};

    #[test]
    fn test_plain_enum_passes() {
        let input: DeriveInput = parse_quote! { enum Side { Bid, Ask } };
        assert!(check(&derive_input_to_ir(&input).unwrap()).is_ok());
    }

    #[test]
    fn test_generic_enum_fails() {
        let input: DeriveInput = parse_quote! { enum Tagged<'a> { One, Two } };
        let err = check(&derive_input_to_ir(&input).unwrap()).unwrap_err();
        assert!(err.to_string().contains("generic"));
    }
}
