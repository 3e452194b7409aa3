//! Emits the `Enumerable` impl from a validated [`EnumIr`].

use proc_macro2::TokenStream;
use quote::quote;

use crate::ir::EnumIr;

pub fn expand(ir: &EnumIr) -> TokenStream {
    let ident = &ir.ident;
    let variants = &ir.variants;
    let ordinals = 0..variants.len();

    let ordinal_body = if variants.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #( Self::#variants => #ordinals, )*
            }
        }
    };

    quote! {
        #[automatically_derived]
        impl ::saturn_enum_set::Enumerable for #ident {
            const VARIANTS: &'static [Self] = &[ #( Self::#variants ),* ];

            #[inline]
            fn ordinal(&self) -> usize {
                #ordinal_body
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::derive_input_to_ir;
    use syn::{parse_quote, DeriveInput};

    fn expand_str(input: DeriveInput) -> String {
        expand(&derive_input_to_ir(&input).unwrap()).to_string()
    }

    #[test]
    fn test_ordinals_follow_declaration_order() {
        let out = expand_str(parse_quote! { enum Side { Bid, Ask } });
        assert!(out.contains("impl :: saturn_enum_set :: Enumerable for Side"));
        assert!(out.contains("Self :: Bid => 0usize"));
        assert!(out.contains("Self :: Ask => 1usize"));
        assert!(out.contains("& [Self :: Bid , Self :: Ask]"));
    }

    #[test]
    fn test_empty_enum_matches_on_deref() {
        let out = expand_str(parse_quote! { enum Never {} });
        assert!(out.contains("match * self { }"));
        assert!(out.contains("& []"));
    }
}
