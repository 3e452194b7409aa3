//! Converts `syn::DeriveInput` into [`EnumIr`].

use syn::{spanned::Spanned, Data, DeriveInput, Fields};

use crate::ir::EnumIr;

/// Extracts the variant list of an enum, rejecting anything that is not a fieldless
/// enum.
pub fn derive_input_to_ir(input: &DeriveInput) -> syn::Result<EnumIr> {
    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new(
                input.ident.span(),
                "Enumerable can only be derived for enums",
            ));
        }
    };

    let mut variants = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.fields.span(),
                format!(
                    "Enumerable requires fieldless variants; `{}` carries data",
                    variant.ident
                ),
            ));
        }
        variants.push(variant.ident.clone());
    }

    Ok(EnumIr {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        variants,
    })
}
