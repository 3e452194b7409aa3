use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod codegen;
mod ir;
mod parse;
mod validate;

/// Derive macro that implements [`Enumerable`] for a fieldless enum.
///
/// `VARIANTS` lists every variant in declaration order and `ordinal` returns a
/// variant's position in that list. Explicit discriminants are ignored: ordinals are
/// always dense and start at zero, which is what packed sets index by.
///
/// # Errors
///
/// Compilation fails if the macro is applied to
///
/// - a struct or union,
/// - an enum with a tuple or struct variant,
/// - an enum with generic parameters.
///
/// # Examples
///
/// ```rust,ignore
/// use saturn_enum_set::{Domain, EnumSet, Enumerable};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Enumerable)]
/// enum Weekday {
///     Mon,
///     Tue,
///     Wed = 10,
/// }
///
/// assert_eq!(Weekday::Wed.ordinal(), 2);
/// assert_eq!(Domain::<Weekday>::of_enum().len(), 3);
/// assert_eq!(EnumSet::<Weekday>::all().len(), 3);
/// ```
///
/// [`Enumerable`]: https://docs.rs/saturn-enum-set/latest/saturn_enum_set/trait.Enumerable.html
#[proc_macro_derive(Enumerable)]
pub fn derive_enumerable(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);

    let ir = match parse::derive_input_to_ir(&input) {
        Ok(ir) => ir,
        Err(e) => return e.to_compile_error().into(),
    };

    if let Err(e) = validate::check(&ir) {
        return e.to_compile_error().into();
    }

    TokenStream::from(codegen::expand(&ir))
}
