//! Intermediate representation for the `Enumerable` derive.
//!
//! Parsing fills these plain structures; validation and code generation only ever look
//! at the IR, which keeps both testable without building token streams by hand.

use syn::{Generics, Ident};

/// A fieldless enum, reduced to what the generated impl needs.
#[derive(Debug, Clone)]
pub struct EnumIr {
    pub ident: Ident,
    pub generics: Generics,
    /// Variant names in declaration order; the index is the ordinal.
    pub variants: Vec<Ident>,
}
