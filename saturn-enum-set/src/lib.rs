//! # Saturn Enum Set
//!
//! Packed sets over a fixed, ordered list of symbols.
//!
//! A [`Domain`] fixes the symbols once and gives each one an ordinal equal to its
//! position. An [`EnumSet`] over that domain stores membership as bits indexed by
//! ordinal, so set algebra between two sets over the same domain runs a word at a
//! time instead of an element at a time.
//!
//! ## Features
//!
//! ### Core Types
//!
//! - **[`Domain<T>`]** – immutable, cheaply clonable ordered symbol list with ordinal lookup
//! - **[`EnumSet<T>`]** – packed set with O(1) membership and word-level union / intersection / difference
//! - **[`Members<T>`]** – trait abstraction over anything a set can be combined with (`Vec`, slices, `HashSet`, `BTreeSet`, other `EnumSet`s)
//! - **[`Iter`] / [`IntoIter`]** – snapshot iterators yielding members in ordinal order
//!
//! ### Representations
//!
//! - **Compact** – a single `u64` for domains of at most [`bits::WORD_BITS`] symbols
//! - **Wide** – a boxed slice of words plus a cached member count for anything larger
//!
//! The representation is chosen from the domain length when a set is created and never
//! changes afterwards.
//!
//! ### Derive Macro
//!
//! With the `derive` feature (enabled by default) fieldless enums can implement
//! [`Enumerable`] with `#[derive(Enumerable)]`, which makes [`EnumSet::empty`],
//! [`EnumSet::all`] and `collect()` available without building a domain by hand.
//!
//! ## Quick Examples
//!
//! ### Sets over an explicit domain
//!
//! ```rust
//! use saturn_enum_set::{Domain, EnumSet};
//!
//! let domain = Domain::new(["a", "b", "c", "d", "e"]).unwrap();
//!
//! let left = EnumSet::of(&domain, &["a", "b", "c"]);
//! let right = EnumSet::of(&domain, &["b", "c", "d"]);
//!
//! assert_eq!((&left | &right).len(), 4);
//! assert_eq!((&left & &right).iter().copied().collect::<Vec<_>>(), vec!["b", "c"]);
//! assert_eq!((&left - &right).single(), Ok(&"a"));
//! ```
//!
//! ### Mixing in ordinary collections
//!
//! ```rust
//! use std::collections::HashSet;
//! use saturn_enum_set::{Domain, EnumSet};
//!
//! let domain = Domain::new(1..=100u32).unwrap();
//! let mut set = EnumSet::of(&domain, &vec![1, 50, 100]);
//!
//! set.remove_all(&HashSet::from([50, 500]));
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 100]);
//! ```
//!
//! ### Deriving `Enumerable`
//!
//! ```rust
//! # #[cfg(feature = "derive")]
//! # {
//! use saturn_enum_set::{EnumSet, Enumerable};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Enumerable)]
//! enum Permission {
//!     Read,
//!     Write,
//!     Execute,
//! }
//!
//! let granted: EnumSet<Permission> = [Permission::Execute, Permission::Read].into_iter().collect();
//! assert_eq!(granted.first(), Ok(&Permission::Read));
//! assert_eq!(granted.complement().single(), Ok(&Permission::Write));
//! # }
//! ```
//!
//! ## Thread Safety
//!
//! A [`Domain`] is immutable and shared behind an `Arc`, so it can be handed to any
//! number of threads. An [`EnumSet`] is an ordinary owned value: share it read-only or
//! wrap it in a lock to mutate it from several threads.

// Lets the derive macro's `::saturn_enum_set::` paths resolve inside this crate's tests.
extern crate self as saturn_enum_set;

pub mod bits;
mod domain;
mod error;
mod iter;
mod members;
mod repr;
mod set;

pub use domain::{Domain, Enumerable, Representation};
pub use error::{EnumSetError, Result};
pub use iter::{IntoIter, Iter};
pub use members::Members;
pub use set::EnumSet;

#[cfg(feature = "derive")]
pub use saturn_enum_set_derive::Enumerable;

/// Glob-importable set of the commonly used names.
pub mod prelude {
    pub use crate::{Domain, EnumSet, EnumSetError, Enumerable, Members};
}
