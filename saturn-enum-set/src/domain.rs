//! The ordered, fixed list of symbols a set is built over.
//!
//! A [`Domain`] assigns every symbol a stable zero-based ordinal equal to its position.
//! Sets only store ordinals, so every set that takes part in the same union,
//! intersection or comparison should be built from the same domain.

use std::{collections::HashMap, fmt, hash::Hash, sync::Arc};

use crate::{
    bits::WORD_BITS,
    error::{EnumSetError, Result},
};

/// A type whose values form a closed, ordered list, such as a fieldless enum.
///
/// Usually derived with `#[derive(Enumerable)]`, which lists the variants in
/// declaration order and maps each variant to its position.
///
/// # Examples
///
/// ```rust
/// use saturn_enum_set::{Domain, Enumerable};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// enum Side {
///     Bid,
///     Ask,
/// }
///
/// impl Enumerable for Side {
///     const VARIANTS: &'static [Self] = &[Side::Bid, Side::Ask];
///
///     fn ordinal(&self) -> usize {
///         *self as usize
///     }
/// }
///
/// let domain = Domain::<Side>::of_enum();
/// assert_eq!(domain.len(), 2);
/// assert_eq!(domain.ordinal(&Side::Ask), Some(1));
/// ```
pub trait Enumerable: Sized + 'static {
    /// Every value of the type, in ordinal order.
    const VARIANTS: &'static [Self];

    /// Position of `self` within [`Enumerable::VARIANTS`].
    fn ordinal(&self) -> usize;
}

/// Which backing store a set over a given domain uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Representation {
    /// One [`Word`](crate::bits::Word); domains of at most [`WORD_BITS`] symbols.
    Compact,
    /// A boxed slice of words; domains larger than [`WORD_BITS`].
    Wide,
}

impl Representation {
    /// Picks the representation for a domain of `len` symbols.
    pub fn for_len(len: usize) -> Self {
        if len <= WORD_BITS {
            Representation::Compact
        } else {
            Representation::Wide
        }
    }
}

enum Lookup<T> {
    Table(HashMap<T, usize>),
    Intrinsic(fn(&T) -> usize),
}

struct DomainInner<T> {
    symbols: Box<[T]>,
    lookup: Lookup<T>,
}

/// A shared, immutable, ordered list of distinct symbols.
///
/// Cloning a `Domain` is cheap: clones share the same symbol storage.
///
/// # Examples
///
/// ```rust
/// use saturn_enum_set::{Domain, EnumSetError, Representation};
///
/// let domain = Domain::new(["btc", "eth", "sol"]).unwrap();
/// assert_eq!(domain.ordinal(&"eth"), Some(1));
/// assert_eq!(domain.ordinal(&"doge"), None);
/// assert_eq!(domain.representation(), Representation::Compact);
///
/// let err = Domain::new(["btc", "btc"]).unwrap_err();
/// assert_eq!(err, EnumSetError::DuplicateSymbol { ordinal: 1 });
/// ```
pub struct Domain<T> {
    inner: Arc<DomainInner<T>>,
}

impl<T> Clone for Domain<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Eq + Hash> Domain<T> {
    /// Builds a domain from `symbols`, assigning ordinals in iteration order.
    ///
    /// Returns [`EnumSetError::DuplicateSymbol`] if a symbol appears more than once.
    pub fn new<I>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let symbols: Box<[T]> = symbols.into_iter().collect();
        let mut table = HashMap::with_capacity(symbols.len());
        for (ordinal, symbol) in symbols.iter().enumerate() {
            if table.insert(symbol.clone(), ordinal).is_some() {
                return Err(EnumSetError::DuplicateSymbol { ordinal });
            }
        }
        Ok(Self::from_parts(symbols, Lookup::Table(table)))
    }
}

impl<E: Enumerable + Clone> Domain<E> {
    /// The domain of every value of `E`, with ordinals taken from [`Enumerable::ordinal`].
    pub fn of_enum() -> Self {
        Self::from_parts(E::VARIANTS.into(), Lookup::Intrinsic(E::ordinal))
    }
}

impl<T> Domain<T> {
    fn from_parts(symbols: Box<[T]>, lookup: Lookup<T>) -> Self {
        Self {
            inner: Arc::new(DomainInner { symbols, lookup }),
        }
    }

    /// Number of symbols in the domain.
    pub fn len(&self) -> usize {
        self.inner.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.symbols.is_empty()
    }

    /// All symbols, in ordinal order.
    pub fn symbols(&self) -> &[T] {
        &self.inner.symbols
    }

    /// The symbol with the given ordinal, if any.
    pub fn symbol(&self, ordinal: usize) -> Option<&T> {
        self.inner.symbols.get(ordinal)
    }

    /// The representation every set over this domain uses.
    pub fn representation(&self) -> Representation {
        Representation::for_len(self.len())
    }

    /// True if both handles point at the same symbol storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Eq + Hash> Domain<T> {
    /// Ordinal of `symbol`, or `None` if it is not part of this domain.
    pub fn ordinal(&self, symbol: &T) -> Option<usize> {
        match &self.inner.lookup {
            Lookup::Table(table) => table.get(symbol).copied(),
            Lookup::Intrinsic(ordinal) => Some(ordinal(symbol)).filter(|&o| o < self.len()),
        }
    }
}

impl<T: PartialEq> PartialEq for Domain<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.symbols() == other.symbols()
    }
}

impl<T: Eq> Eq for Domain<T> {}

impl<T: fmt::Debug> fmt::Debug for Domain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.symbols()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Light {
        Red,
        Amber,
        Green,
    }

    impl Enumerable for Light {
        const VARIANTS: &'static [Self] = &[Light::Red, Light::Amber, Light::Green];

        fn ordinal(&self) -> usize {
            *self as usize
        }
    }

    #[test]
    fn test_new_assigns_positions() {
        let domain = Domain::new(["a", "b", "c"]).unwrap();
        assert_eq!(domain.len(), 3);
        assert!(!domain.is_empty());
        assert_eq!(domain.ordinal(&"a"), Some(0));
        assert_eq!(domain.ordinal(&"c"), Some(2));
        assert_eq!(domain.symbol(1), Some(&"b"));
        assert_eq!(domain.symbol(3), None);
    }

    #[test]
    fn test_unknown_symbol_has_no_ordinal() {
        let domain = Domain::new(["a", "b"]).unwrap();
        assert_eq!(domain.ordinal(&"z"), None);
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        let err = Domain::new(["a", "b", "c", "b"]).unwrap_err();
        assert_eq!(err, EnumSetError::DuplicateSymbol { ordinal: 3 });
    }

    #[test]
    fn test_empty_domain() {
        let domain = Domain::<u8>::new([]).unwrap();
        assert!(domain.is_empty());
        assert_eq!(domain.representation(), Representation::Compact);
    }

    #[test]
    fn test_representation_boundary() {
        let at_limit = Domain::new(0..WORD_BITS as u32).unwrap();
        assert_eq!(at_limit.representation(), Representation::Compact);

        let over_limit = Domain::new(0..=WORD_BITS as u32).unwrap();
        assert_eq!(over_limit.representation(), Representation::Wide);
    }

    #[test]
    fn test_of_enum_uses_intrinsic_ordinal() {
        let domain = Domain::<Light>::of_enum();
        assert_eq!(domain.symbols(), &[Light::Red, Light::Amber, Light::Green]);
        assert_eq!(domain.ordinal(&Light::Green), Some(2));
    }

    #[test]
    fn test_clones_share_storage() {
        let domain = Domain::new(["x", "y"]).unwrap();
        let clone = domain.clone();
        assert!(domain.ptr_eq(&clone));
        assert_eq!(domain, clone);

        let rebuilt = Domain::new(["x", "y"]).unwrap();
        assert!(!domain.ptr_eq(&rebuilt));
        assert_eq!(domain, rebuilt);
    }
}
