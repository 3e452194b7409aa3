//! Packed set over a fixed [`Domain`].
//!
//! This module provides [`EnumSet`], which stores membership as bits indexed by
//! ordinal. Domains of up to [`WORD_BITS`](crate::bits::WORD_BITS) symbols use a single
//! word; larger domains use a boxed slice of words with a cached member count.

use std::{
    borrow::Borrow,
    fmt,
    hash::Hash,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Sub, SubAssign},
    ptr,
};

use crate::{
    domain::{Domain, Enumerable, Representation},
    error::{EnumSetError, Result},
    iter::{IntoIter, Iter, Positions},
    members::Members,
    repr::Repr,
};

/// A set of symbols drawn from a fixed, ordered [`Domain`], stored as packed bits.
///
/// Membership, insertion and removal are O(1); union, intersection, difference,
/// complement and subset checks are O(number of words) when both operands are
/// `EnumSet`s over the same domain. Any other [`Members`] operand is processed one
/// element at a time.
///
/// # Examples
///
/// ```rust
/// use saturn_enum_set::{Domain, EnumSet};
///
/// let domain = Domain::new(["a", "b", "c", "d", "e"]).unwrap();
///
/// let mut set = EnumSet::of(&domain, &["c", "a"]);
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec!["a", "c"]);
///
/// assert!(set.add("b"));
/// assert!(!set.add("b"));
/// assert_eq!(set.len(), 3);
///
/// let rest = set.complement();
/// assert_eq!(rest.iter().copied().collect::<Vec<_>>(), vec!["d", "e"]);
/// assert!(set.union(&rest) == EnumSet::all_of(&domain));
/// ```
///
/// # Domains
///
/// All sets taking part in one operation should be built from the same domain. The
/// word-level paths are only used when both domains have the same length; otherwise
/// the operation falls back to matching symbols one by one.
pub struct EnumSet<T> {
    domain: Domain<T>,
    repr: Repr,
}

impl<T> Clone for EnumSet<T> {
    /// Deep copy: the clone owns its own words.
    fn clone(&self) -> Self {
        Self {
            domain: self.domain.clone(),
            repr: self.repr.clone(),
        }
    }
}

// === Construction ===========================================================

impl<T> EnumSet<T> {
    /// Creates an empty set over `domain`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_enum_set::{Domain, EnumSet};
    ///
    /// let domain = Domain::new(["a", "b"]).unwrap();
    /// let set = EnumSet::none_of(&domain);
    /// assert!(set.is_empty());
    /// ```
    pub fn none_of(domain: &Domain<T>) -> Self {
        Self {
            domain: domain.clone(),
            repr: Repr::empty(domain.len()),
        }
    }

    /// Creates a set holding every symbol of `domain`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_enum_set::{Domain, EnumSet};
    ///
    /// let domain = Domain::new(["a", "b", "c"]).unwrap();
    /// assert_eq!(EnumSet::all_of(&domain).len(), 3);
    /// ```
    pub fn all_of(domain: &Domain<T>) -> Self {
        Self {
            domain: domain.clone(),
            repr: Repr::full(domain.len()),
        }
    }

    /// Creates a set holding exactly the domain symbols that `set` does not hold.
    pub fn complement_of(set: &Self) -> Self {
        set.complement()
    }

    /// Creates an independent copy of `set`.
    pub fn copy_of(set: &Self) -> Self {
        set.clone()
    }

    fn with_repr(&self, repr: Repr) -> Self {
        Self {
            domain: self.domain.clone(),
            repr,
        }
    }
}

impl<T: Eq + Hash> EnumSet<T> {
    /// Creates a set over `domain` holding the members of `elements`.
    ///
    /// Members that are not part of `domain` are ignored. When `elements` is itself an
    /// `EnumSet` over an equally sized domain its words are copied directly; the new
    /// set never shares storage with its source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_enum_set::{Domain, EnumSet};
    ///
    /// let domain = Domain::new(["a", "b", "c"]).unwrap();
    /// let source = EnumSet::of(&domain, &["b"]);
    ///
    /// let mut copy = EnumSet::of(&domain, &source);
    /// copy.add("c");
    ///
    /// assert_eq!(source.len(), 1);
    /// assert_eq!(copy.len(), 2);
    /// ```
    pub fn of<M>(domain: &Domain<T>, elements: &M) -> Self
    where
        M: Members<T> + ?Sized,
    {
        let mut set = Self::none_of(domain);
        set.add_all(elements);
        set
    }

    /// The packed form of `other` if it can be combined with `self` word by word.
    fn packed_operand<'a, M>(&self, other: &'a M) -> Option<&'a Repr>
    where
        M: Members<T> + ?Sized,
        T: 'a,
    {
        let packed = other.packed()?;
        if packed.domain.len() == self.domain.len() {
            Some(&packed.repr)
        } else {
            tracing::debug!(
                operand_len = packed.domain.len(),
                domain_len = self.domain.len(),
                "packed operand built over a different domain; using per-element path"
            );
            None
        }
    }
}

// === Queries ================================================================

impl<T> EnumSet<T> {
    /// The domain this set was built over.
    pub fn domain(&self) -> &Domain<T> {
        &self.domain
    }

    /// The backing store in use, fixed at construction.
    pub fn representation(&self) -> Representation {
        self.repr.kind()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.repr.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    fn symbol_at(&self, ordinal: usize) -> &T {
        &self.domain.symbols()[ordinal]
    }

    /// The member with the lowest ordinal.
    ///
    /// Returns [`EnumSetError::EmptyCollection`] if the set is empty.
    pub fn first(&self) -> Result<&T> {
        self.repr
            .first()
            .map(|ordinal| self.symbol_at(ordinal))
            .ok_or(EnumSetError::EmptyCollection)
    }

    /// The member with the highest ordinal.
    ///
    /// Returns [`EnumSetError::EmptyCollection`] if the set is empty.
    pub fn last(&self) -> Result<&T> {
        self.repr
            .last()
            .map(|ordinal| self.symbol_at(ordinal))
            .ok_or(EnumSetError::EmptyCollection)
    }

    /// The only member of the set.
    ///
    /// Returns [`EnumSetError::EmptyCollection`] for an empty set and
    /// [`EnumSetError::TooManyElements`] if there is more than one member.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_enum_set::{Domain, EnumSet, EnumSetError};
    ///
    /// let domain = Domain::new(["a", "b"]).unwrap();
    /// assert_eq!(EnumSet::of(&domain, &["a"]).single(), Ok(&"a"));
    /// assert_eq!(
    ///     EnumSet::all_of(&domain).single(),
    ///     Err(EnumSetError::TooManyElements)
    /// );
    /// ```
    pub fn single(&self) -> Result<&T> {
        self.repr.single().map(|ordinal| self.symbol_at(ordinal))
    }

    /// The `index`-th member in ascending ordinal order.
    ///
    /// Returns [`EnumSetError::IndexOutOfRange`] if `index >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_enum_set::{Domain, EnumSet, EnumSetError};
    ///
    /// let domain = Domain::new(["a", "b", "c", "d"]).unwrap();
    /// let set = EnumSet::of(&domain, &["d", "b"]);
    ///
    /// assert_eq!(set.element_at(1), Ok(&"d"));
    /// assert_eq!(
    ///     set.element_at(2),
    ///     Err(EnumSetError::IndexOutOfRange { index: 2, len: 2 })
    /// );
    /// ```
    pub fn element_at(&self, index: usize) -> Result<&T> {
        self.repr
            .element_at(index)
            .map(|ordinal| self.symbol_at(ordinal))
            .ok_or(EnumSetError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Iterates over the members in ascending ordinal order.
    ///
    /// The iterator works on a snapshot of the set's bits taken here.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.domain.symbols(), Positions::new(&self.repr))
    }
}

impl<T: Eq + Hash> EnumSet<T> {
    /// Returns true if `value` is a member. Values outside the domain are never members.
    pub fn contains(&self, value: &T) -> bool {
        self.domain
            .ordinal(value)
            .is_some_and(|ordinal| self.repr.contains(ordinal))
    }

    /// Returns true if every member of `other` is a member of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_enum_set::{Domain, EnumSet};
    ///
    /// let domain = Domain::new(["a", "b", "c"]).unwrap();
    /// let set = EnumSet::of(&domain, &["a", "b"]);
    ///
    /// assert!(set.contains_all(&EnumSet::of(&domain, &["b"])));
    /// assert!(set.contains_all(&["a"]));
    /// assert!(!set.contains_all(&vec!["a", "c"]));
    /// ```
    pub fn contains_all<M>(&self, other: &M) -> bool
    where
        M: Members<T> + ?Sized,
    {
        if let Some(result) = self
            .packed_operand(other)
            .and_then(|repr| self.repr.contains_all(repr))
        {
            return result;
        }
        other.members().all(|value| self.contains(value))
    }

    /// Returns true if `self` and `other` hold the same members.
    ///
    /// Two `EnumSet`s over the same domain are compared word by word; anything else is
    /// checked for containment in both directions, so repeated values in `other` do not
    /// matter.
    pub fn equals<M>(&self, other: &M) -> bool
    where
        M: Members<T> + ?Sized,
    {
        if let Some(packed) = other.packed() {
            if ptr::eq(self, packed) {
                return true;
            }
        }
        if let Some(repr) = self.packed_operand(other) {
            return self.repr == *repr;
        }
        other.members().all(|value| self.contains(value))
            && self.iter().all(|value| other.has_member(value))
    }
}

// === Mutation ===============================================================

impl<T> EnumSet<T> {
    /// Removes every member.
    pub fn clear(&mut self) {
        self.repr.clear();
    }

    /// Adds every symbol of the domain.
    pub fn fill(&mut self) {
        self.repr.fill(self.domain.len());
    }

    /// Keeps only the members for which `keep` returns true.
    pub fn retain_where<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let symbols = self.domain.symbols();
        self.repr.retain(|ordinal| keep(&symbols[ordinal]));
    }

    /// Removes every member for which `remove` returns true.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_enum_set::{Domain, EnumSet};
    ///
    /// let domain = Domain::new(1..=6u32).unwrap();
    /// let mut set = EnumSet::all_of(&domain);
    /// set.remove_where(|n| n % 2 == 0);
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
    /// ```
    pub fn remove_where<F>(&mut self, mut remove: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.retain_where(|value| !remove(value));
    }
}

impl<T: Eq + Hash> EnumSet<T> {
    /// Adds `value`, returning true if it was not already a member.
    ///
    /// Values outside the domain are ignored and return false.
    pub fn add<Q: Borrow<T>>(&mut self, value: Q) -> bool {
        match self.domain.ordinal(value.borrow()) {
            Some(ordinal) => self.repr.add(ordinal),
            None => false,
        }
    }

    /// Removes `value`, returning true if it was a member.
    pub fn remove<Q: Borrow<T>>(&mut self, value: Q) -> bool {
        match self.domain.ordinal(value.borrow()) {
            Some(ordinal) => self.repr.remove(ordinal),
            None => false,
        }
    }

    /// Adds every member of `other`.
    pub fn add_all<M>(&mut self, other: &M)
    where
        M: Members<T> + ?Sized,
    {
        if let Some(repr) = self.packed_operand(other) {
            if self.repr.union_assign(repr) {
                return;
            }
        }
        for value in other.members() {
            self.add(value);
        }
    }

    /// Removes every member of `other`.
    pub fn remove_all<M>(&mut self, other: &M)
    where
        M: Members<T> + ?Sized,
    {
        if let Some(repr) = self.packed_operand(other) {
            if self.repr.difference_assign(repr) {
                return;
            }
        }
        for value in other.members() {
            self.remove(value);
        }
    }

    /// Keeps only the members that are also members of `other` (in-place intersection).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_enum_set::{Domain, EnumSet};
    ///
    /// let domain = Domain::new(["a", "b", "c"]).unwrap();
    /// let mut set = EnumSet::of(&domain, &["a", "b"]);
    /// set.retain_all(&EnumSet::of(&domain, &["b", "c"]));
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec!["b"]);
    /// ```
    pub fn retain_all<M>(&mut self, other: &M)
    where
        M: Members<T> + ?Sized,
    {
        if let Some(repr) = self.packed_operand(other) {
            if self.repr.intersection_assign(repr) {
                return;
            }
        }
        self.retain_where(|value| other.has_member(value));
    }
}

// === Set algebra ============================================================

impl<T> EnumSet<T> {
    /// A new set holding every domain symbol that is not a member of `self`.
    pub fn complement(&self) -> Self {
        self.with_repr(self.repr.complement(self.domain.len()))
    }
}

impl<T: Eq + Hash> EnumSet<T> {
    /// A new set holding the members of either operand.
    pub fn union<M>(&self, other: &M) -> Self
    where
        M: Members<T> + ?Sized,
    {
        if let Some(repr) = self
            .packed_operand(other)
            .and_then(|repr| self.repr.union(repr))
        {
            return self.with_repr(repr);
        }
        let mut result = self.clone();
        for value in other.members() {
            result.add(value);
        }
        result
    }

    /// A new set holding the members common to both operands.
    pub fn intersection<M>(&self, other: &M) -> Self
    where
        M: Members<T> + ?Sized,
    {
        if let Some(repr) = self
            .packed_operand(other)
            .and_then(|repr| self.repr.intersection(repr))
        {
            return self.with_repr(repr);
        }
        let mut result = self.clone();
        result.retain_where(|value| other.has_member(value));
        result
    }

    /// A new set holding the members of `self` that are not members of `other`.
    pub fn difference<M>(&self, other: &M) -> Self
    where
        M: Members<T> + ?Sized,
    {
        if let Some(repr) = self
            .packed_operand(other)
            .and_then(|repr| self.repr.difference(repr))
        {
            return self.with_repr(repr);
        }
        let mut result = self.clone();
        result.retain_where(|value| !other.has_member(value));
        result
    }
}

// === Enumerable shortcuts ===================================================

impl<E: Enumerable + Clone> EnumSet<E> {
    /// An empty set over every value of `E`.
    pub fn empty() -> Self {
        Self::none_of(&Domain::of_enum())
    }

    /// A set holding every value of `E`.
    pub fn all() -> Self {
        Self::all_of(&Domain::of_enum())
    }
}

impl<E: Enumerable + Clone> Default for EnumSet<E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<E: Enumerable + Clone + Eq + Hash> FromIterator<E> for EnumSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

// === Trait impls ============================================================

impl<T: Eq + Hash> Extend<T> for EnumSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a, T: Eq + Hash> Extend<&'a T> for EnumSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Eq + Hash> PartialEq for EnumSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Eq + Hash> Eq for EnumSet<T> {}

impl<T: fmt::Debug> fmt::Debug for EnumSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a EnumSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> IntoIterator for EnumSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let positions = Positions::new(&self.repr);
        IntoIter::new(self.domain, positions)
    }
}

impl<T: Eq + Hash> BitOr<&EnumSet<T>> for &EnumSet<T> {
    type Output = EnumSet<T>;

    fn bitor(self, rhs: &EnumSet<T>) -> EnumSet<T> {
        self.union(rhs)
    }
}

impl<T: Eq + Hash> BitAnd<&EnumSet<T>> for &EnumSet<T> {
    type Output = EnumSet<T>;

    fn bitand(self, rhs: &EnumSet<T>) -> EnumSet<T> {
        self.intersection(rhs)
    }
}

impl<T: Eq + Hash> Sub<&EnumSet<T>> for &EnumSet<T> {
    type Output = EnumSet<T>;

    fn sub(self, rhs: &EnumSet<T>) -> EnumSet<T> {
        self.difference(rhs)
    }
}

impl<T> Not for &EnumSet<T> {
    type Output = EnumSet<T>;

    fn not(self) -> EnumSet<T> {
        self.complement()
    }
}

impl<T: Eq + Hash> BitOrAssign<&EnumSet<T>> for EnumSet<T> {
    fn bitor_assign(&mut self, rhs: &EnumSet<T>) {
        self.add_all(rhs);
    }
}

impl<T: Eq + Hash> BitAndAssign<&EnumSet<T>> for EnumSet<T> {
    fn bitand_assign(&mut self, rhs: &EnumSet<T>) {
        self.retain_all(rhs);
    }
}

impl<T: Eq + Hash> SubAssign<&EnumSet<T>> for EnumSet<T> {
    fn sub_assign(&mut self, rhs: &EnumSet<T>) {
        self.remove_all(rhs);
    }
}
