//! Common trait for anything an [`EnumSet`] can be combined with.
//!
//! [`Members`] is the single place where an operand is asked whether it is itself a
//! packed set. [`EnumSet`] answers yes and unlocks the word-level fast paths; every
//! other collection answers no and is handled one element at a time.

use std::{
    collections::{btree_set, hash_set, BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
    slice,
};

use crate::{iter::Iter, set::EnumSet};

/// A read-only view of a collection's members, used as the operand of set algebra.
///
/// Members may repeat; [`member_count`] counts every occurrence.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use saturn_enum_set::{Domain, EnumSet, Members};
///
/// fn shared<M: Members<u8> + ?Sized>(set: &EnumSet<u8>, other: &M) -> usize {
///     set.intersection(other).len()
/// }
///
/// let domain = Domain::new(0..10u8).unwrap();
/// let set = EnumSet::of(&domain, &[1, 2, 3]);
///
/// assert_eq!(shared(&set, &BTreeSet::from([2, 3, 4])), 2);
/// assert_eq!(shared(&set, &vec![3, 9]), 1);
/// assert_eq!(shared(&set, &EnumSet::all_of(&domain)), 3);
/// ```
///
/// [`member_count`]: Members::member_count
pub trait Members<T> {
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Iterates over every member.
    fn members(&self) -> Self::Iter<'_>;

    /// Number of members.
    fn member_count(&self) -> usize;

    /// Returns true if `value` is a member.
    fn has_member(&self, value: &T) -> bool;

    /// The operand as a packed set, if it is one.
    fn packed(&self) -> Option<&EnumSet<T>> {
        None
    }
}

impl<T: Eq + Hash> Members<T> for EnumSet<T> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn members(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn member_count(&self) -> usize {
        self.len()
    }

    fn has_member(&self, value: &T) -> bool {
        self.contains(value)
    }

    fn packed(&self) -> Option<&EnumSet<T>> {
        Some(self)
    }
}

impl<T: PartialEq> Members<T> for [T] {
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a, T: 'a;

    fn members(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn member_count(&self) -> usize {
        self.len()
    }

    fn has_member(&self, value: &T) -> bool {
        self.contains(value)
    }
}

impl<T: PartialEq, const N: usize> Members<T> for [T; N] {
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a, T: 'a;

    fn members(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn member_count(&self) -> usize {
        N
    }

    fn has_member(&self, value: &T) -> bool {
        self.contains(value)
    }
}

impl<T: PartialEq> Members<T> for Vec<T> {
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a, T: 'a;

    fn members(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn member_count(&self) -> usize {
        self.len()
    }

    fn has_member(&self, value: &T) -> bool {
        self.contains(value)
    }
}

impl<T: Eq + Hash, S: BuildHasher> Members<T> for HashSet<T, S> {
    type Iter<'a> = hash_set::Iter<'a, T> where Self: 'a, T: 'a;

    fn members(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn member_count(&self) -> usize {
        self.len()
    }

    fn has_member(&self, value: &T) -> bool {
        self.contains(value)
    }
}

impl<T: Ord> Members<T> for BTreeSet<T> {
    type Iter<'a> = btree_set::Iter<'a, T> where Self: 'a, T: 'a;

    fn members(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn member_count(&self) -> usize {
        self.len()
    }

    fn has_member(&self, value: &T) -> bool {
        self.contains(value)
    }
}
