//! Backing stores and the representation selector.
//!
//! [`Repr`] is chosen once from the domain length and never changes for the lifetime
//! of a set. Binary operations only take the word-level path when both operands use
//! the same variant with the same shape; otherwise they report `None` and the caller
//! falls back to per-element work.

mod compact;
mod wide;

pub(crate) use compact::Compact;
pub(crate) use wide::Wide;

use crate::{domain::Representation, error::Result};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Repr {
    Compact(Compact),
    Wide(Wide),
}

impl Repr {
    /// An empty store sized for a domain of `domain_len` symbols.
    pub(crate) fn empty(domain_len: usize) -> Self {
        let repr = match Representation::for_len(domain_len) {
            Representation::Compact => Repr::Compact(Compact::empty()),
            Representation::Wide => Repr::Wide(Wide::empty(domain_len)),
        };
        tracing::trace!(domain_len, representation = ?repr.kind(), "selected set representation");
        repr
    }

    /// A store holding every ordinal below `domain_len`.
    pub(crate) fn full(domain_len: usize) -> Self {
        let repr = match Representation::for_len(domain_len) {
            Representation::Compact => Repr::Compact(Compact::full(domain_len)),
            Representation::Wide => Repr::Wide(Wide::full(domain_len)),
        };
        tracing::trace!(domain_len, representation = ?repr.kind(), "selected set representation");
        repr
    }

    pub(crate) fn kind(&self) -> Representation {
        match self {
            Repr::Compact(_) => Representation::Compact,
            Repr::Wide(_) => Representation::Wide,
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Repr::Compact(set) => set.len(),
            Repr::Wide(set) => set.len(),
        }
    }

    pub(crate) fn contains(&self, ordinal: usize) -> bool {
        match self {
            Repr::Compact(set) => set.contains(ordinal),
            Repr::Wide(set) => set.contains(ordinal),
        }
    }

    pub(crate) fn add(&mut self, ordinal: usize) -> bool {
        match self {
            Repr::Compact(set) => set.add(ordinal),
            Repr::Wide(set) => set.add(ordinal),
        }
    }

    pub(crate) fn remove(&mut self, ordinal: usize) -> bool {
        match self {
            Repr::Compact(set) => set.remove(ordinal),
            Repr::Wide(set) => set.remove(ordinal),
        }
    }

    pub(crate) fn fill(&mut self, domain_len: usize) {
        match self {
            Repr::Compact(set) => set.fill(domain_len),
            Repr::Wide(set) => set.fill(domain_len),
        }
    }

    pub(crate) fn clear(&mut self) {
        match self {
            Repr::Compact(set) => set.clear(),
            Repr::Wide(set) => set.clear(),
        }
    }

    pub(crate) fn complement(&self, domain_len: usize) -> Self {
        match self {
            Repr::Compact(set) => Repr::Compact(set.complement(domain_len)),
            Repr::Wide(set) => Repr::Wide(set.complement(domain_len)),
        }
    }

    pub(crate) fn element_at(&self, index: usize) -> Option<usize> {
        match self {
            Repr::Compact(set) => set.element_at(index),
            Repr::Wide(set) => set.element_at(index),
        }
    }

    pub(crate) fn first(&self) -> Option<usize> {
        match self {
            Repr::Compact(set) => set.first(),
            Repr::Wide(set) => set.first(),
        }
    }

    pub(crate) fn last(&self) -> Option<usize> {
        match self {
            Repr::Compact(set) => set.last(),
            Repr::Wide(set) => set.last(),
        }
    }

    pub(crate) fn single(&self) -> Result<usize> {
        match self {
            Repr::Compact(set) => set.single(),
            Repr::Wide(set) => set.single(),
        }
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(usize) -> bool) {
        match self {
            Repr::Compact(set) => set.retain(keep),
            Repr::Wide(set) => set.retain(keep),
        }
    }

    // Word-level fast paths. `None` means the operands do not line up.

    pub(crate) fn contains_all(&self, other: &Repr) -> Option<bool> {
        match (self, other) {
            (Repr::Compact(mine), Repr::Compact(theirs)) => Some(mine.contains_all(theirs)),
            (Repr::Wide(mine), Repr::Wide(theirs)) if mine.same_shape(theirs) => {
                Some(mine.contains_all(theirs))
            }
            _ => None,
        }
    }

    pub(crate) fn union(&self, other: &Repr) -> Option<Repr> {
        match (self, other) {
            (Repr::Compact(mine), Repr::Compact(theirs)) => Some(Repr::Compact(mine.union(theirs))),
            (Repr::Wide(mine), Repr::Wide(theirs)) if mine.same_shape(theirs) => {
                Some(Repr::Wide(mine.union(theirs)))
            }
            _ => None,
        }
    }

    pub(crate) fn intersection(&self, other: &Repr) -> Option<Repr> {
        match (self, other) {
            (Repr::Compact(mine), Repr::Compact(theirs)) => {
                Some(Repr::Compact(mine.intersection(theirs)))
            }
            (Repr::Wide(mine), Repr::Wide(theirs)) if mine.same_shape(theirs) => {
                Some(Repr::Wide(mine.intersection(theirs)))
            }
            _ => None,
        }
    }

    pub(crate) fn difference(&self, other: &Repr) -> Option<Repr> {
        match (self, other) {
            (Repr::Compact(mine), Repr::Compact(theirs)) => {
                Some(Repr::Compact(mine.difference(theirs)))
            }
            (Repr::Wide(mine), Repr::Wide(theirs)) if mine.same_shape(theirs) => {
                Some(Repr::Wide(mine.difference(theirs)))
            }
            _ => None,
        }
    }

    /// In-place union. Returns false, leaving `self` untouched, if the operands do not
    /// line up.
    pub(crate) fn union_assign(&mut self, other: &Repr) -> bool {
        match (self, other) {
            (Repr::Compact(mine), Repr::Compact(theirs)) => *mine = mine.union(theirs),
            (Repr::Wide(mine), Repr::Wide(theirs)) if mine.same_shape(theirs) => {
                mine.union_assign(theirs)
            }
            _ => return false,
        }
        true
    }

    pub(crate) fn intersection_assign(&mut self, other: &Repr) -> bool {
        match (self, other) {
            (Repr::Compact(mine), Repr::Compact(theirs)) => *mine = mine.intersection(theirs),
            (Repr::Wide(mine), Repr::Wide(theirs)) if mine.same_shape(theirs) => {
                mine.intersection_assign(theirs)
            }
            _ => return false,
        }
        true
    }

    pub(crate) fn difference_assign(&mut self, other: &Repr) -> bool {
        match (self, other) {
            (Repr::Compact(mine), Repr::Compact(theirs)) => *mine = mine.difference(theirs),
            (Repr::Wide(mine), Repr::Wide(theirs)) if mine.same_shape(theirs) => {
                mine.difference_assign(theirs)
            }
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_picks_by_domain_len() {
        assert_eq!(Repr::empty(0).kind(), Representation::Compact);
        assert_eq!(Repr::empty(64).kind(), Representation::Compact);
        assert_eq!(Repr::empty(65).kind(), Representation::Wide);
        assert_eq!(Repr::empty(100).kind(), Representation::Wide);
    }

    #[test]
    fn test_full_matches_domain_len() {
        assert_eq!(Repr::full(5).len(), 5);
        assert_eq!(Repr::full(64).len(), 64);
        assert_eq!(Repr::full(100).len(), 100);
        assert!(!Repr::full(100).contains(100));
    }

    #[test]
    fn test_full_agrees_with_filling_an_empty_store() {
        for domain_len in [0, 1, 63, 64, 65, 100, 128] {
            let mut filled = Repr::empty(domain_len);
            filled.fill(domain_len);
            assert_eq!(Repr::full(domain_len), filled);
            assert_eq!(Repr::full(domain_len).kind(), filled.kind());
        }
    }

    #[test]
    fn test_mismatched_operands_have_no_fast_path() {
        let compact = Repr::full(10);
        let wide = Repr::full(100);
        let wider = Repr::full(200);

        assert_eq!(compact.union(&wide), None);
        assert_eq!(wide.intersection(&wider), None);
        assert_eq!(wide.contains_all(&compact), None);

        let mut target = wide.clone();
        assert!(!target.difference_assign(&wider));
        assert_eq!(target, wide);
    }

    #[test]
    fn test_in_place_fast_paths() {
        let mut set = Repr::empty(100);
        set.add(3);
        set.add(70);

        let mut other = Repr::empty(100);
        other.add(70);
        other.add(80);

        let mut union = set.clone();
        assert!(union.union_assign(&other));
        assert_eq!(union.len(), 3);

        let mut intersection = set.clone();
        assert!(intersection.intersection_assign(&other));
        assert_eq!(intersection.first(), Some(70));
        assert_eq!(intersection.len(), 1);

        let mut difference = set;
        assert!(difference.difference_assign(&other));
        assert_eq!(difference.single(), Ok(3));
    }
}
