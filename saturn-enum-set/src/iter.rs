//! Positional iterators over the members of an [`EnumSet`](crate::EnumSet).
//!
//! An iterator copies the set's words when it is created and walks that snapshot by
//! repeatedly isolating and clearing the lowest remaining bit, so members come out in
//! ascending ordinal order. It never looks at the live set again.

use std::iter::FusedIterator;

use crate::{
    bits::{isolated_bit_ordinal, lowest_bit, Word, WORD_BITS},
    domain::Domain,
    repr::Repr,
};

#[derive(Clone, Debug)]
struct CompactCursor {
    remaining: Word,
}

impl CompactCursor {
    fn move_next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let bit = lowest_bit(self.remaining);
        self.remaining ^= bit;
        Some(isolated_bit_ordinal(bit))
    }
}

#[derive(Clone, Debug)]
struct WideCursor {
    words: Box<[Word]>,
    index: usize,
    remaining: Word,
}

impl WideCursor {
    fn move_next(&mut self) -> Option<usize> {
        while self.remaining == 0 {
            if self.index + 1 >= self.words.len() {
                return None;
            }
            self.index += 1;
            self.remaining = self.words[self.index];
        }
        let bit = lowest_bit(self.remaining);
        self.remaining ^= bit;
        Some(self.index * WORD_BITS + isolated_bit_ordinal(bit))
    }
}

#[derive(Clone, Debug)]
enum Cursor {
    Compact(CompactCursor),
    Wide(WideCursor),
}

/// Snapshot of a set's bits plus the two-state "not started / in progress" machine.
#[derive(Clone, Debug)]
pub(crate) struct Positions {
    cursor: Cursor,
    current: Option<usize>,
    left: usize,
}

impl Positions {
    pub(crate) fn new(repr: &Repr) -> Self {
        let cursor = match repr {
            Repr::Compact(set) => Cursor::Compact(CompactCursor {
                remaining: set.word(),
            }),
            Repr::Wide(set) => {
                let words: Box<[Word]> = set.words().into();
                let remaining = words.first().copied().unwrap_or(0);
                Cursor::Wide(WideCursor {
                    words,
                    index: 0,
                    remaining,
                })
            }
        };
        Self {
            cursor,
            current: None,
            left: repr.len(),
        }
    }

    /// Advances to the next member. Once this returns false it keeps returning false.
    pub(crate) fn move_next(&mut self) -> bool {
        let next = match &mut self.cursor {
            Cursor::Compact(cursor) => cursor.move_next(),
            Cursor::Wide(cursor) => cursor.move_next(),
        };
        self.current = next;
        if next.is_some() {
            self.left -= 1;
        }
        next.is_some()
    }

    /// Ordinal of the current member; `None` before the first `move_next` and after
    /// the last one.
    pub(crate) fn current(&self) -> Option<usize> {
        self.current
    }

    pub(crate) fn left(&self) -> usize {
        self.left
    }
}

/// Borrowing iterator over an [`EnumSet`](crate::EnumSet), yielding `&T` in ordinal
/// order.
///
/// Besides [`Iterator`], it exposes the cursor directly through
/// [`move_next`](Iter::move_next) and [`current`](Iter::current).
///
/// # Examples
///
/// ```rust
/// use saturn_enum_set::{Domain, EnumSet};
///
/// let domain = Domain::new(["a", "b", "c", "d"]).unwrap();
/// let set = EnumSet::of(&domain, &["d", "b"]);
///
/// let mut iter = set.iter();
/// assert_eq!(iter.current(), None);
/// assert!(iter.move_next());
/// assert_eq!(iter.current(), Some(&"b"));
/// assert_eq!(iter.next(), Some(&"d"));
/// assert_eq!(iter.next(), None);
/// ```
#[derive(Debug)]
pub struct Iter<'a, T> {
    symbols: &'a [T],
    positions: Positions,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            symbols: self.symbols,
            positions: self.positions.clone(),
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(symbols: &'a [T], positions: Positions) -> Self {
        Self { symbols, positions }
    }

    /// Advances to the next member, returning false once the set is exhausted.
    pub fn move_next(&mut self) -> bool {
        self.positions.move_next()
    }

    /// The member the iterator is positioned on, or `None` if it has not started or
    /// has finished.
    pub fn current(&self) -> Option<&'a T> {
        let symbols = self.symbols;
        self.positions
            .current()
            .and_then(|ordinal| symbols.get(ordinal))
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.move_next() {
            self.current()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.positions.left();
        (left, Some(left))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over an [`EnumSet`](crate::EnumSet), yielding cloned symbols in
/// ordinal order.
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    domain: Domain<T>,
    positions: Positions,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(domain: Domain<T>, positions: Positions) -> Self {
        Self { domain, positions }
    }
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.positions.move_next() {
            return None;
        }
        self.positions
            .current()
            .and_then(|ordinal| self.domain.symbol(ordinal))
            .cloned()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.positions.left();
        (left, Some(left))
    }
}

impl<T: Clone> ExactSizeIterator for IntoIter<T> {}

impl<T: Clone> FusedIterator for IntoIter<T> {}
