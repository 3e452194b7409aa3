//! Single-word storage for domains of at most [`WORD_BITS`] symbols.

use crate::{
    bits::{
        highest_set_bit_ordinal, isolated_bit_ordinal, low_mask, lowest_bit, nth_set_bit_from_low,
        popcount, Word, WORD_BITS,
    },
    error::{EnumSetError, Result},
};

/// Bit `i` of `word` is set iff ordinal `i` is a member. Bits at or above the domain
/// length are always zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub(crate) struct Compact {
    word: Word,
}

impl Compact {
    pub(crate) fn empty() -> Self {
        Self { word: 0 }
    }

    pub(crate) fn full(domain_len: usize) -> Self {
        Self {
            word: low_mask(domain_len),
        }
    }

    pub(crate) fn word(&self) -> Word {
        self.word
    }

    pub(crate) fn len(&self) -> usize {
        popcount(self.word)
    }

    pub(crate) fn contains(&self, ordinal: usize) -> bool {
        ordinal < WORD_BITS && self.word & (1 << ordinal) != 0
    }

    /// Sets the bit for `ordinal`; false if it was already set.
    pub(crate) fn add(&mut self, ordinal: usize) -> bool {
        debug_assert!(ordinal < WORD_BITS);
        let bit: Word = 1 << ordinal;
        if self.word & bit != 0 {
            return false;
        }
        self.word |= bit;
        true
    }

    /// Clears the bit for `ordinal`; false if it was not set.
    pub(crate) fn remove(&mut self, ordinal: usize) -> bool {
        if !self.contains(ordinal) {
            return false;
        }
        self.word &= !(1 << ordinal);
        true
    }

    pub(crate) fn contains_all(&self, other: &Self) -> bool {
        !self.word & other.word == 0
    }

    pub(crate) fn union(&self, other: &Self) -> Self {
        Self {
            word: self.word | other.word,
        }
    }

    pub(crate) fn intersection(&self, other: &Self) -> Self {
        Self {
            word: self.word & other.word,
        }
    }

    pub(crate) fn difference(&self, other: &Self) -> Self {
        Self {
            word: self.word & (self.word ^ other.word),
        }
    }

    pub(crate) fn complement(&self, domain_len: usize) -> Self {
        Self {
            word: !self.word & low_mask(domain_len),
        }
    }

    pub(crate) fn fill(&mut self, domain_len: usize) {
        self.word = low_mask(domain_len);
    }

    pub(crate) fn clear(&mut self) {
        self.word = 0;
    }

    /// Ordinal of the `index`-th member in ascending order.
    pub(crate) fn element_at(&self, index: usize) -> Option<usize> {
        if index >= self.len() {
            return None;
        }
        Some(isolated_bit_ordinal(nth_set_bit_from_low(self.word, index)))
    }

    pub(crate) fn first(&self) -> Option<usize> {
        (self.word != 0).then(|| isolated_bit_ordinal(lowest_bit(self.word)))
    }

    pub(crate) fn last(&self) -> Option<usize> {
        (self.word != 0).then(|| highest_set_bit_ordinal(self.word))
    }

    pub(crate) fn single(&self) -> Result<usize> {
        if self.word == 0 {
            Err(EnumSetError::EmptyCollection)
        } else if self.word & (self.word - 1) != 0 {
            Err(EnumSetError::TooManyElements)
        } else {
            Ok(isolated_bit_ordinal(self.word))
        }
    }

    /// Keeps only the members for which `keep` returns true.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(usize) -> bool) {
        let mut remaining = self.word;
        while remaining != 0 {
            let bit = lowest_bit(remaining);
            remaining ^= bit;
            if !keep(isolated_bit_ordinal(bit)) {
                self.word &= !bit;
            }
        }
    }
}
