//! Multi-word storage for domains larger than [`WORD_BITS`](crate::bits::WORD_BITS).

use crate::{
    bits::{
        highest_set_bit_ordinal, isolated_bit_ordinal, locate, lowest_bit, nth_set_bit_from_low,
        popcount, tail_mask, word_count, Word, WORD_BITS,
    },
    error::{EnumSetError, Result},
};

/// Ordinal `i` lives in `words[i / WORD_BITS]` at bit `i % WORD_BITS`.
///
/// The unused high bits of the last word are always zero and `len` always equals the
/// popcount of `words`; every mutation below keeps both true.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Wide {
    words: Box<[Word]>,
    len: usize,
}

impl Wide {
    pub(crate) fn empty(domain_len: usize) -> Self {
        Self {
            words: vec![0; word_count(domain_len)].into_boxed_slice(),
            len: 0,
        }
    }

    pub(crate) fn full(domain_len: usize) -> Self {
        let mut set = Self::empty(domain_len);
        set.fill(domain_len);
        set
    }

    pub(crate) fn words(&self) -> &[Word] {
        &self.words
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Both sets were built for the same number of words.
    pub(crate) fn same_shape(&self, other: &Self) -> bool {
        self.words.len() == other.words.len()
    }

    pub(crate) fn contains(&self, ordinal: usize) -> bool {
        let (index, bit) = locate(ordinal);
        self.words.get(index).is_some_and(|word| word & bit != 0)
    }

    pub(crate) fn add(&mut self, ordinal: usize) -> bool {
        let (index, bit) = locate(ordinal);
        let word = &mut self.words[index];
        if *word & bit != 0 {
            return false;
        }
        *word |= bit;
        self.len += 1;
        true
    }

    pub(crate) fn remove(&mut self, ordinal: usize) -> bool {
        let (index, bit) = locate(ordinal);
        match self.words.get_mut(index) {
            Some(word) if *word & bit != 0 => {
                *word &= !bit;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn contains_all(&self, other: &Self) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .all(|(mine, theirs)| !mine & theirs == 0)
    }

    pub(crate) fn union(&self, other: &Self) -> Self {
        self.combine(other, |mine, theirs| mine | theirs)
    }

    pub(crate) fn intersection(&self, other: &Self) -> Self {
        self.combine(other, |mine, theirs| mine & theirs)
    }

    pub(crate) fn difference(&self, other: &Self) -> Self {
        self.combine(other, |mine, theirs| mine & (mine ^ theirs))
    }

    pub(crate) fn union_assign(&mut self, other: &Self) {
        self.combine_assign(other, |mine, theirs| mine | theirs);
    }

    pub(crate) fn intersection_assign(&mut self, other: &Self) {
        self.combine_assign(other, |mine, theirs| mine & theirs);
    }

    pub(crate) fn difference_assign(&mut self, other: &Self) {
        self.combine_assign(other, |mine, theirs| mine & !theirs);
    }

    /// Applies `op` word by word, counting the result's members in the same pass.
    fn combine(&self, other: &Self, op: impl Fn(Word, Word) -> Word) -> Self {
        debug_assert!(self.same_shape(other));
        let mut len = 0;
        let words = self
            .words
            .iter()
            .zip(other.words.iter())
            .map(|(&mine, &theirs)| {
                let word = op(mine, theirs);
                len += popcount(word);
                word
            })
            .collect();
        Self { words, len }
    }

    fn combine_assign(&mut self, other: &Self, op: impl Fn(Word, Word) -> Word) {
        debug_assert!(self.same_shape(other));
        let mut len = 0;
        for (mine, &theirs) in self.words.iter_mut().zip(other.words.iter()) {
            *mine = op(*mine, theirs);
            len += popcount(*mine);
        }
        self.len = len;
    }

    pub(crate) fn complement(&self, domain_len: usize) -> Self {
        let mut words: Box<[Word]> = self.words.iter().map(|word| !word).collect();
        if let Some(last) = words.last_mut() {
            *last &= tail_mask(domain_len);
        }
        Self {
            words,
            len: domain_len - self.len,
        }
    }

    pub(crate) fn fill(&mut self, domain_len: usize) {
        self.words.fill(Word::MAX);
        if let Some(last) = self.words.last_mut() {
            *last = tail_mask(domain_len);
        }
        self.len = domain_len;
    }

    pub(crate) fn clear(&mut self) {
        self.words.fill(0);
        self.len = 0;
    }

    /// Ordinal of the `index`-th member in ascending order.
    pub(crate) fn element_at(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        let mut skipped = 0;
        for (word_index, &word) in self.words.iter().enumerate() {
            let count = popcount(word);
            if skipped + count > index {
                let bit = nth_set_bit_from_low(word, index - skipped);
                return Some(word_index * WORD_BITS + isolated_bit_ordinal(bit));
            }
            skipped += count;
        }
        None
    }

    pub(crate) fn first(&self) -> Option<usize> {
        let index = self.words.iter().position(|&word| word != 0)?;
        Some(index * WORD_BITS + isolated_bit_ordinal(lowest_bit(self.words[index])))
    }

    pub(crate) fn last(&self) -> Option<usize> {
        let index = self.words.iter().rposition(|&word| word != 0)?;
        Some(index * WORD_BITS + highest_set_bit_ordinal(self.words[index]))
    }

    pub(crate) fn single(&self) -> Result<usize> {
        match self.len {
            0 => Err(EnumSetError::EmptyCollection),
            1 => self.first().ok_or(EnumSetError::EmptyCollection),
            _ => Err(EnumSetError::TooManyElements),
        }
    }

    /// Keeps only the members for which `keep` returns true.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(usize) -> bool) {
        for (word_index, word) in self.words.iter_mut().enumerate() {
            let mut remaining = *word;
            while remaining != 0 {
                let bit = lowest_bit(remaining);
                remaining ^= bit;
                if !keep(word_index * WORD_BITS + isolated_bit_ordinal(bit)) {
                    *word &= !bit;
                    self.len -= 1;
                }
            }
        }
    }
}
