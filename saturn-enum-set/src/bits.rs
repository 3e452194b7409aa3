//! Word-level bit primitives shared by both set representations.
//!
//! Every function here is pure and operates on a single [`Word`]. The word width is
//! fixed by [`WORD_BITS`] rather than taken from the host's native integer size, so a
//! domain that fits a compact set on one target fits it on every target.

/// The packed storage unit used by every set.
pub type Word = u64;

/// Number of usable bits in a [`Word`].
///
/// No bit is reserved: isolating the lowest set bit uses [`u64::wrapping_neg`]
/// instead of a signed negation, so all 64 positions can hold a member.
pub const WORD_BITS: usize = Word::BITS as usize;

/// Number of set bits in `word`.
#[inline]
pub fn popcount(word: Word) -> usize {
    word.count_ones() as usize
}

/// Isolates the lowest set bit of `word` (`x & -x`). Returns `0` for `0`.
#[inline]
pub fn lowest_bit(word: Word) -> Word {
    word & word.wrapping_neg()
}

/// Zero-based position of the single bit set in `bit`.
///
/// `bit` must have exactly one bit set, as produced by [`lowest_bit`] or
/// [`nth_set_bit_from_low`]. Any other input gives a meaningless position.
#[inline]
pub fn isolated_bit_ordinal(bit: Word) -> usize {
    debug_assert!(bit.is_power_of_two(), "expected an isolated bit, got {bit:#x}");
    bit.trailing_zeros() as usize
}

/// Returns the isolated `(n + 1)`-th set bit of `word`, counting from the lowest.
///
/// Clears the lowest `n` set bits one at a time and then isolates what remains at
/// the bottom, so the cost is O(n). Returns `0` when `word` has `n` or fewer set
/// bits.
///
/// # Examples
///
/// ```rust
/// use saturn_enum_set::bits::nth_set_bit_from_low;
///
/// assert_eq!(nth_set_bit_from_low(0b1011_0100, 0), 0b0000_0100);
/// assert_eq!(nth_set_bit_from_low(0b1011_0100, 2), 0b0010_0000);
/// assert_eq!(nth_set_bit_from_low(0b1011_0100, 4), 0);
/// ```
#[inline]
pub fn nth_set_bit_from_low(mut word: Word, n: usize) -> Word {
    for _ in 0..n {
        if word == 0 {
            break;
        }
        word &= word - 1;
    }
    lowest_bit(word)
}

/// Zero-based position of the highest set bit. `word` must be non-zero.
#[inline]
pub fn highest_set_bit_ordinal(word: Word) -> usize {
    debug_assert_ne!(word, 0);
    WORD_BITS - 1 - word.leading_zeros() as usize
}

/// A word with the lowest `bits` bits set. `bits` may be anything in `0..=WORD_BITS`.
#[inline]
pub fn low_mask(bits: usize) -> Word {
    debug_assert!(bits <= WORD_BITS);
    if bits >= WORD_BITS {
        Word::MAX
    } else {
        (1 << bits) - 1
    }
}

/// Mask of the bits in use in the last word of a domain of `len` symbols.
///
/// A domain whose length is an exact multiple of [`WORD_BITS`] uses the whole
/// last word.
#[inline]
pub fn tail_mask(len: usize) -> Word {
    match len % WORD_BITS {
        0 if len > 0 => Word::MAX,
        rem => low_mask(rem),
    }
}

/// Number of words needed to hold `len` bits.
#[inline]
pub fn word_count(len: usize) -> usize {
    len.div_ceil(WORD_BITS)
}

/// Splits an ordinal into its word index and the single-bit mask inside that word.
#[inline]
pub fn locate(ordinal: usize) -> (usize, Word) {
    (ordinal / WORD_BITS, 1 << (ordinal % WORD_BITS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_bits_is_explicit() {
        assert_eq!(WORD_BITS, 64);
    }

    #[test]
    fn test_popcount() {
        assert_eq!(popcount(0), 0);
        assert_eq!(popcount(0b1011), 3);
        assert_eq!(popcount(Word::MAX), 64);
    }

    #[test]
    fn test_lowest_bit() {
        assert_eq!(lowest_bit(0), 0);
        assert_eq!(lowest_bit(0b1011_0000), 0b1_0000);
        assert_eq!(lowest_bit(1 << 63), 1 << 63);
    }

    #[test]
    fn test_isolated_bit_ordinal() {
        for position in 0..WORD_BITS {
            assert_eq!(isolated_bit_ordinal(1 << position), position);
        }
    }

    #[test]
    fn test_nth_set_bit_from_low_walks_every_bit() {
        let word: Word = (1 << 3) | (1 << 17) | (1 << 40) | (1 << 63);
        let positions: Vec<_> = (0..4)
            .map(|n| isolated_bit_ordinal(nth_set_bit_from_low(word, n)))
            .collect();
        assert_eq!(positions, vec![3, 17, 40, 63]);
        assert_eq!(nth_set_bit_from_low(word, 4), 0);
        assert_eq!(nth_set_bit_from_low(0, 0), 0);
    }

    #[test]
    fn test_highest_set_bit_ordinal() {
        assert_eq!(highest_set_bit_ordinal(1), 0);
        assert_eq!(highest_set_bit_ordinal(0b1010), 3);
        assert_eq!(highest_set_bit_ordinal(Word::MAX), 63);
    }

    #[test]
    fn test_masks() {
        assert_eq!(low_mask(0), 0);
        assert_eq!(low_mask(5), 0b1_1111);
        assert_eq!(low_mask(64), Word::MAX);

        assert_eq!(tail_mask(0), 0);
        assert_eq!(tail_mask(100), low_mask(36));
        assert_eq!(tail_mask(128), Word::MAX);
        assert_eq!(tail_mask(64), Word::MAX);
    }

    #[test]
    fn test_word_count_and_locate() {
        assert_eq!(word_count(0), 0);
        assert_eq!(word_count(64), 1);
        assert_eq!(word_count(65), 2);
        assert_eq!(word_count(100), 2);

        assert_eq!(locate(0), (0, 1));
        assert_eq!(locate(63), (0, 1 << 63));
        assert_eq!(locate(99), (1, 1 << 35));
    }
}
