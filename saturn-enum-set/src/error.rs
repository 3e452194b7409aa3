use thiserror::Error;

/// Errors surfaced by [`EnumSet`](crate::EnumSet) accessors and [`Domain`](crate::Domain)
/// construction.
///
/// The variants carry only plain data so the type stays `Copy` and can be matched on
/// directly by callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EnumSetError {
    /// `first`, `last` or `single` was called on a set with no members.
    #[error("the set contains no elements")]
    EmptyCollection,

    /// `single` was called on a set with more than one member.
    #[error("the set contains more than one element")]
    TooManyElements,

    /// `element_at` was called with an index at or past the set's length.
    #[error("index {index} is out of range for a set of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A domain listed the same symbol twice; `ordinal` is the position of the repeat.
    #[error("symbol at ordinal {ordinal} already appears earlier in the domain")]
    DuplicateSymbol { ordinal: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, EnumSetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        assert_eq!(
            EnumSetError::IndexOutOfRange { index: 7, len: 3 }.to_string(),
            "index 7 is out of range for a set of length 3"
        );
        assert_eq!(
            EnumSetError::DuplicateSymbol { ordinal: 2 }.to_string(),
            "symbol at ordinal 2 already appears earlier in the domain"
        );
        assert_eq!(
            EnumSetError::EmptyCollection.to_string(),
            "the set contains no elements"
        );
    }
}
