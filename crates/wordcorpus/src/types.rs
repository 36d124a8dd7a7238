//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

use crate::errors::{CorpusError, CorpusResult};

/// A type that can be used as a word or label id.
///
/// These are constrained to be unsigned primitive integers;
/// such that the max id in a vocabulary is less than `T::max()`.
pub trait TokenType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// Convert a dense index into an id of type `T`.
///
/// ## Returns
/// `CorpusError::IdOverflow` if `index` does not fit in `T`.
pub fn try_id_from_index<T: TokenType>(index: usize) -> CorpusResult<T> {
    T::from_usize(index).ok_or(CorpusError::IdOverflow { size: index + 1 })
}

/// Convert an id back into a dense index.
///
/// Every [`TokenType`] id produced by this crate fits in a `usize`.
pub fn id_to_index<T: TokenType>(id: T) -> Option<usize> {
    id.to_usize()
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type WCHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type WCHashSet<V> = ahash::AHashSet<V>;
    } else {
        /// Type Alias for hash maps in this crate.
        pub type WCHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type WCHashSet<V> = std::collections::HashSet<V>;
    }
}

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::*;

    #[test]
    fn test_common_token_types() {
        struct IsToken<T: TokenType>(PhantomData<T>);

        let _: IsToken<u8>;
        let _: IsToken<u16>;
        let _: IsToken<u32>;
        let _: IsToken<u64>;
        let _: IsToken<usize>;
    }

    #[test]
    fn test_try_id_from_index() {
        assert_eq!(try_id_from_index::<u8>(255).unwrap(), 255u8);
        assert!(matches!(
            try_id_from_index::<u8>(256),
            Err(CorpusError::IdOverflow { size: 257 })
        ));
        assert_eq!(id_to_index(7u16), Some(7));
    }
}
