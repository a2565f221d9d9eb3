//! The bucket array backing one side of a [`Dict`](super::Dict)'s two-slot
//! hash table pair.
//!
//! Chains are singly linked and deletion walks them with a trailing-prev
//! cursor; this is a deliberate space decision carried from the original
//! design and should not be "improved" into a doubly linked chain.

/// One link in a bucket's collision chain.
pub(super) struct DictEntry<K, V> {
    pub(super) key: K,
    pub(super) val: V,
    pub(super) next: Option<Box<DictEntry<K, V>>>,
}

/// One side of the two-slot table pair (`ht[0]` or `ht[1]`).
///
/// `size_mask` is only meaningful while `buckets` is nonempty; an
/// uninitialized table has `buckets.len() == 0` and `size_mask == 0`.
pub(super) struct HashTable<K, V> {
    pub(super) buckets: Vec<Option<Box<DictEntry<K, V>>>>,
    pub(super) size_mask: usize,
    pub(super) used: usize,
}

impl<K, V> HashTable<K, V> {
    /// The uninitialized table: no allocation, size 0.
    pub(super) fn empty() -> Self {
        Self {
            buckets: Vec::new(),
            size_mask: 0,
            used: 0,
        }
    }

    /// Allocates a table of exactly `capacity` buckets. `capacity` must
    /// already be a power of two (callers go through [`next_power`]).
    pub(super) fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity.is_power_of_two());
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, || None);
        Self {
            buckets,
            size_mask: capacity - 1,
            used: 0,
        }
    }

    pub(super) fn size(&self) -> usize {
        self.buckets.len()
    }
}

/// The least power of two that is `>= max(n, 4)`, saturating instead of
/// overflowing for absurd `n`.
pub(super) fn next_power(n: usize) -> usize {
    let n = n.max(4);
    if n.is_power_of_two() {
        return n;
    }
    n.checked_next_power_of_two()
        .unwrap_or(1usize << (usize::BITS - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_power_rounds_up_with_floor_of_four() {
        assert_eq!(next_power(0), 4);
        assert_eq!(next_power(1), 4);
        assert_eq!(next_power(4), 4);
        assert_eq!(next_power(5), 8);
        assert_eq!(next_power(1023), 1024);
        assert_eq!(next_power(1024), 1024);
    }

    #[test]
    fn next_power_saturates_instead_of_overflowing() {
        assert_eq!(next_power(usize::MAX), 1usize << (usize::BITS - 1));
    }
}
