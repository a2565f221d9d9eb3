//! The two iterator flavors over [`Dict`](super::Dict): a borrow-checked
//! safe one and a fingerprint-checked unsafe one.

use std::{collections::hash_map::RandomState, hash::BuildHasher, marker::PhantomData};

use super::{table::DictEntry, Dict};

/// Borrows the dict for its lifetime, which forbids structural mutation
/// through that borrow at compile time and suppresses amortized rehash
/// for as long as it's alive.
pub struct Iter<'a, K, V, S = RandomState> {
    dict: &'a Dict<K, V, S>,
    table: usize,
    bucket_idx: usize,
    current: Option<&'a DictEntry<K, V>>,
    started: bool,
}

impl<'a, K, V, S> Iter<'a, K, V, S> {
    pub(super) fn new(dict: &'a Dict<K, V, S>) -> Self {
        Self {
            dict,
            table: 0,
            bucket_idx: 0,
            current: None,
            started: false,
        }
    }
}

impl<'a, K, V, S> Iterator for Iter<'a, K, V, S>
where
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            let counter = self.dict.active_safe_iterators();
            counter.set(counter.get() + 1);
        }

        loop {
            if let Some(entry) = self.current {
                self.current = entry.next.as_deref();
                return Some((&entry.key, &entry.val));
            }

            if self.bucket_idx >= self.dict.table_size(self.table) {
                if self.table == 0 && self.dict.is_rehashing() {
                    self.table = 1;
                    self.bucket_idx = 0;
                    continue;
                }
                return None;
            }

            self.current = self.dict.bucket_ref(self.table, self.bucket_idx);
            self.bucket_idx += 1;
        }
    }
}

impl<'a, K, V, S> Drop for Iter<'a, K, V, S> {
    fn drop(&mut self) {
        if self.started {
            let counter = self.dict.active_safe_iterators();
            counter.set(counter.get().saturating_sub(1));
        }
    }
}

/// Does not borrow the dict across calls — `next` takes it by reference
/// each time, so the caller may freely call `&mut self` methods on the
/// dict between iterations. This is the "logical borrow, enforced by
/// assertion rather than the type system" iterator from the original:
/// call [`IterUnsafe::finish`] exactly once when done, which panics if
/// anything structural changed (insert, remove, resize) since the first
/// `next` call.
///
/// Dropping without calling `finish` also panics: the contract must be
/// explicitly discharged, since `Drop` has no way to reach the dict to
/// check it itself.
pub struct IterUnsafe<K, V> {
    fingerprint: Option<u64>,
    table: usize,
    bucket_idx: usize,
    chain_pos: usize,
    verified: bool,
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<K, V> IterUnsafe<K, V> {
    pub(super) fn new() -> Self {
        Self {
            fingerprint: None,
            table: 0,
            bucket_idx: 0,
            chain_pos: 0,
            verified: false,
            _marker: PhantomData,
        }
    }

    pub fn next<'d, S>(&mut self, dict: &'d Dict<K, V, S>) -> Option<(&'d K, &'d V)>
    where
        S: BuildHasher,
    {
        if self.fingerprint.is_none() {
            self.fingerprint = Some(dict.fingerprint());
        }

        loop {
            if self.table > 1 {
                return None;
            }

            if self.bucket_idx >= dict.table_size(self.table) {
                if self.table == 0 && dict.is_rehashing() {
                    self.table = 1;
                    self.bucket_idx = 0;
                    self.chain_pos = 0;
                    continue;
                }
                return None;
            }

            let mut node = dict.bucket_ref(self.table, self.bucket_idx);
            for _ in 0..self.chain_pos {
                node = node.and_then(|e| e.next.as_deref());
            }

            match node {
                Some(entry) => {
                    self.chain_pos += 1;
                    return Some((&entry.key, &entry.val));
                }
                None => {
                    self.bucket_idx += 1;
                    self.chain_pos = 0;
                }
            }
        }
    }

    /// Validates that nothing structural changed the dict since the
    /// first `next` call. Panics on mismatch.
    pub fn finish<S>(mut self, dict: &Dict<K, V, S>)
    where
        S: BuildHasher,
    {
        self.verified = true;
        if let Some(expected) = self.fingerprint {
            let actual = dict.fingerprint();
            assert_eq!(
                expected, actual,
                "iter_unsafe contract violated: the dict was structurally mutated \
                 (insert/remove/resize) while an unsafe iterator was still live"
            );
        }
    }
}

impl<K, V> Drop for IterUnsafe<K, V> {
    fn drop(&mut self) {
        if self.fingerprint.is_some() && !self.verified {
            panic!(
                "IterUnsafe dropped without calling finish(); the iteration \
                 contract requires explicitly releasing it"
            );
        }
    }
}

/// Owned iteration, produced by `IntoIterator for Dict<K, V, S>`.
pub struct IntoIter<K, V> {
    inner: std::vec::IntoIter<(K, V)>,
}

impl<K, V> IntoIter<K, V> {
    pub(super) fn new(items: Vec<(K, V)>) -> Self {
        Self {
            inner: items.into_iter(),
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}
