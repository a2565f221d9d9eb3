//! The `Entry` API: the idiomatic replacement for the original's
//! `add_or_find`/`add_raw` out-parameter pattern, modeled on
//! `std::collections::HashMap`'s entry API.

use std::hash::{BuildHasher, Hash};

use super::Dict;

/// A view into a single slot of a [`Dict`], obtained via [`Dict::entry`].
pub enum Entry<'a, K, V, S> {
    Occupied(OccupiedEntry<'a, K, V, S>),
    Vacant(VacantEntry<'a, K, V, S>),
}

impl<'a, K, V, S> Entry<'a, K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Ensures a value is present, inserting `default` if vacant.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(default),
        }
    }

    /// Like [`Entry::or_insert`], but the default is computed lazily.
    pub fn or_insert_with<F>(self, f: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(f()),
        }
    }

    /// Like [`Entry::or_insert_with`], but the closure sees the key.
    pub fn or_insert_with_key<F>(self, f: F) -> &'a mut V
    where
        F: FnOnce(&K) -> V,
    {
        match self {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => {
                let val = f(e.key());
                e.insert(val)
            }
        }
    }

    /// Ensures a value is present, using `V::default()` if vacant.
    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        match self {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(V::default()),
        }
    }

    /// Runs `f` against the value if occupied, then returns `self`
    /// unchanged so it can be chained into `or_insert`.
    pub fn and_modify<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        match self {
            Entry::Occupied(mut e) => {
                f(e.get_mut());
                Entry::Occupied(e)
            }
            Entry::Vacant(e) => Entry::Vacant(e),
        }
    }
}

/// An occupied slot: the key was already present when [`Dict::entry`]
/// was called.
pub struct OccupiedEntry<'a, K, V, S> {
    dict: &'a mut Dict<K, V, S>,
    key: K,
}

impl<'a, K, V, S> OccupiedEntry<'a, K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub(super) fn new(dict: &'a mut Dict<K, V, S>, key: K) -> Self {
        Self { dict, key }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn get(&self) -> &V {
        self.dict
            .get(&self.key)
            .expect("OccupiedEntry always refers to a present key")
    }

    pub fn get_mut(&mut self) -> &mut V {
        self.dict.get_mut_existing(&self.key)
    }

    /// Consumes the entry, returning a reference that lives as long as
    /// the original `&mut Dict` borrow rather than just this entry.
    pub fn into_mut(self) -> &'a mut V {
        let OccupiedEntry { dict, key } = self;
        dict.get_mut_existing(&key)
    }

    /// Replaces the stored value, returning the old one.
    pub fn insert(&mut self, value: V) -> V {
        std::mem::replace(self.get_mut(), value)
    }

    /// Removes the entry, returning its value.
    pub fn remove(self) -> V {
        let OccupiedEntry { dict, key } = self;
        let (_, val) = dict.take_existing(&key);
        val
    }
}

/// A vacant slot: the key was absent when [`Dict::entry`] was called.
pub struct VacantEntry<'a, K, V, S> {
    dict: &'a mut Dict<K, V, S>,
    key: K,
}

impl<'a, K, V, S> VacantEntry<'a, K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub(super) fn new(dict: &'a mut Dict<K, V, S>, key: K) -> Self {
        Self { dict, key }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn into_key(self) -> K {
        self.key
    }

    /// Inserts `value` at this key and returns a reference tied to the
    /// original `&mut Dict` borrow.
    pub fn insert(self, value: V) -> &'a mut V {
        let VacantEntry { dict, key } = self;
        dict.insert_vacant(key, value)
    }
}
