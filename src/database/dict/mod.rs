//! A chained hash table with incremental (step-wise) rehashing.
//!
//! Two bucket arrays (`ht[0]`, `ht[1]`) coexist while a resize is in
//! progress; `rehash_idx` tracks how far the migration from `ht[0]` into
//! `ht[1]` has gotten. Every mutating (and most reading) operation drives
//! one bucket's worth of migration (`lazy_rehash_step`) so growth never
//! costs one caller the whole bill.

pub mod entry;
mod iter;
mod table;

use std::{
    borrow::Borrow,
    collections::hash_map::RandomState,
    fmt,
    hash::{BuildHasher, Hash},
};

use table::{next_power, DictEntry, HashTable};

pub use self::{
    entry::{Entry, OccupiedEntry, VacantEntry},
    iter::{IntoIter, Iter, IterUnsafe},
};
use crate::{
    config::DictSettings,
    error::{DictError, DictResult},
};

const INITIAL_CAPACITY: usize = 4;
const DEFAULT_FORCE_RESIZE_RATIO: u64 = 5;

/// A chained hash table with incremental rehashing, a cursor-based scan,
/// and both a borrow-checked safe iterator and a fingerprint-checked
/// unsafe one.
///
/// `S` is the hasher builder, defaulting to [`RandomState`] the same way
/// `std::collections::HashMap` does; swap in a fixed-seed `BuildHasher`
/// for deterministic tests.
pub struct Dict<K, V, S = RandomState> {
    ht: [HashTable<K, V>; 2],
    rehash_idx: isize,
    active_safe_iterators: std::cell::Cell<usize>,
    hash_builder: S,
    initial_capacity: usize,
    resize_enabled: bool,
    force_resize_ratio: u64,
}

impl<K, V> Dict<K, V, RandomState>
where
    K: Eq + Hash,
{
    /// An empty dict with the compiled-in defaults: initial capacity 4,
    /// resizing enabled, force-resize ratio 5. Allocates nothing until
    /// the first insert.
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }

    /// Builds a dict from loaded [`DictSettings`], keeping the random
    /// per-process hasher.
    pub fn with_settings(settings: DictSettings) -> Self {
        let mut dict = Self::with_hasher(RandomState::new());
        dict.initial_capacity = next_power(settings.initial_capacity);
        dict.resize_enabled = settings.resize_enabled;
        dict.force_resize_ratio = settings.force_resize_ratio;
        dict
    }
}

impl<K, V> Default for Dict<K, V, RandomState>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> Dict<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// An empty dict using a caller-supplied hasher builder.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            ht: [HashTable::empty(), HashTable::empty()],
            rehash_idx: -1,
            active_safe_iterators: std::cell::Cell::new(0),
            hash_builder,
            initial_capacity: INITIAL_CAPACITY,
            resize_enabled: true,
            force_resize_ratio: DEFAULT_FORCE_RESIZE_RATIO,
        }
    }

    /// Number of key/value pairs currently stored.
    pub fn len(&self) -> usize {
        self.ht[0].used + self.ht[1].used
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` while an incremental rehash is in progress.
    pub fn is_rehashing(&self) -> bool {
        self.rehash_idx >= 0
    }

    /// The current migration cursor into `ht[0]`, or `None` when stable.
    ///
    /// Exposed so callers (and tests) can observe that the lazy rehash
    /// step did or didn't advance across a sequence of operations,
    /// without reaching into the table representation itself.
    pub fn rehash_progress(&self) -> Option<usize> {
        if self.rehash_idx >= 0 {
            Some(self.rehash_idx as usize)
        } else {
            None
        }
    }

    fn hash_of<Q>(&self, key: &Q) -> u64
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
    {
        self.hash_builder.hash_one(key)
    }

    fn active_tables(&self) -> &'static [usize] {
        if self.is_rehashing() {
            &[0, 1]
        } else {
            &[0]
        }
    }

    /// Shared lookup used by `get`, `get_mut`, `contains_key`, and the
    /// `Entry` API. Consults `ht[0]` first, then `ht[1]` while rehashing,
    /// matching the original's "new keys land only in ht[1]" rule.
    fn find_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_of(key);
        for &table_idx in self.active_tables() {
            let ht = &self.ht[table_idx];
            if ht.size() == 0 {
                continue;
            }
            let idx = (hash as usize) & ht.size_mask;
            let mut node = ht.buckets[idx].as_deref();
            while let Some(entry) = node {
                if entry.key.borrow() == key {
                    return Some((&entry.key, &entry.val));
                }
                node = entry.next.as_deref();
            }
        }
        None
    }

    fn find_entry_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_of(key);
        let tables: Vec<usize> = self.active_tables().to_vec();
        for table_idx in tables {
            let ht = &mut self.ht[table_idx];
            if ht.size() == 0 {
                continue;
            }
            let idx = (hash as usize) & ht.size_mask;
            let mut node = ht.buckets[idx].as_deref_mut();
            while let Some(entry) = node {
                if entry.key.borrow() == key {
                    return Some(&mut entry.val);
                }
                node = entry.next.as_deref_mut();
            }
        }
        None
    }

    /// Reads are pure `&self`: they do not drive `lazy_rehash_step`, since
    /// doing so would require `&mut self` and break the "multiple shared
    /// borrows into the same dict" contract this crate's callers rely on.
    /// The dict still converges on its own, one bucket at a time, driven
    /// by the `&mut self` operations below.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_entry(key).map(|(_, v)| v)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_entry(key).is_some()
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lazy_rehash_step();
        self.find_entry_mut(key)
    }

    /// Unconditional insert. Returns `true` if the key was previously
    /// absent, matching the "did this create a new entry" convention
    /// used across this crate's tests rather than `HashMap::insert`'s
    /// "return the old value" one (see [`Dict::replace`] for that).
    pub fn insert(&mut self, key: K, val: V) -> bool {
        self.replace(key, val).is_none()
    }

    /// Assigns `val` before dropping any previous value at `key`, so a
    /// refcounted value type never observes a moment where both the old
    /// and new value are simultaneously dropped. Returns the displaced
    /// value, or `None` if this was a fresh insert.
    pub fn replace(&mut self, key: K, val: V) -> Option<V> {
        self.lazy_rehash_step();
        if let Some(existing) = self.find_entry_mut(&key) {
            return Some(std::mem::replace(existing, val));
        }
        self.raw_insert(key, val);
        None
    }

    /// Inserts only if `key` is absent. Returns whether it was added.
    pub fn add(&mut self, key: K, val: V) -> bool {
        self.lazy_rehash_step();
        if self.find_entry(&key).is_some() {
            return false;
        }
        self.raw_insert(key, val);
        true
    }

    fn raw_insert(&mut self, key: K, val: V) -> &mut V {
        self.expand_if_needed();
        let hash = self.hash_of(&key);
        let table_idx = if self.is_rehashing() { 1 } else { 0 };
        let mask = self.ht[table_idx].size_mask;
        let idx = (hash as usize) & mask;
        let next = self.ht[table_idx].buckets[idx].take();
        let boxed = Box::new(DictEntry { key, val, next });
        self.ht[table_idx].buckets[idx] = Some(boxed);
        self.ht[table_idx].used += 1;
        self.ht[table_idx].buckets[idx]
            .as_mut()
            .map(|e| &mut e.val)
            .expect("just inserted")
    }

    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).is_some()
    }

    /// Mirrors `dictUnlink`/`dictFreeUnlinkedEntry`: detaches the entry
    /// and hands the owned pair back instead of dropping it in place.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lazy_rehash_step();
        let hash = self.hash_of(key);
        let tables: Vec<usize> = self.active_tables().to_vec();
        for table_idx in tables {
            if let Some(pair) = Self::remove_from_table(&mut self.ht[table_idx], hash, key) {
                return Some(pair);
            }
        }
        None
    }

    /// Singly linked chain removal via a trailing cursor; no recursion,
    /// so a deep chain cannot blow the stack.
    fn remove_from_table<Q>(ht: &mut HashTable<K, V>, hash: u64, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if ht.size() == 0 {
            return None;
        }
        let idx = (hash as usize) & ht.size_mask;
        let mut cursor = &mut ht.buckets[idx];
        loop {
            match cursor {
                Some(entry) if entry.key.borrow() == key => {
                    let boxed = cursor.take().expect("matched Some above");
                    let DictEntry { key, val, next } = *boxed;
                    *cursor = next;
                    ht.used -= 1;
                    return Some((key, val));
                }
                Some(_) => {
                    cursor = &mut cursor.as_mut().expect("matched Some above").next;
                }
                None => return None,
            }
        }
    }

    /// Insert-or-get access, the idiomatic replacement for
    /// `add_or_find`/`add_raw`.
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V, S> {
        self.lazy_rehash_step();
        if self.find_entry(&key).is_some() {
            Entry::Occupied(OccupiedEntry::new(self, key))
        } else {
            Entry::Vacant(VacantEntry::new(self, key))
        }
    }

    pub(super) fn insert_vacant(&mut self, key: K, val: V) -> &mut V {
        self.raw_insert(key, val)
    }

    pub(super) fn get_mut_existing(&mut self, key: &K) -> &mut V {
        self.find_entry_mut(key).expect("entry must still be occupied")
    }

    pub(super) fn take_existing(&mut self, key: &K) -> (K, V) {
        self.remove_entry(key).expect("entry must still be occupied")
    }

    // -- sizing policy ----------------------------------------------------

    fn expand_if_needed(&mut self) {
        if self.is_rehashing() {
            return;
        }
        if self.ht[0].size() == 0 {
            self.begin_expand(next_power(self.initial_capacity));
            return;
        }
        let used = self.ht[0].used;
        let size = self.ht[0].size();
        if used >= size {
            let ratio_triggered = (used / size) as u64 > self.force_resize_ratio;
            if self.resize_enabled || ratio_triggered {
                self.begin_expand(next_power(used * 2));
            }
        }
    }

    fn begin_expand(&mut self, new_size: usize) {
        if self.ht[0].size() == 0 {
            self.ht[0] = HashTable::with_capacity(new_size);
            tracing::trace!(capacity = new_size, "dict: initialized empty table");
            return;
        }
        self.ht[1] = HashTable::with_capacity(new_size);
        self.rehash_idx = 0;
        tracing::debug!(
            old_size = self.ht[0].size(),
            new_size,
            "dict: beginning incremental rehash"
        );
    }

    /// Explicit growth request. Errs instead of interrupting an
    /// in-progress rehash or shrinking below the live element count.
    pub fn resize(&mut self, new_capacity: usize) -> DictResult<()> {
        if self.is_rehashing() {
            return Err(DictError::AlreadyRehashing);
        }
        if new_capacity < self.ht[0].used {
            return Err(DictError::CapacityTooSmall {
                requested: new_capacity,
                used: self.ht[0].used,
            });
        }
        if !self.resize_enabled {
            return Err(DictError::ResizeDisabled);
        }
        self.begin_expand(next_power(new_capacity));
        Ok(())
    }

    /// Shrinks to `next_power(max(used, 4))`.
    pub fn shrink_to_fit(&mut self) -> DictResult<()> {
        if self.is_rehashing() {
            return Err(DictError::AlreadyRehashing);
        }
        if !self.resize_enabled {
            return Err(DictError::ResizeDisabled);
        }
        let target = next_power(self.ht[0].used.max(4));
        self.begin_expand(target);
        Ok(())
    }

    // -- incremental rehash -------------------------------------------------

    /// Migrates up to `n` nonempty buckets from `ht[0]` into `ht[1]`,
    /// skipping at most `n * 10` empty ones along the way. Returns `true`
    /// if there is more work left.
    pub fn rehash_step(&mut self, n: usize) -> bool {
        if !self.is_rehashing() {
            return false;
        }
        let mut steps = n;
        let mut empty_budget = n.saturating_mul(10);

        while steps > 0 {
            if self.ht[0].used == 0 {
                self.ht[0] = std::mem::replace(&mut self.ht[1], HashTable::empty());
                self.rehash_idx = -1;
                tracing::debug!("dict: incremental rehash complete");
                return false;
            }

            while (self.rehash_idx as usize) < self.ht[0].size()
                && self.ht[0].buckets[self.rehash_idx as usize].is_none()
            {
                self.rehash_idx += 1;
                match empty_budget.checked_sub(1) {
                    Some(remaining) => empty_budget = remaining,
                    None => return true,
                }
                if empty_budget == 0 {
                    return true;
                }
            }

            if (self.rehash_idx as usize) >= self.ht[0].size() {
                // Only reachable if `used` disagrees with reality; treat
                // as done rather than index out of bounds.
                self.ht[0] = std::mem::replace(&mut self.ht[1], HashTable::empty());
                self.rehash_idx = -1;
                return false;
            }

            let idx = self.rehash_idx as usize;
            let mut chain = self.ht[0].buckets[idx].take();
            while let Some(mut entry) = chain {
                chain = entry.next.take();
                let hash = self.hash_of(&entry.key);
                let new_idx = (hash as usize) & self.ht[1].size_mask;
                entry.next = self.ht[1].buckets[new_idx].take();
                self.ht[1].buckets[new_idx] = Some(entry);
                self.ht[0].used -= 1;
                self.ht[1].used += 1;
            }
            self.rehash_idx += 1;
            steps -= 1;
        }
        true
    }

    /// Keeps calling `rehash_step(100)` until `ms` milliseconds elapse or
    /// the rehash completes, whichever comes first.
    pub fn rehash_milliseconds(&mut self, ms: u64) {
        let start = std::time::Instant::now();
        loop {
            if !self.rehash_step(100) {
                break;
            }
            if start.elapsed().as_millis() as u64 >= ms {
                break;
            }
        }
    }

    /// One migration step, skipped entirely while a safe iterator is
    /// alive so the bucket layout it is walking stays put.
    fn lazy_rehash_step(&mut self) {
        if self.active_safe_iterators.get() > 0 {
            return;
        }
        if self.is_rehashing() {
            self.rehash_step(1);
        }
    }

    // -- iteration ------------------------------------------------------

    /// A borrow-checked iterator: holding it forbids structural mutation
    /// through the same `&mut Dict` at compile time, and it suppresses
    /// amortized rehash for its lifetime.
    pub fn iter(&self) -> Iter<'_, K, V, S> {
        Iter::new(self)
    }

    /// A fingerprint-checked iterator that does not hold a Rust borrow
    /// across calls; call [`IterUnsafe::finish`] when done to validate
    /// that nothing structurally changed the dict in the meantime.
    pub fn iter_unsafe(&self) -> IterUnsafe<K, V> {
        IterUnsafe::new()
    }

    pub(super) fn fingerprint(&self) -> u64 {
        let values = [
            self.ht[0].buckets.as_ptr() as usize as u64,
            self.ht[0].size() as u64,
            self.ht[0].used as u64,
            self.ht[1].buckets.as_ptr() as usize as u64,
            self.ht[1].size() as u64,
            self.ht[1].used as u64,
        ];
        let mut mix = 0u64;
        for v in values {
            mix = wang_mix(mix.wrapping_add(v));
        }
        mix
    }

    pub(super) fn bucket_ref(&self, table_idx: usize, bucket_idx: usize) -> Option<&DictEntry<K, V>> {
        self.ht[table_idx].buckets.get(bucket_idx)?.as_deref()
    }

    pub(super) fn table_size(&self, table_idx: usize) -> usize {
        self.ht[table_idx].size()
    }

    pub(super) fn active_safe_iterators(&self) -> &std::cell::Cell<usize> {
        &self.active_safe_iterators
    }

    // -- cursor scan ------------------------------------------------------

    /// Visits every entry reachable from `cursor`'s bucket(s) and returns
    /// the next cursor; callers start at 0 and stop once 0 is returned
    /// again. Tolerant of resizes happening between calls.
    pub fn scan<F>(&mut self, cursor: u64, mut on_entry: F) -> u64
    where
        F: FnMut(&K, &V),
    {
        self.lazy_rehash_step();
        self.scan_bucket(cursor, |bucket| {
            for (k, v) in bucket {
                on_entry(k, v);
            }
        })
    }

    /// Like [`Dict::scan`], but the callback receives the whole bucket at
    /// once as an iterator over its chain.
    pub fn scan_bucket<'a, F>(&'a mut self, cursor: u64, mut on_bucket: F) -> u64
    where
        F: FnMut(BucketIter<'a, K, V>),
    {
        if !self.is_rehashing() {
            let ht = &self.ht[0];
            if ht.size() == 0 {
                return 0;
            }
            let mask = ht.size_mask as u64;
            let idx = (cursor & mask) as usize;
            on_bucket(BucketIter::new(ht.buckets[idx].as_deref()));

            let mut v = cursor | !mask;
            v = v.reverse_bits().wrapping_add(1).reverse_bits();
            return v;
        }

        let (small, large) = if self.ht[0].size() <= self.ht[1].size() {
            (0, 1)
        } else {
            (1, 0)
        };
        let m0 = self.ht[small].size_mask as u64;
        let m1 = self.ht[large].size_mask as u64;

        let idx0 = (cursor & m0) as usize;
        on_bucket(BucketIter::new(self.ht[small].buckets[idx0].as_deref()));

        let mut v = cursor;
        loop {
            let idx1 = (v & m1) as usize;
            on_bucket(BucketIter::new(self.ht[large].buckets[idx1].as_deref()));
            v |= !m1;
            v = v.reverse_bits().wrapping_add(1).reverse_bits();
            if v & (m0 ^ m1) == 0 {
                break;
            }
        }

        v |= !m0;
        v = v.reverse_bits().wrapping_add(1).reverse_bits();
        v
    }

    // -- sampling ---------------------------------------------------------

    /// A uniformly random entry, or `None` on an empty dict.
    pub fn random_key(&self) -> Option<(&K, &V)> {
        if self.is_empty() {
            return None;
        }
        let mut rng = rand::thread_rng();
        loop {
            let (table_idx, bucket_idx) = if !self.is_rehashing() {
                (0, rand::Rng::gen_range(&mut rng, 0..self.ht[0].size()))
            } else {
                let lo = self.rehash_idx as usize;
                let total = self.ht[0].size() + self.ht[1].size();
                let pick = lo + rand::Rng::gen_range(&mut rng, 0..(total - lo));
                if pick < self.ht[0].size() {
                    (0, pick)
                } else {
                    (1, pick - self.ht[0].size())
                }
            };
            if let Some(found) = Self::pick_from_chain(&self.ht[table_idx], bucket_idx, &mut rng) {
                return Some(found);
            }
        }
    }

    fn pick_from_chain<'a>(
        ht: &'a HashTable<K, V>,
        bucket_idx: usize,
        rng: &mut impl rand::Rng,
    ) -> Option<(&'a K, &'a V)> {
        let mut len = 0usize;
        let mut node = ht.buckets[bucket_idx].as_deref();
        while let Some(e) = node {
            len += 1;
            node = e.next.as_deref();
        }
        if len == 0 {
            return None;
        }
        let target = rng.gen_range(0..len);
        let mut node = ht.buckets[bucket_idx].as_deref();
        for _ in 0..target {
            node = node.and_then(|e| e.next.as_deref());
        }
        node.map(|e| (&e.key, &e.val))
    }

    /// Best-effort sampling for statistics; makes no distribution or
    /// uniqueness guarantees, and never returns more than
    /// `min(count, len())` entries. Advances the rehash by up to `count`
    /// steps along the way, preserved from the original even for dicts
    /// too small for that to matter.
    pub fn some_keys(&mut self, count: usize) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        let mut out = Vec::new();
        if count == 0 || self.is_empty() {
            return out;
        }

        let mut rng = rand::thread_rng();
        let max_mask = self.ht[0].size_mask.max(self.ht[1].size_mask) as u64;
        let mut cursor: u64 = rand::Rng::gen_range(&mut rng, 0..=max_mask);
        let mut steps_left = count.saturating_mul(10);
        let stop_empty_run = count.max(5);
        let mut empty_run = 0usize;

        while out.len() < count {
            match steps_left.checked_sub(1) {
                Some(remaining) => steps_left = remaining,
                None => break,
            }

            self.rehash_step(1);

            let mut visited_any = false;
            for table_idx in 0..2 {
                let rehash_idx = self.rehash_idx;
                let ht = &self.ht[table_idx];
                if ht.size() == 0 {
                    continue;
                }
                if table_idx == 0 && rehash_idx >= 0 && (cursor as usize) < rehash_idx as usize {
                    continue;
                }
                let idx = (cursor as usize) & ht.size_mask;
                let mut node = ht.buckets[idx].as_deref();
                while let Some(e) = node {
                    out.push((e.key.clone(), e.val.clone()));
                    visited_any = true;
                    node = e.next.as_deref();
                    if out.len() >= count {
                        break;
                    }
                }
            }

            if visited_any {
                empty_run = 0;
            } else {
                empty_run += 1;
                if empty_run >= stop_empty_run {
                    cursor = rand::Rng::gen_range(&mut rng, 0..=max_mask);
                    empty_run = 0;
                    continue;
                }
            }

            cursor = cursor.reverse_bits().wrapping_add(1).reverse_bits();
        }

        out.truncate(count);
        out
    }

    // -- clear ------------------------------------------------------------

    pub fn clear(&mut self) {
        self.ht = [HashTable::empty(), HashTable::empty()];
        self.rehash_idx = -1;
        tracing::trace!("dict: cleared");
    }

    /// Like [`Dict::clear`], but invokes `callback(buckets_visited)` every
    /// 65,536 buckets, so a host flushing a multi-million-entry dict can
    /// yield to an event loop.
    pub fn clear_with_progress(&mut self, mut callback: impl FnMut(usize)) {
        let mut visited = 0usize;
        for table_idx in 0..2 {
            let size = self.ht[table_idx].size();
            for i in 0..size {
                self.ht[table_idx].buckets[i] = None;
                visited += 1;
                if visited % 65_536 == 0 {
                    callback(visited);
                }
            }
        }
        self.clear();
        callback(visited);
    }
}

/// An iterator over a single bucket's collision chain, yielded by
/// [`Dict::scan_bucket`].
pub struct BucketIter<'a, K, V> {
    next: Option<&'a DictEntry<K, V>>,
}

impl<'a, K, V> BucketIter<'a, K, V> {
    fn new(head: Option<&'a DictEntry<K, V>>) -> Self {
        Self { next: head }
    }
}

impl<'a, K, V> Iterator for BucketIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.next?;
        self.next = entry.next.as_deref();
        Some((&entry.key, &entry.val))
    }
}

/// Wang's 64-bit integer mix, used to fold the six fingerprint inputs
/// together. Lifted from the original's `dictFingerprint`.
fn wang_mix(mut key: u64) -> u64 {
    key = (!key).wrapping_add(key << 21);
    key ^= key >> 24;
    key = key.wrapping_add(key << 3).wrapping_add(key << 8);
    key ^= key >> 14;
    key = key.wrapping_add(key << 2).wrapping_add(key << 4);
    key ^= key >> 28;
    key = key.wrapping_add(key << 31);
    key
}

impl<K, V, S> fmt::Debug for Dict<K, V, S>
where
    K: fmt::Debug + Eq + Hash,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> IntoIterator for Dict<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut items = Vec::with_capacity(self.len());
        for table_idx in 0..2 {
            let size = self.ht[table_idx].size();
            for i in 0..size {
                let mut node = self.ht[table_idx].buckets[i].take();
                while let Some(boxed) = node {
                    let DictEntry { key, val, next } = *boxed;
                    items.push((key, val));
                    node = next;
                }
            }
        }
        IntoIter::new(items)
    }
}

impl<'a, K, V, S> IntoIterator for &'a Dict<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
