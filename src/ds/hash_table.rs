//! Separate-chaining hash table with power-of-two buckets.
//!
//! Each bucket holds a singly linked chain of boxed entries; new entries
//! prepend, so an unresized chain iterates most-recently-inserted first.
//! The bucket array doubles (with a full rehash) whenever an insertion
//! would push the load factor to 0.75 or beyond, checked before the entry
//! is placed.
//!
//! ## Architecture
//!
//! ```text
//!   buckets: Vec<Option<Box<Entry<K, V>>>>     (len = power of two)
//!   ┌─────┬──────────────────────────────────────────────┐
//!   │  0  │ ──► (k9, v) ──► (k1, v) ──► ∅                │
//!   │  1  │ ∅                                            │
//!   │  2  │ ──► (k6, v) ──► ∅                            │
//!   │  3  │ ──► (k3, v) ──► (k11, v) ──► (k7, v) ──► ∅   │
//!   └─────┴──────────────────────────────────────────────┘
//!
//!   bucket(key) = hash(key) & (buckets.len() - 1)
//! ```
//!
//! ## Performance
//!
//! | Operation         | Time        | Notes                              |
//! |-------------------|-------------|------------------------------------|
//! | `put`             | O(1) amort. | chain scan + occasional rehash     |
//! | `get` / `remove`  | O(1) avg    | O(chain) worst case                |
//! | `contains_value`  | O(n)        | full scan over every chain         |
//! | `iter`            | O(n)        | bucket order, then chain order     |
//!
//! ## Notes
//! - The hasher is pluggable (`S: BuildHasher`, default [`FxBuildHasher`]);
//!   keyed equality rides `K: Eq + Hash` so hash and equality agree.
//! - A resize re-inserts every entry; chain order across a resize is not
//!   preserved.
//! - `diagnostics()` snapshots bucket occupancy and chain statistics for
//!   human inspection.
//! - `debug_validate_invariants()` is available in debug/test builds.
use std::fmt;
use std::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;

use crate::error::{Error, Result};

const INITIAL_BUCKETS: usize = 8;
const MAX_LOAD_NUM: usize = 3;
const MAX_LOAD_DEN: usize = 4;

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
    hash: u64,
    next: Option<Box<Entry<K, V>>>,
}

#[derive(Debug)]
/// Separate-chaining hash map with dynamic power-of-two resizing.
pub struct HashTable<K, V, S = FxBuildHasher> {
    buckets: Vec<Option<Box<Entry<K, V>>>>,
    len: usize,
    hasher: S,
}

impl<K: Eq + Hash, V> HashTable<K, V> {
    /// Creates an empty table with the default bucket count.
    pub fn new() -> Self {
        Self::with_hasher(FxBuildHasher)
    }

    /// Creates an empty table sized for at least `capacity` entries
    /// without resizing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, FxBuildHasher)
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> HashTable<K, V, S> {
    /// Creates an empty table using `hasher` to place keys.
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates an empty table sized for `capacity` entries with a custom
    /// hasher.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        let mut buckets = INITIAL_BUCKETS;
        while capacity * MAX_LOAD_DEN >= buckets * MAX_LOAD_NUM {
            buckets *= 2;
        }
        let mut vec = Vec::with_capacity(buckets);
        vec.resize_with(buckets, || None);
        Self {
            buckets: vec,
            len: 0,
            hasher,
        }
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current bucket count (always a power of two).
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    fn hash_of(&self, key: &K) -> u64 {
        self.hasher.hash_one(key)
    }

    fn bucket_of(&self, hash: u64) -> usize {
        (hash as usize) & (self.buckets.len() - 1)
    }

    /// Inserts or overwrites `key`'s value, returning the previous value on
    /// overwrite. The count changes only when a new key is placed, and the
    /// table resizes first whenever this insertion would reach the 0.75
    /// load factor.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if (self.len + 1) * MAX_LOAD_DEN >= self.buckets.len() * MAX_LOAD_NUM {
            self.resize(self.buckets.len() * 2);
        }
        let hash = self.hash_of(&key);
        let idx = self.bucket_of(hash);

        let mut cursor = self.buckets[idx].as_deref_mut();
        while let Some(entry) = cursor {
            if entry.hash == hash && entry.key == key {
                return Some(std::mem::replace(&mut entry.value, value));
            }
            cursor = entry.next.as_deref_mut();
        }

        let next = self.buckets[idx].take();
        self.buckets[idx] = Some(Box::new(Entry {
            key,
            value,
            hash,
            next,
        }));
        self.len += 1;
        None
    }

    /// Returns the value stored for `key`.
    ///
    /// Fails with [`Error::KeyNotFound`] when the key is absent.
    pub fn get(&self, key: &K) -> Result<&V> {
        self.try_get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns the value stored for `key`, or `None` when absent.
    pub fn try_get(&self, key: &K) -> Option<&V> {
        let hash = self.hash_of(key);
        let mut cursor = self.buckets[self.bucket_of(hash)].as_deref();
        while let Some(entry) = cursor {
            if entry.hash == hash && entry.key == *key {
                return Some(&entry.value);
            }
            cursor = entry.next.as_deref();
        }
        None
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn try_get_mut(&mut self, key: &K) -> Option<&mut V> {
        let hash = self.hash_of(key);
        let idx = self.bucket_of(hash);
        let mut cursor = self.buckets[idx].as_deref_mut();
        while let Some(entry) = cursor {
            if entry.hash == hash && entry.key == *key {
                return Some(&mut entry.value);
            }
            cursor = entry.next.as_deref_mut();
        }
        None
    }

    /// Returns `true` if `key` has an entry.
    pub fn contains_key(&self, key: &K) -> bool {
        self.try_get(key).is_some()
    }

    /// Removes `key`'s entry, splicing its chain, and returns the value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let hash = self.hash_of(key);
        let idx = self.bucket_of(hash);
        let mut link = &mut self.buckets[idx];
        loop {
            let found = match link {
                None => return None,
                Some(entry) => entry.hash == hash && entry.key == *key,
            };
            if found {
                let mut removed = link.take()?;
                *link = removed.next.take();
                self.len -= 1;
                return Some(removed.value);
            }
            match link {
                Some(entry) => link = &mut entry.next,
                None => return None,
            }
        }
    }

    /// Resets every bucket to empty. Bucket count is retained.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            *bucket = None;
        }
        self.len = 0;
    }

    /// Returns an iterator over `(&K, &V)` in bucket order, then chain
    /// order (most-recently-inserted first within an unresized chain).
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: &self.buckets,
            bucket: 0,
            entry: None,
        }
    }

    /// Returns an iterator over the keys.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    /// Returns an iterator over the values.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    /// Snapshots bucket occupancy and chain-length statistics.
    pub fn diagnostics(&self) -> TableDiagnostics {
        let mut occupied = 0usize;
        let mut max_chain = 0usize;
        for bucket in &self.buckets {
            let mut chain = 0usize;
            let mut cursor = bucket.as_deref();
            while let Some(entry) = cursor {
                chain += 1;
                cursor = entry.next.as_deref();
            }
            if chain > 0 {
                occupied += 1;
                max_chain = max_chain.max(chain);
            }
        }
        TableDiagnostics {
            buckets: self.buckets.len(),
            occupied_buckets: occupied,
            entries: self.len,
            max_chain,
        }
    }

    /// Doubles into `new_buckets` and rehashes every entry. Chain order is
    /// not preserved across the move.
    fn resize(&mut self, new_buckets: usize) {
        let mut buckets: Vec<Option<Box<Entry<K, V>>>> = Vec::with_capacity(new_buckets);
        buckets.resize_with(new_buckets, || None);
        let mask = new_buckets - 1;

        for bucket in self.buckets.drain(..) {
            let mut cursor = bucket;
            while let Some(mut entry) = cursor {
                cursor = entry.next.take();
                let idx = (entry.hash as usize) & mask;
                entry.next = buckets[idx].take();
                buckets[idx] = Some(entry);
            }
        }
        self.buckets = buckets;
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert!(self.buckets.len().is_power_of_two());
        let mut counted = 0usize;
        for (idx, bucket) in self.buckets.iter().enumerate() {
            let mut cursor = bucket.as_deref();
            while let Some(entry) = cursor {
                assert_eq!(self.bucket_of(entry.hash), idx);
                assert_eq!(self.hash_of(&entry.key), entry.hash);
                counted += 1;
                cursor = entry.next.as_deref();
            }
        }
        assert_eq!(counted, self.len);
    }
}

impl<K: Eq + Hash, V: PartialEq, S: BuildHasher> HashTable<K, V, S> {
    /// Returns `true` if any entry stores `value`. Full O(n) scan.
    pub fn contains_value(&self, value: &V) -> bool {
        self.values().any(|stored| stored == value)
    }
}

impl<K: Eq + Hash, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for HashTable<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = HashTable::new();
        for (key, value) in iter {
            table.put(key, value);
        }
        table
    }
}

/// Borrowed iterator over table entries: bucket order, then chain order.
pub struct Iter<'a, K, V> {
    buckets: &'a [Option<Box<Entry<K, V>>>],
    bucket: usize,
    entry: Option<&'a Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.entry {
                self.entry = entry.next.as_deref();
                return Some((&entry.key, &entry.value));
            }
            if self.bucket >= self.buckets.len() {
                return None;
            }
            self.entry = self.buckets[self.bucket].as_deref();
            self.bucket += 1;
        }
    }
}

impl<'a, K: Eq + Hash, V, S: BuildHasher> IntoIterator for &'a HashTable<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Bucket-occupancy snapshot for human inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDiagnostics {
    /// Current bucket count.
    pub buckets: usize,
    /// Buckets with at least one entry.
    pub occupied_buckets: usize,
    /// Stored entries.
    pub entries: usize,
    /// Length of the longest collision chain.
    pub max_chain: usize,
}

impl TableDiagnostics {
    /// Current load factor (entries / buckets).
    pub fn load_factor(&self) -> f64 {
        self.entries as f64 / self.buckets as f64
    }

    /// Mean chain length over occupied buckets.
    pub fn avg_chain(&self) -> f64 {
        if self.occupied_buckets == 0 {
            0.0
        } else {
            self.entries as f64 / self.occupied_buckets as f64
        }
    }
}

impl fmt::Display for TableDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} entries over {}/{} buckets (load {:.2}, max chain {}, avg chain {:.2})",
            self.entries,
            self.occupied_buckets,
            self.buckets,
            self.load_factor(),
            self.max_chain,
            self.avg_chain()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_get_round_trip() {
        let mut table = HashTable::new();
        assert_eq!(table.put("a", 1), None);
        assert_eq!(table.put("b", 2), None);
        assert_eq!(table.get(&"a").unwrap(), &1);
        assert_eq!(table.get(&"b").unwrap(), &2);
        assert_eq!(table.len(), 2);
        table.debug_validate_invariants();
    }

    #[test]
    fn put_overwrites_without_count_change() {
        let mut table = HashTable::new();
        table.put("k", 1);
        assert_eq!(table.put("k", 2), Some(1));
        assert_eq!(table.get(&"k").unwrap(), &2);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn get_fails_for_missing_key() {
        let table: HashTable<&str, i32> = HashTable::new();
        assert_eq!(table.get(&"missing"), Err(Error::KeyNotFound));
        assert_eq!(table.try_get(&"missing"), None);
        assert!(!table.contains_key(&"missing"));
    }

    #[test]
    fn remove_splices_chain() {
        let mut table = HashTable::new();
        for k in 0..32 {
            table.put(k, k * 10);
        }
        assert_eq!(table.remove(&7), Some(70));
        assert_eq!(table.remove(&7), None);
        assert_eq!(table.len(), 31);
        assert!(!table.contains_key(&7));
        assert_eq!(table.get(&8).unwrap(), &80);
        table.debug_validate_invariants();
    }

    #[test]
    fn resize_preserves_membership() {
        let mut table = HashTable::new();
        let initial = table.bucket_count();
        for k in 0..200 {
            table.put(k, k + 1000);
        }
        assert!(table.bucket_count() > initial);
        assert!(table.bucket_count().is_power_of_two());
        for k in 0..200 {
            assert_eq!(table.get(&k).unwrap(), &(k + 1000));
        }
        table.debug_validate_invariants();
    }

    #[test]
    fn resize_triggers_before_insert_at_load_factor() {
        let mut table: HashTable<i32, i32> = HashTable::new();
        let buckets = table.bucket_count();
        // stay strictly below 0.75 and the bucket count holds
        for k in 0..(buckets * 3 / 4 - 1) as i32 {
            table.put(k, k);
        }
        assert_eq!(table.bucket_count(), buckets);
        // the insert that would reach 0.75 doubles first
        table.put(-1, -1);
        assert_eq!(table.bucket_count(), buckets * 2);
    }

    #[test]
    fn contains_value_scans_every_chain() {
        let mut table = HashTable::new();
        for k in 0..50 {
            table.put(k, format!("v{k}"));
        }
        assert!(table.contains_value(&"v49".to_string()));
        assert!(!table.contains_value(&"v50".to_string()));
    }

    #[test]
    fn clear_resets_buckets_and_count() {
        let mut table = HashTable::new();
        for k in 0..20 {
            table.put(k, k);
        }
        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.iter().count(), 0);
        table.debug_validate_invariants();
        table.put(1, 1);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn iteration_covers_every_entry_once() {
        let mut table = HashTable::new();
        for k in 0..64 {
            table.put(k, k * 2);
        }
        let mut seen: Vec<i32> = table.keys().copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..64).collect::<Vec<_>>());
        assert_eq!(table.values().count(), 64);
    }

    #[test]
    fn unresized_chain_iterates_most_recent_first() {
        // one bucket forces a single chain and no resize headroom issues
        let mut table: HashTable<i32, i32> = HashTable::with_capacity(8);
        let mask = (table.bucket_count() - 1) as i32;
        // pick three keys that collide into bucket 0 under the mask by
        // brute force over the injected hasher
        let mut colliding = Vec::new();
        let mut k = 0;
        while colliding.len() < 3 {
            let hash = table.hash_of(&k);
            if (hash as usize) & mask as usize == 0 {
                colliding.push(k);
            }
            k += 1;
        }
        for &key in &colliding {
            table.put(key, key);
        }
        let chain: Vec<i32> = table.keys().copied().collect();
        let expected: Vec<i32> = colliding.iter().rev().copied().collect();
        assert_eq!(chain, expected);
    }

    #[test]
    fn custom_hasher_is_honored() {
        use std::collections::hash_map::RandomState;
        let mut table: HashTable<&str, i32, RandomState> =
            HashTable::with_hasher(RandomState::new());
        table.put("x", 1);
        assert_eq!(table.get(&"x").unwrap(), &1);
        table.debug_validate_invariants();
    }

    #[test]
    fn diagnostics_snapshot_and_display() {
        let mut table = HashTable::new();
        for k in 0..10 {
            table.put(k, k);
        }
        let diag = table.diagnostics();
        assert_eq!(diag.entries, 10);
        assert!(diag.occupied_buckets <= diag.buckets);
        assert!(diag.max_chain >= 1);
        assert!(diag.load_factor() < 0.75);
        let text = diag.to_string();
        assert!(text.contains("10 entries"));
    }

    #[test]
    fn with_capacity_avoids_early_resizes() {
        let mut table: HashTable<i32, i32> = HashTable::with_capacity(100);
        let buckets = table.bucket_count();
        for k in 0..100 {
            table.put(k, k);
        }
        assert_eq!(table.bucket_count(), buckets);
    }
}
