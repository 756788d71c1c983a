// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::hash::Hash;

use hashbrown::hash_map::RawEntryMut;
use hashbrown::HashMap;

struct Entry<V> {
    value: V,
    serial: u64,
}

/// A bounded least-recently-used cache.
///
/// Every lookup bumps a serial number and stamps the entry it touched. When the cache is full, an
/// insertion first evicts the entry with the oldest stamp. Eviction scans all entries, so it is
/// meant for caches in the order of hundreds of entries, where a miss costs far more than the
/// scan.
pub struct ResourceCache<K, V> {
    entries: HashMap<K, Entry<V>>,
    serial: u64,
    capacity: usize,
    cache_hits: u64,
    cache_misses: u64,
}

impl<K, V> ResourceCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            serial: 0,
            capacity: capacity.max(1),
            cache_hits: 0,
            cache_misses: 0,
        }
    }

    /// Returns the value for `key`, building it with `make` if it is not cached.
    ///
    /// `make` runs only on a miss. If the cache is full, the least recently used entry is evicted
    /// first.
    pub fn entry(&mut self, key: &K, make: impl FnOnce(&K) -> V) -> &V {
        self.serial += 1;
        let serial = self.serial;
        if self.entries.len() >= self.capacity && !self.entries.contains_key(key) {
            self.evict_oldest();
        }
        match self.entries.raw_entry_mut().from_key(key) {
            RawEntryMut::Occupied(occupied) => {
                self.cache_hits += 1;
                let entry = occupied.into_mut();
                entry.serial = serial;
                &entry.value
            }
            RawEntryMut::Vacant(vacant) => {
                self.cache_misses += 1;
                let value = make(key);
                &vacant.insert(key.clone(), Entry { value, serial }).1.value
            }
        }
    }

    /// Returns the cached value for `key`, marking it as recently used.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.serial += 1;
        let serial = self.serial;
        let entry = self.entries.get_mut(key)?;
        entry.serial = serial;
        Some(&entry.value)
    }

    /// Returns `true` if `key` is cached. Does not count as a use.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes every entry. Statistics are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of [`ResourceCache::entry`] calls that found a cached value.
    pub fn cache_hits(&self) -> u64 {
        self.cache_hits
    }

    /// Returns the number of [`ResourceCache::entry`] calls that had to build a value.
    pub fn cache_misses(&self) -> u64 {
        self.cache_misses
    }

    /// Resets hit and miss statistics without touching the cached entries.
    pub fn clear_stats(&mut self) {
        self.cache_hits = 0;
        self.cache_misses = 0;
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.serial)
            .map(|(key, _)| key.clone());
        if let Some(key) = oldest {
            log::trace!("evicting least recently used entry of {}", self.entries.len());
            self.entries.remove(&key);
        }
    }
}

impl<K, V> fmt::Debug for ResourceCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceCache")
            .field("len", &self.entries.len())
            .field("capacity", &self.capacity)
            .field("cache_hits", &self.cache_hits)
            .field("cache_misses", &self.cache_misses)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::ResourceCache;

    #[test]
    fn test_retrieve_existing_entry() {
        let mut cache = ResourceCache::new(3);

        let value1 = cache.entry(&"key1", |_| 42);
        assert_eq!(*value1, 42);

        // Retrieve the same entry - make should not be called
        let value2 = cache.entry(&"key1", |_| panic!("Should not create new data"));
        assert_eq!(*value2, 42);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.cache_hits(), 1);
        assert_eq!(cache.cache_misses(), 1);
    }

    #[test]
    fn test_make_receives_key() {
        let mut cache = ResourceCache::new(2);
        let len = *cache.entry(&"hello", |key| key.len());
        assert_eq!(len, 5);
    }

    #[test]
    fn test_lru_eviction() {
        let mut cache = ResourceCache::new(3);

        cache.entry(&"key1", |_| 1);
        cache.entry(&"key2", |_| 2);
        cache.entry(&"key3", |_| 3);

        // Touch key1 so key2 becomes the oldest.
        assert_eq!(cache.get(&"key1"), Some(&1));

        cache.entry(&"key4", |_| 4);
        assert_eq!(cache.len(), 3);
        assert!(cache.contains(&"key1"));
        assert!(!cache.contains(&"key2"));
        assert!(cache.contains(&"key3"));
        assert!(cache.contains(&"key4"));

        let mut was_created = false;
        cache.entry(&"key2", |_| {
            was_created = true;
            20
        });
        assert!(was_created, "key2 should have been evicted");
    }

    #[test]
    fn test_zero_capacity_holds_one_entry() {
        let mut cache = ResourceCache::new(0);
        assert_eq!(cache.capacity(), 1);
        cache.entry(&1_u32, |_| "a");
        cache.entry(&2_u32, |_| "b");
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&2));
    }

    #[test]
    fn test_clear_keeps_stats() {
        let mut cache = ResourceCache::new(4);
        cache.entry(&'a', |_| ());
        cache.entry(&'a', |_| ());
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.cache_hits(), 1);

        cache.clear_stats();
        assert_eq!(cache.cache_hits(), 0);
        assert_eq!(cache.cache_misses(), 0);
    }
}
