// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use hashbrown::hash_map::RawEntryMut;
use hashbrown::HashMap;

type Slot<V> = Arc<OnceLock<Arc<V>>>;

/// A thread-safe cache that builds each value at most once.
///
/// Lookups for different keys proceed independently. When several threads ask for the same
/// missing key, one of them builds the value and the others wait for it, so the builder runs once
/// per key. If the builder panics, the key stays missing and a later lookup builds it again.
///
/// Clones share the same backing store.
pub struct SharedResourceCache<K, V> {
    slots: Arc<Mutex<HashMap<K, Slot<V>>>>,
}

impl<K, V> SharedResourceCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            slots: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Returns the value for `key`, building it with `make` if no other caller has.
    ///
    /// The map lock is held only to find the key's slot; `make` runs outside of it, so a slow
    /// build blocks only the callers waiting for the same key.
    pub fn get_or_insert_with(&self, key: &K, make: impl FnOnce(&K) -> V) -> Arc<V> {
        let slot = {
            let mut slots = self.lock();
            match slots.raw_entry_mut().from_key(key) {
                RawEntryMut::Occupied(occupied) => Arc::clone(occupied.get()),
                RawEntryMut::Vacant(vacant) => {
                    Arc::clone(vacant.insert(key.clone(), Arc::default()).1)
                }
            }
        };
        Arc::clone(slot.get_or_init(|| {
            log::debug!("building shared resource");
            Arc::new(make(key))
        }))
    }

    /// Returns the value for `key` if it has been built.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        let slots = self.lock();
        slots.get(key)?.get().cloned()
    }

    /// Returns the number of keys with a built value.
    pub fn len(&self) -> usize {
        self.lock()
            .values()
            .filter(|slot| slot.get().is_some())
            .count()
    }

    /// Returns `true` if no value has been built.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every entry.
    ///
    /// Values already handed out stay alive as long as their `Arc`s do. A build in progress
    /// finishes, but its value is not kept.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<K, Slot<V>>> {
        // The map is never left half-updated, so a poisoned lock is still usable.
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K, V> Default for SharedResourceCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for SharedResourceCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            slots: Arc::clone(&self.slots),
        }
    }
}

impl<K, V> fmt::Debug for SharedResourceCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedResourceCache").finish_non_exhaustive()
    }
}
