// datamask/src/cache.rs
//! Fixed-capacity FIFO caches for compiled path segments and regexes.
//!
//! The engine keeps two of these behind `RwLock`s so repeated calls with the
//! same schema never recompile anything. Eviction is strict FIFO: once
//! capacity is reached the oldest inserted key goes, regardless of how often
//! it was read since. Entries never expire by time, only by capacity
//! pressure.
//!
//! License: MIT OR Apache-2.0

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// 2000 unique schema paths is plenty, even for large applications.
pub(crate) const PATH_CACHE_CAPACITY: usize = 2000;

/// 1000 compiled schema/key-list regexes is generous.
pub(crate) const REGEX_CACHE_CAPACITY: usize = 1000;

/// A size-limited, insertion-ordered cache.
#[derive(Debug)]
pub struct BoundedCache<K, V> {
    map: HashMap<K, V>,
    order: VecDeque<K>,
    capacity: usize,
}

impl<K: Eq + Hash + Clone, V> BoundedCache<K, V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity.min(64)),
            order: VecDeque::new(),
            capacity,
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    /// Inserts an entry, evicting the single oldest key first when full.
    /// Overwriting an existing key keeps its original queue position.
    pub fn insert(&mut self, key: K, value: V) {
        if self.map.contains_key(&key) {
            self.map.insert(key, value);
            return;
        }
        if self.map.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.map.remove(&oldest);
            }
        }
        self.order.push_back(key.clone());
        self.map.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_first() {
        let mut cache = BoundedCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.insert("c", 3);
        assert_eq!(cache.len(), 2);
        assert!(cache.get(&"a").is_none());
        assert_eq!(cache.get(&"b"), Some(&2));
        assert_eq!(cache.get(&"c"), Some(&3));
    }

    #[test]
    fn eviction_is_fifo_not_lru() {
        let mut cache = BoundedCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        // Reading "a" does not refresh it; it is still the oldest.
        assert_eq!(cache.get(&"a"), Some(&1));
        cache.insert("c", 3);
        assert!(cache.get(&"a").is_none());
        assert_eq!(cache.get(&"b"), Some(&2));
    }

    #[test]
    fn overwrite_keeps_queue_position() {
        let mut cache = BoundedCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.insert("a", 10);
        assert_eq!(cache.len(), 2);
        cache.insert("c", 3);
        // "a" kept its original (oldest) slot, so it is the one evicted.
        assert!(cache.get(&"a").is_none());
        assert_eq!(cache.get(&"b"), Some(&2));
        assert_eq!(cache.get(&"c"), Some(&3));
    }

    #[test]
    fn clear_empties_everything() {
        let mut cache = BoundedCache::new(4);
        cache.insert("a", 1);
        cache.clear();
        assert!(cache.is_empty());
        cache.insert("a", 2);
        assert_eq!(cache.get(&"a"), Some(&2));
    }
}
