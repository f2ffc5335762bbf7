//! Least Frequently Used Cache Implementation.
//!
//! The LFU cache evicts the entry with the fewest accesses when it needs room
//! for a new key. Ties between entries with the same access count go to
//! recency: the least recently touched of them is evicted first.
//!
//! # Layout
//!
//! All entries live in one [`List`]. The list is cut into contiguous
//! *blocks*, one per distinct frequency, ordered from the highest frequency
//! at the front to the lowest at the back. Inside a block the most recently
//! touched entry comes first.
//!
//! ```text
//!            freq 3        freq 2            freq 1
//!   S ──► [ a ] ──► [ d ] ──► [ b ] ──► [ e ] ──► [ c ] ──► S
//!          ▲                   ▲         ▲
//!          front(3)            front(2)  front(1)            back = eviction candidate
//! ```
//!
//! Two maps index the list:
//!
//! - key → node, for O(1) lookup
//! - frequency → block (front node and member count)
//!
//! Accessing an entry ("bumping" it) moves it from block `f` to the front of
//! block `f + 1`, creating that block immediately ahead of block `f` if it
//! does not exist yet. Every operation is a constant number of map lookups
//! and list splices, so `get`, `put` and eviction all run in O(1).

extern crate alloc;

use crate::config::LfuCacheConfig;
use crate::entry::CacheEntry;
use crate::error::CacheError;
use crate::list::{List, NodeId, Values};
use crate::metrics::lfu::FrequencyLevels;
use crate::metrics::{CacheMetrics, LfuCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::iter::FusedIterator;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// A run of list nodes sharing one frequency.
#[derive(Debug, Clone, Copy)]
struct Block {
    /// Most recently touched member.
    front: NodeId,
    len: usize,
}

/// An implementation of a Least Frequently Used (LFU) cache.
///
/// Reads count as accesses: [`get`](LfuCache::get) raises the entry's
/// frequency. Use [`frequency`](LfuCache::frequency) or
/// [`peek`](LfuCache::peek) to inspect an entry without touching it.
///
/// The cache does no internal locking. All mutation goes through
/// `&mut self`, so sharing it between threads needs an outer lock.
///
/// # Examples
///
/// ```
/// use lfucache::LfuCache;
///
/// let mut cache = LfuCache::new(2);
///
/// cache.put(1, "one");
/// cache.put(2, "two");
/// assert_eq!(cache.get(&1), Ok(&"one"));
///
/// // Key 2 has the lowest frequency, so it makes room for key 3.
/// cache.put(3, "three");
/// assert!(cache.get(&2).is_err());
/// assert_eq!(cache.frequency(&1), Ok(2));
/// assert_eq!(cache.frequency(&3), Ok(1));
/// ```
pub struct LfuCache<K, V, S = DefaultHashBuilder> {
    config: LfuCacheConfig,

    /// Entries in rank order: highest frequency first, most recent first
    /// within a frequency.
    entries: List<CacheEntry<K, V>>,

    /// Key index
    map: HashMap<K, NodeId, S>,

    /// Frequency index; holds a frequency iff some live entry has it
    blocks: HashMap<usize, Block>,

    metrics: LfuCacheMetrics,
}

impl<K: Hash + Eq, V> LfuCache<K, V> {
    /// Creates a new LFU cache that holds at most `cap` entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use lfucache::LfuCache;
    ///
    /// let cache: LfuCache<&str, u32> = LfuCache::new(10);
    /// assert_eq!(cache.cap(), 10);
    /// assert!(cache.is_empty());
    /// ```
    pub fn new(cap: usize) -> LfuCache<K, V, DefaultHashBuilder> {
        LfuCache::with_hasher(cap, DefaultHashBuilder::default())
    }
}

impl<K: Hash + Eq, V> Default for LfuCache<K, V> {
    /// Creates a cache with [`DEFAULT_CAPACITY`](crate::config::DEFAULT_CAPACITY).
    fn default() -> Self {
        LfuCache::init(LfuCacheConfig::default(), None)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LfuCache<K, V, S> {
    /// Creates a new LFU cache with the specified capacity and hash builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use lfucache::LfuCache;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let cache: LfuCache<&str, u32, _> = LfuCache::with_hasher(10, RandomState::new());
    /// ```
    pub fn with_hasher(cap: usize, hash_builder: S) -> Self {
        tracing::debug!(capacity = cap, "creating LFU cache");
        LfuCache {
            config: LfuCacheConfig::new(cap),
            entries: List::with_capacity(cap),
            map: HashMap::with_capacity_and_hasher(cap, hash_builder),
            blocks: HashMap::with_capacity_and_hasher(cap, DefaultHashBuilder::default()),
            metrics: LfuCacheMetrics::new(),
        }
    }

    /// Creates a cache from a configuration and an optional hash builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use lfucache::config::LfuCacheConfig;
    /// use lfucache::LfuCache;
    ///
    /// let cache: LfuCache<String, i32> = LfuCache::init(LfuCacheConfig { capacity: 100 }, None);
    /// assert_eq!(cache.cap(), 100);
    /// ```
    pub fn init(config: LfuCacheConfig, hasher: Option<S>) -> Self
    where
        S: Default,
    {
        LfuCache::with_hasher(config.capacity, hasher.unwrap_or_default())
    }

    /// Returns the maximum number of key-value pairs the cache can hold.
    #[inline]
    pub fn cap(&self) -> usize {
        self.config.capacity
    }

    /// Returns the current number of key-value pairs in the cache.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the cache contains no key-value pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a snapshot of the accumulated counters together with the
    /// current frequency levels.
    pub fn lfu_metrics(&self) -> LfuCacheMetrics {
        let mut metrics = self.metrics.clone();
        metrics.levels = self.frequency_levels();
        metrics
    }

    /// Returns the value for `key` and counts the access.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::NotFound`] if the key is not cached. The cache
    /// is left untouched in that case apart from the miss counter.
    pub fn get<Q>(&mut self, key: &Q) -> Result<&V, CacheError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.hit(key)?;
        Ok(&self.entries[node].value)
    }

    /// Returns a mutable reference to the value for `key` and counts the
    /// access.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::NotFound`] if the key is not cached.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, CacheError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.hit(key)?;
        Ok(&mut self.entries[node].value)
    }

    /// Returns the access frequency of `key` without changing it.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::NotFound`] if the key is not cached.
    pub fn frequency<Q>(&self, key: &Q) -> Result<usize, CacheError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let &node = self.map.get(key).ok_or(CacheError::NotFound)?;
        Ok(self.entries[node].frequency)
    }

    /// Returns the value for `key` without counting an access.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get(key).map(|&node| &self.entries[node].value)
    }

    /// Returns `true` if `key` is cached. Does not count an access.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Returns the entry that the next insertion at full capacity would
    /// evict, without touching it.
    pub fn peek_lfu(&self) -> Option<(&K, &V)> {
        let entry = &self.entries[self.entries.back()?];
        Some((entry.key(), entry.value()))
    }

    /// Inserts a key-value pair, or replaces the value of an existing key.
    ///
    /// Replacing counts as an access and keeps the accumulated frequency. A
    /// new key enters with frequency 1; if the cache is full the least
    /// frequently used entry is evicted first, the least recently used one
    /// among ties. A zero-capacity cache drops the pair.
    pub fn put(&mut self, key: K, value: V)
    where
        K: Clone,
    {
        if let Some(&node) = self.map.get(&key) {
            self.bump(node);
            self.entries[node].value = value;
            self.metrics.core.record_update();
            return;
        }

        if self.cap() == 0 {
            tracing::trace!("zero-capacity cache rejected insert");
            self.metrics.core.record_rejection();
            return;
        }
        if self.len() >= self.cap() {
            self.evict();
        }

        let (anchor, block) = match self.blocks.get(&1) {
            Some(block) => (block.front, Some(*block)),
            None => (self.entries.sentinel(), None),
        };
        let node = self
            .entries
            .push_before(CacheEntry::new(key.clone(), value), anchor);
        self.map.insert(key, node);
        let len = block.map_or(0, |block| block.len) + 1;
        self.blocks.insert(1, Block { front: node, len });
        self.metrics.core.record_insertion();
    }

    /// Removes `key` from the cache, returning its value if it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.map.remove(key)?;
        self.leave_block(node);
        Some(self.entries.remove(node).into_pair().1)
    }

    /// Removes and returns the eviction candidate: the least frequently used
    /// entry, the least recently used one among ties.
    ///
    /// Returns `None` if the cache is empty.
    pub fn pop(&mut self) -> Option<(K, V)> {
        if self.is_empty() {
            return None;
        }
        Some(self.evict())
    }

    /// Removes every entry. Counters in the metrics are kept.
    pub fn clear(&mut self) {
        self.map.clear();
        self.blocks.clear();
        self.entries.clear();
    }

    /// Returns a lazy iterator over `(key, value)` pairs in rank order:
    /// descending frequency, most recently used first among equal
    /// frequencies.
    ///
    /// Iterating does not count as an access.
    ///
    /// # Examples
    ///
    /// ```
    /// use lfucache::LfuCache;
    ///
    /// let mut cache = LfuCache::new(3);
    /// cache.put("a", 1);
    /// cache.put("b", 2);
    /// cache.put("c", 3);
    /// cache.get(&"a").unwrap();
    ///
    /// let keys: Vec<_> = cache.iter().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, ["a", "c", "b"]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.values(),
        }
    }

    /// Looks up `key`, counting a hit or a miss, and bumps the entry.
    fn hit<Q>(&mut self, key: &Q) -> Result<NodeId, CacheError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.get(key) {
            Some(&node) => {
                self.metrics.core.record_hit();
                self.bump(node);
                Ok(node)
            }
            None => {
                self.metrics.core.record_miss();
                Err(CacheError::NotFound)
            }
        }
    }

    /// Moves `node` from its block at frequency `f` to the front of the
    /// block at `f + 1`.
    fn bump(&mut self, node: NodeId) {
        let freq = self.entries[node].frequency;
        self.leave_block(node);

        let next_freq = freq + 1;
        self.entries[node].frequency = next_freq;
        self.metrics.record_frequency_increment();

        if let Some(block) = self.blocks.get_mut(&next_freq) {
            self.entries.move_before(node, block.front);
            block.front = node;
            block.len += 1;
        } else {
            self.blocks.insert(next_freq, Block { front: node, len: 1 });
            // The new block goes directly ahead of the one it came from.
            // If that block is gone the node already sits between the right
            // neighbours.
            if let Some(lower) = self.blocks.get(&freq) {
                self.entries.move_before(node, lower.front);
            }
        }
    }

    /// Detaches `node` from its frequency block's bookkeeping. The node
    /// itself stays linked in the list.
    fn leave_block(&mut self, node: NodeId) {
        let freq = self.entries[node].frequency;
        let Some(block) = self.blocks.get_mut(&freq) else {
            panic!("no block for frequency {freq}");
        };

        block.len -= 1;
        if block.len == 0 {
            self.blocks.remove(&freq);
        } else if block.front == node {
            block.front = self.entries.next(node);
        }
    }

    /// Evicts the back of the list.
    ///
    /// # Panics
    ///
    /// Panics if the cache is empty.
    fn evict(&mut self) -> (K, V) {
        let Some(victim) = self.entries.back() else {
            panic!("evict called on an empty cache");
        };
        self.leave_block(victim);
        let entry = self.entries.remove_last();
        tracing::trace!(frequency = entry.frequency(), "evicting LFU entry");
        self.map.remove(entry.key());
        self.metrics.core.record_eviction();
        entry.into_pair()
    }

    fn frequency_levels(&self) -> FrequencyLevels {
        let frequency_at = |node: Option<NodeId>| node.map_or(0, |node| self.entries[node].frequency);
        FrequencyLevels {
            len: self.len(),
            capacity: self.cap(),
            active_levels: self.blocks.len(),
            min_frequency: frequency_at(self.entries.back()),
            max_frequency: frequency_at(self.entries.front()),
        }
    }

    /// Checks every structural invariant of the cache.
    ///
    /// # Panics
    ///
    /// Panics with a description of the first violated invariant.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.entries.debug_validate_invariants();
        assert!(self.len() <= self.cap(), "len exceeds capacity");
        assert_eq!(self.map.len(), self.len(), "key index out of sync");
        assert_eq!(
            self.blocks.values().map(|block| block.len).sum::<usize>(),
            self.len(),
            "block counts out of sync"
        );

        let mut seen_blocks = 0;
        let mut cursor = self.entries.front();
        let mut previous_freq = usize::MAX;
        while let Some(front) = cursor {
            let freq = self.entries[front].frequency;
            assert!(freq >= 1, "frequency below 1");
            assert!(freq < previous_freq, "blocks not in descending order");
            let Some(block) = self.blocks.get(&freq) else {
                panic!("no block for frequency {freq}");
            };
            assert_eq!(block.front, front, "wrong front for frequency {freq}");

            let mut node = front;
            for _ in 0..block.len {
                assert_eq!(self.entries[node].frequency, freq, "block {freq} is not contiguous");
                assert_eq!(self.map.get(self.entries[node].key()), Some(&node));
                node = self.entries.next(node);
            }
            cursor = if node == self.entries.sentinel() {
                None
            } else {
                Some(node)
            };
            previous_freq = freq;
            seen_blocks += 1;
        }
        assert_eq!(seen_blocks, self.blocks.len(), "stale frequency blocks");
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LfuCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.lfu_metrics().to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for LfuCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCache")
            .field("capacity", &self.config.capacity)
            .field("len", &self.entries.len())
            .field("entries", &self.entries)
            .finish()
    }
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> IntoIterator for &'a LfuCache<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

/// Rank-ordered iterator over the entries of an [`LfuCache`].
///
/// Created by [`LfuCache::iter`].
pub struct Iter<'a, K, V> {
    inner: Values<'a, CacheEntry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        self.inner.next().map(|entry| (entry.key(), entry.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("inner", &self.inner).finish()
    }
}
