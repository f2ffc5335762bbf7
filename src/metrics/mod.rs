//! Cache Metrics System
//!
//! Counters are reported through the [`CacheMetrics`] trait as a `BTreeMap`
//! so that output always appears in the same key order, which keeps test
//! assertions and logged snapshots stable.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

pub mod lfu;

pub use lfu::LfuCacheMetrics;

/// Counters common to any entry-count cache.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoreCacheMetrics {
    /// Total number of lookups (`get`, `get_mut`)
    pub requests: u64,

    /// Lookups that found the key
    pub cache_hits: u64,

    /// New keys stored in the cache
    pub insertions: u64,

    /// Puts that replaced the value of an existing key
    pub updates: u64,

    /// Entries removed to make room for a new key, or by `pop`
    pub evictions: u64,

    /// Inserts dropped because the cache has zero capacity
    pub rejections: u64,
}

impl CoreCacheMetrics {
    /// Records a lookup that found its key.
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a lookup that missed.
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records a new key being stored.
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Records a put on an existing key.
    pub fn record_update(&mut self) {
        self.updates += 1;
    }

    /// Records an eviction.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Records an insert dropped by a zero-capacity cache.
    pub fn record_rejection(&mut self) {
        self.rejections += 1;
    }

    /// Number of lookups that missed.
    pub fn cache_misses(&self) -> u64 {
        self.requests - self.cache_hits
    }

    /// Fraction of lookups that hit, or 0.0 before the first lookup.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of lookups that missed, or 0.0 before the first lookup.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_misses() as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Converts the counters to a map with deterministic key order.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert("cache_misses".to_string(), self.cache_misses() as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("rejections".to_string(), self.rejections as f64);
        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("updates".to_string(), self.updates as f64);

        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        metrics
    }
}

/// Uniform metrics reporting interface.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Algorithm name for identification, e.g. `"LFU"`.
    fn algorithm_name(&self) -> &'static str;
}
