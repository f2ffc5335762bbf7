//! LFU Cache Metrics
//!
//! Metrics specific to the LFU (Least Frequently Used) cache algorithm.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Point-in-time view of the frequency blocks, filled in by the cache when
/// metrics are reported.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyLevels {
    /// Live entries
    pub len: usize,
    /// Configured capacity
    pub capacity: usize,
    /// Number of distinct frequencies currently present
    pub active_levels: usize,
    /// Frequency of the eviction candidate, 0 when empty
    pub min_frequency: usize,
    /// Frequency of the highest-ranked entry, 0 when empty
    pub max_frequency: usize,
}

/// LFU-specific metrics (extends [`CoreCacheMetrics`]).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LfuCacheMetrics {
    /// Core metrics common to all cache algorithms
    pub core: CoreCacheMetrics,

    /// Total number of frequency increments (every hit and every update)
    pub total_frequency_increments: u64,

    /// Last frequency snapshot taken from the cache
    pub levels: FrequencyLevels,
}

impl LfuCacheMetrics {
    /// Creates empty metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one frequency bump.
    pub fn record_frequency_increment(&mut self) {
        self.total_frequency_increments += 1;
    }

    /// Fraction of the capacity in use, or 0.0 for a zero-capacity cache.
    pub fn utilization(&self) -> f64 {
        if self.levels.capacity > 0 {
            self.levels.len as f64 / self.levels.capacity as f64
        } else {
            0.0
        }
    }

    /// Converts LFU metrics to a map with deterministic key order.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();

        metrics.insert(
            "total_frequency_increments".to_string(),
            self.total_frequency_increments as f64,
        );
        metrics.insert(
            "active_frequency_levels".to_string(),
            self.levels.active_levels as f64,
        );
        metrics.insert("min_frequency".to_string(), self.levels.min_frequency as f64);
        metrics.insert("max_frequency".to_string(), self.levels.max_frequency as f64);
        metrics.insert("len".to_string(), self.levels.len as f64);
        metrics.insert("capacity".to_string(), self.levels.capacity as f64);
        metrics.insert("utilization".to_string(), self.utilization());

        metrics
    }
}

impl CacheMetrics for LfuCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LFU"
    }
}
