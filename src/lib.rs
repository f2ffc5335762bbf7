//! An O(1) Least Frequently Used (LFU) cache.
//!
//! [`LfuCache`] keeps at most `capacity` entries. When a new key arrives at
//! full capacity it evicts the entry with the lowest access count, and among
//! entries tied on count, the one touched least recently. Lookups, inserts,
//! updates and evictions all run in constant time, and memory is
//! proportional to the capacity.
//!
//! ```rust
//! use lfucache::{CacheError, LfuCache};
//!
//! let mut cache = LfuCache::new(2);
//! cache.put("apple", 3);
//! cache.put("banana", 5);
//!
//! // Reads count as accesses.
//! assert_eq!(cache.get(&"apple"), Ok(&3));
//! assert_eq!(cache.frequency(&"apple"), Ok(2));
//!
//! // "banana" has the lowest frequency and is evicted.
//! cache.put("cherry", 7);
//! assert_eq!(cache.get(&"banana"), Err(CacheError::NotFound));
//!
//! // Entries are listed by descending frequency, most recent first.
//! let ranked: Vec<_> = cache.iter().map(|(k, _)| *k).collect();
//! assert_eq!(ranked, ["apple", "cherry"]);
//! ```
//!
//! ## How it works
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │  key index            frequency index                                │
//! │  HashMap<K, NodeId>   HashMap<freq, { front: NodeId, len }>          │
//! │        │                     │                                       │
//! │        ▼                     ▼                                       │
//! │  ┌───┐  ┌─────┬─────┐  ┌─────┬─────┬─────┐  ┌─────┐  ┌───┐          │
//! │  │ S │─▶│ f=3 │ f=3 │─▶│ f=2 │ f=2 │ f=2 │─▶│ f=1 │─▶│ S │          │
//! │  └───┘  └─────┴─────┘  └─────┴─────┴─────┘  └─────┘  └───┘          │
//! │         highest rank                         eviction candidate      │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entries live in a single arena-backed ring ([`list::List`]) cut into one
//! contiguous block per frequency. An access moves the entry to the front
//! of the next block up, so the back of the ring is always the entry to
//! evict.
//!
//! ## Thread safety
//!
//! The cache has no internal locking. Wrap it in a mutex, or keep it on one
//! thread, when it must be shared.
//!
//! ## Modules
//!
//! - [`lfu`]: the cache
//! - [`list`]: arena-backed circular linked list the cache is built on
//! - [`config`]: configuration and the default capacity
//! - [`entry`]: the stored entry type
//! - [`error`]: lookup errors
//! - [`metrics`]: hit/miss/eviction counters

#![no_std]

#[cfg(all(not(feature = "hashbrown"), not(feature = "std")))]
compile_error!("either the `hashbrown` or the `std` feature must be enabled");

#[cfg(not(feature = "hashbrown"))]
extern crate std;

/// Cache configuration.
pub mod config;

/// Key, value and frequency of one cached item.
pub mod entry;

/// Error returned by lookups that miss.
pub mod error;

/// Least Frequently Used (LFU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least frequently used entry,
/// breaking ties by recency, when capacity is reached.
pub mod lfu;

/// Arena-backed circular doubly linked list with O(1) splicing.
pub mod list;

/// Cache metrics system.
///
/// Provides counters for hits, misses, insertions and evictions, reported
/// through the [`CacheMetrics`](metrics::CacheMetrics) trait.
pub mod metrics;

pub use config::LfuCacheConfig;
pub use entry::CacheEntry;
pub use error::CacheError;
pub use lfu::LfuCache;
pub use metrics::CacheMetrics;
