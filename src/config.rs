//! Configuration for the LFU cache.
//!
//! Configuration structs have public fields so they can be built with plain
//! struct syntax. [`LfuCacheConfig::default`] gives a cache of
//! [`DEFAULT_CAPACITY`] entries.
//!
//! # Examples
//!
//! ```
//! use lfucache::config::LfuCacheConfig;
//! use lfucache::LfuCache;
//!
//! let config = LfuCacheConfig { capacity: 1000 };
//! let cache: LfuCache<String, i32> = LfuCache::init(config, None);
//! assert_eq!(cache.cap(), 1000);
//!
//! let cache: LfuCache<String, i32> = LfuCache::init(LfuCacheConfig::default(), None);
//! assert_eq!(cache.cap(), 5);
//! ```

use core::fmt;

/// Capacity used when none is given.
pub const DEFAULT_CAPACITY: usize = 5;

/// Configuration for an LFU (Least Frequently Used) cache.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries. Zero is allowed and produces a
///   cache that rejects every insertion.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LfuCacheConfig {
    /// Maximum number of key-value pairs the cache can hold
    pub capacity: usize,
}

impl LfuCacheConfig {
    /// Creates a configuration with the given capacity.
    pub const fn new(capacity: usize) -> Self {
        LfuCacheConfig { capacity }
    }
}

impl Default for LfuCacheConfig {
    fn default() -> Self {
        LfuCacheConfig::new(DEFAULT_CAPACITY)
    }
}

impl fmt::Debug for LfuCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
