//! Cache entry type.
//!
//! Every live key in an [`LfuCache`](crate::LfuCache) is stored as one
//! `CacheEntry` inside the cache's list. The key is fixed at insertion, the
//! value may be replaced by later puts, and the frequency counts accesses.

use core::fmt;

/// A key-value pair plus its access frequency.
///
/// The frequency starts at 1 when the entry is inserted and is incremented
/// on every `get`, `get_mut`, or `put` that hits the key. It never decreases.
///
/// # Examples
///
/// ```
/// use lfucache::CacheEntry;
///
/// let entry = CacheEntry::new("key", 42);
/// assert_eq!(entry.key(), &"key");
/// assert_eq!(entry.value(), &42);
/// assert_eq!(entry.frequency(), 1);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct CacheEntry<K, V> {
    key: K,
    pub(crate) value: V,
    pub(crate) frequency: usize,
}

impl<K, V> CacheEntry<K, V> {
    /// Creates an entry with frequency 1.
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        CacheEntry {
            key,
            value,
            frequency: 1,
        }
    }

    /// Returns the key.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the access frequency.
    #[inline]
    pub fn frequency(&self) -> usize {
        self.frequency
    }

    /// Consumes the entry, returning the key and value.
    #[inline]
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for CacheEntry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("frequency", &self.frequency)
            .finish()
    }
}
