//! Error type returned by fallible cache lookups.

use thiserror::Error;

/// Errors returned by [`LfuCache`](crate::LfuCache) lookups.
///
/// Broken preconditions, such as removing from an empty list, are bugs in
/// the caller and panic instead of producing a `CacheError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum CacheError {
    /// The key has no live entry in the cache.
    #[error("key not found")]
    NotFound,
}
