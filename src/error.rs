//! Error types for evictkit.
//!
//! Normal cache use never fails: a missing key is `None`, and `put_opt`
//! with a missing key or value is ignored. Errors only surface in two places:
//!
//! - [`ConfigError`]: a construction parameter was rejected (zero capacity
//!   through a `try_*` constructor, an unknown policy name).
//! - [`InvariantError`]: `check_invariants` found the store and the policy
//!   tracker out of sync. This is a bug in the crate, never a user error.
//!
//! ## Example
//!
//! ```
//! use evictkit::error::ConfigError;
//! use evictkit::LruCache;
//!
//! let cache: Result<LruCache<&str, i32>, ConfigError> = LruCache::try_with_capacity(4);
//! assert!(cache.is_ok());
//!
//! let bad = LruCache::<&str, i32>::try_with_capacity(0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Returned by `check_invariants` when the store and tracker disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cache invariant violated: {}", self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Returned when a cache cannot be built from the given parameters.
///
/// # Example
///
/// ```
/// use evictkit::builder::CachePolicy;
///
/// let err = "clock".parse::<CachePolicy>().unwrap_err();
/// assert!(err.to_string().contains("clock"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }

    pub(crate) fn zero_capacity() -> Self {
        Self::new("capacity must be greater than zero")
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}
