//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with expiry support.

use std::cmp::Ordering;
use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// Represents a single cache entry with its value and expiry deadline.
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Expiration deadline, None = never expires
    pub expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry expiring `ttl_seconds` after `now`.
    ///
    /// A TTL of zero or less produces an entry that never expires.
    pub fn new(value: V, ttl_seconds: i64, now: Instant) -> Self {
        let expires_at = if ttl_seconds > 0 {
            now.checked_add(Duration::from_secs(ttl_seconds as u64))
        } else {
            None
        };

        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks if the entry is stale at `now`.
    ///
    /// Boundary condition: an entry whose deadline equals `now` is already
    /// expired, so once the TTL has fully elapsed the entry is gone.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }
}

// == Expiry Ordering ==
/// Orders two deadlines so that `None` (never expires) sorts after every
/// finite deadline.
pub(crate) fn cmp_expiry(a: Option<Instant>, b: Option<Instant>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
