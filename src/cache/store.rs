//! Cache Store Module
//!
//! TTL cache combining HashMap storage with lazy expiry and a soft size limit.

use std::collections::HashMap;

use parking_lot::Mutex;
use tokio::time::Instant;
use tracing::debug;

use crate::cache::entry::{cmp_expiry, CacheEntry};
use crate::cache::CacheStats;

// == TTL Cache ==
/// In-memory key-value store with a fixed TTL and an optional soft maximum
/// entry count.
///
/// Stale entries are never removed by a timer. They linger until a `get`
/// observes them, a `set` pushes the store over its limit, or `cleanup` is
/// called explicitly.
///
/// All operations take `&self`; the store is guarded by a single mutex and
/// never blocks on I/O while holding it.
#[derive(Debug)]
pub struct TtlCache<V> {
    inner: Mutex<Inner<V>>,
    /// TTL in seconds applied on every write, `<= 0` = never expire
    ttl_seconds: i64,
    /// Soft maximum number of entries, 0 = unbounded
    max_size: usize,
}

#[derive(Debug)]
struct Inner<V> {
    entries: HashMap<String, CacheEntry<V>>,
    stats: CacheStats,
}

impl<V: Clone> TtlCache<V> {
    // == Constructor ==
    /// Creates an empty cache.
    ///
    /// # Arguments
    /// * `ttl_seconds` - Lifetime of each write; zero or negative disables expiry
    /// * `max_size` - Soft entry limit enforced on write; zero disables it
    pub fn new(ttl_seconds: i64, max_size: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                stats: CacheStats::new(),
            }),
            ttl_seconds,
            max_size,
        }
    }

    // == Get ==
    /// Returns the value stored under `key` if it has not expired.
    ///
    /// An expired entry is removed as a side effect.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        let expired = match inner.entries.get(key) {
            Some(entry) if !entry.is_expired_at(now) => {
                let value = entry.value.clone();
                inner.stats.record_hit();
                return Some(value);
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            inner.entries.remove(key);
            inner.stats.record_expirations(1);
            let len = inner.entries.len();
            inner.stats.set_total_entries(len);
        }
        inner.stats.record_miss();
        None
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous value and expiry.
    ///
    /// If the store then holds more than `max_size` entries, stale entries are
    /// swept first and the entries expiring soonest are evicted until the
    /// limit holds again. Equal deadlines evict the smallest key first.
    pub fn set(&self, key: impl Into<String>, value: V) {
        let now = Instant::now();
        let entry = CacheEntry::new(value, self.ttl_seconds, now);

        let mut inner = self.inner.lock();
        inner.entries.insert(key.into(), entry);

        if self.max_size > 0 && inner.entries.len() > self.max_size {
            inner.enforce_limit(self.max_size, now);
        }

        let len = inner.entries.len();
        inner.stats.set_total_entries(len);
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.entries.clear();
        inner.stats.set_total_entries(0);
    }

    // == Cleanup ==
    /// Removes every entry that has expired by now.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup(&self) -> usize {
        let now = Instant::now();
        let mut inner = self.inner.lock();
        let removed = inner.cleanup_at(now);
        let len = inner.entries.len();
        inner.stats.set_total_entries(len);
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        let mut stats = inner.stats.clone();
        stats.set_total_entries(inner.entries.len());
        stats
    }

    // == Length ==
    /// Returns the number of physically stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    // == Is Empty ==
    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }

    // == TTL ==
    /// Returns the configured TTL in seconds.
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    // == Max Size ==
    /// Returns the configured soft entry limit.
    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

impl<V> Inner<V> {
    fn cleanup_at(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        let removed = before - self.entries.len();
        self.stats.record_expirations(removed);
        removed
    }

    fn enforce_limit(&mut self, max_size: usize, now: Instant) {
        let swept = self.cleanup_at(now);

        let mut evicted = 0usize;
        while self.entries.len() > max_size {
            let victim = self
                .entries
                .iter()
                .min_by(|(key_a, a), (key_b, b)| {
                    cmp_expiry(a.expires_at, b.expires_at).then_with(|| key_a.cmp(key_b))
                })
                .map(|(key, _)| key.clone());

            match victim {
                Some(key) => {
                    self.entries.remove(&key);
                    self.stats.record_eviction();
                    evicted += 1;
                }
                None => break,
            }
        }

        debug!(
            "Cache over limit of {}: swept {} stale, evicted {} live entries",
            max_size, swept, evicted
        );
    }
}
