//! Lookup Service
//!
//! Answers "what does this abbreviation mean" by checking the TTL cache and
//! falling back to the remote guess API on a miss.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::{CacheStats, TtlCache};
use crate::client::RemoteLookup;
use crate::models::LookupResult;

/// Orchestrates cache lookups and remote calls.
///
/// Cache keys are the trimmed, lower-cased keyword. Only successful remote
/// answers are cached, so a failed call is retried on the next lookup.
/// Concurrent misses for the same key may each call the remote API; the
/// last write wins.
pub struct LookupService {
    remote: Arc<dyn RemoteLookup>,
    cache: TtlCache<Arc<LookupResult>>,
}

impl LookupService {
    // == Constructor ==
    /// Creates a service answering from `cache` first and `remote` on a miss.
    pub fn new(remote: Arc<dyn RemoteLookup>, cache: TtlCache<Arc<LookupResult>>) -> Self {
        Self { remote, cache }
    }

    // == Lookup ==
    /// Returns the meanings of `keyword`, from cache when possible.
    ///
    /// Returns `None` for a blank keyword and for any remote failure or
    /// empty answer.
    pub async fn lookup(&self, keyword: &str) -> Option<Arc<LookupResult>> {
        let trimmed = keyword.trim();
        if trimmed.is_empty() {
            return None;
        }

        let cache_key = trimmed.to_lowercase();
        if let Some(cached) = self.cache.get(&cache_key) {
            debug!("nbnhhsh cache hit for {}", trimmed);
            return Some(cached);
        }

        let payload = match self.remote.guess(trimmed).await {
            Ok(Some(payload)) if !is_empty_payload(&payload) => payload,
            Ok(_) => {
                debug!("nbnhhsh has no guess for {}", trimmed);
                return None;
            }
            Err(e) => {
                warn!("nbnhhsh lookup failed for {}: {}", trimmed, e);
                return None;
            }
        };

        let result = Arc::new(LookupResult::from_payload(payload, trimmed));
        self.cache.set(cache_key, Arc::clone(&result));
        Some(result)
    }

    // == Clear Cache ==
    /// Forgets every cached result.
    pub fn clear_cache(&self) {
        self.cache.clear();
        debug!("nbnhhsh cache cleared");
    }

    // == Cleanup Cache ==
    /// Sweeps stale results. Returns how many were removed.
    pub fn cleanup_cache(&self) -> usize {
        self.cache.cleanup()
    }

    // == Cache Stats ==
    /// Returns a snapshot of the result cache statistics.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

/// Null and `{}` carry no guess and are treated like no answer at all.
fn is_empty_payload(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    }
}
