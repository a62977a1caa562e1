//! Cache Module
//!
//! Provides an in-memory cache with lazy TTL expiry and expiry-ordered eviction.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use stats::CacheStats;
pub use store::TtlCache;
