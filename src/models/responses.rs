//! Response DTOs for the lookup API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::models::LookupResult;

/// Response body for a successful lookup (GET /lookup/:keyword)
#[derive(Debug, Clone, Serialize)]
pub struct LookupResponse {
    /// Display form of the abbreviation
    pub keyword: String,
    /// Candidate meanings
    pub translations: Vec<String>,
    /// Formatted reply text
    pub reply: String,
}

impl LookupResponse {
    /// Creates a new LookupResponse
    pub fn new(result: &LookupResult, reply: impl Into<String>) -> Self {
        Self {
            keyword: result.keyword.clone(),
            translations: result.translations.clone(),
            reply: reply.into(),
        }
    }
}

/// Response body for the free-text query operation (POST /query)
#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    /// Keyword extracted from the message
    pub keyword: String,
    /// Whether any meaning was found
    pub found: bool,
    /// Reply text, either the meanings or a not-found notice
    pub reply: String,
}

impl QueryResponse {
    /// Creates a new QueryResponse
    pub fn new(keyword: impl Into<String>, found: bool, reply: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            found,
            reply: reply.into(),
        }
    }
}

/// Response body for cache maintenance operations
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Human-readable outcome
    pub message: String,
}

impl MessageResponse {
    /// Creates a new MessageResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of live entries evicted by the size limit
    pub evictions: u64,
    /// Number of stale entries removed
    pub expirations: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
