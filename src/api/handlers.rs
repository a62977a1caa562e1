//! API Handlers
//!
//! HTTP request handlers for each lookup service endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::cache::TtlCache;
use crate::client::RemoteLookup;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    HealthResponse, LookupResponse, MessageResponse, QueryRequest, QueryResponse, StatsResponse,
};
use crate::reply::{build_reply, extract_keyword, not_found_reply, reply_for, CACHE_CLEARED_REPLY};
use crate::service::LookupService;

/// Application state shared across all handlers.
///
/// The service synchronizes its own cache, so no outer lock is needed.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<LookupService>,
}

impl AppState {
    /// Creates a new AppState around a lookup service.
    pub fn new(service: LookupService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the result cache with the configured TTL and size limit.
    pub fn from_config(config: &Config, remote: Arc<dyn RemoteLookup>) -> Self {
        let cache = TtlCache::new(config.cache_ttl, config.cache_max_size);
        Self::new(LookupService::new(remote, cache))
    }
}

/// Handler for GET /lookup/:keyword
///
/// Returns the meanings of one abbreviation, or 404 with the not-found reply.
pub async fn lookup_handler(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> Result<Json<LookupResponse>> {
    let keyword = keyword.trim();
    match state.service.lookup(keyword).await {
        Some(result) if result.has_translations() => {
            let reply = build_reply(&result);
            Ok(Json(LookupResponse::new(&result, reply)))
        }
        _ => Err(ApiError::NotFound(not_found_reply(keyword))),
    }
}

/// Handler for POST /query
///
/// Answers a chat message shaped like `hhh是什么`.
pub async fn query_handler(
    State(state): State<AppState>,
    Json(req): Json<QueryRequest>,
) -> Result<Json<QueryResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let keyword = extract_keyword(&req.message).ok_or_else(|| {
        ApiError::InvalidRequest("Message is not an abbreviation question".to_string())
    })?;
    info!("nbnhhsh received keyword: {}", keyword);

    let result = state.service.lookup(keyword).await;
    let found = result.as_ref().is_some_and(|r| r.has_translations());
    let reply = reply_for(keyword, result.as_deref());

    Ok(Json(QueryResponse::new(keyword, found, reply)))
}

/// Handler for POST /cache/clear
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<MessageResponse> {
    state.service.clear_cache();
    info!("nbnhhsh cache cleared on request");
    Json(MessageResponse::new(CACHE_CLEARED_REPLY))
}

/// Handler for POST /cache/cleanup
///
/// Sweeps expired results without touching live ones.
pub async fn cleanup_cache_handler(State(state): State<AppState>) -> Json<MessageResponse> {
    let removed = state.service.cleanup_cache();
    Json(MessageResponse::new(format!(
        "Removed {} expired entries",
        removed
    )))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.service.cache_stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
