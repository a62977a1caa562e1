//! nbnhhsh - abbreviation lookup service
//!
//! Answers "what does this abbreviation mean" through the nbnhhsh guess API,
//! with a TTL cache in front of it.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod reply;
pub mod service;

pub use api::AppState;
pub use cache::TtlCache;
pub use client::{NbnhhshClient, RemoteLookup};
pub use config::Config;
pub use models::LookupResult;
pub use service::LookupService;
