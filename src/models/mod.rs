//! Domain types and request/response models for the lookup API
//!
//! This module defines the lookup result shared with the cache and the DTOs
//! used for serializing/deserializing HTTP request and response bodies.

pub mod lookup;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use lookup::{GuessPayload, LookupResult};
pub use requests::QueryRequest;
pub use responses::{
    ErrorResponse, HealthResponse, LookupResponse, MessageResponse, QueryResponse, StatsResponse,
};
