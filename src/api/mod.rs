//! API Module
//!
//! HTTP handlers and routing for the lookup service REST API.
//!
//! # Endpoints
//! - `GET /lookup/:keyword` - Look up one abbreviation
//! - `POST /query` - Answer a chat question
//! - `POST /cache/clear` - Clear the result cache
//! - `POST /cache/cleanup` - Sweep expired results
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
