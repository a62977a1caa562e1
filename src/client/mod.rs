//! Remote Lookup Module
//!
//! The guess API is the only I/O the lookup flow performs. It sits behind the
//! `RemoteLookup` trait so the service can be driven by a fake in tests.

mod http;

pub use http::NbnhhshClient;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::LookupError;

/// Contract of the remote abbreviation guesser.
#[async_trait]
pub trait RemoteLookup: Send + Sync {
    /// Looks up one trimmed keyword.
    ///
    /// # Returns
    /// - `Ok(Some(payload))` with the first guess object for the keyword
    /// - `Ok(None)` if the API has nothing for it
    /// - `Err(_)` on transport, status or decoding failures
    async fn guess(&self, keyword: &str) -> Result<Option<Value>, LookupError>;
}
