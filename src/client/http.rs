//! nbnhhsh HTTP Client
//!
//! Calls `POST {base}guess` with `{"text": keyword}` and returns the first
//! guess object of the JSON array the API answers with.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use super::RemoteLookup;
use crate::error::LookupError;

/// HTTP client for the nbnhhsh guess API.
///
/// Only a non-empty object in first position counts as a guess.
///
/// Owns a pooled `reqwest::Client` between `start` and `shutdown`. Calling
/// `guess` before `start` initializes the pool on first use.
#[derive(Debug)]
pub struct NbnhhshClient {
    /// Base URL, always ending in exactly one `/`
    base_url: String,
    timeout: Duration,
    client: RwLock<Option<reqwest::Client>>,
}

impl NbnhhshClient {
    /// Creates a client without opening any connection.
    pub fn new(base_url: impl AsRef<str>, timeout: Duration) -> Self {
        Self {
            base_url: format!("{}/", base_url.as_ref().trim_end_matches('/')),
            timeout,
            client: RwLock::new(None),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns true between `start` and `shutdown`.
    pub async fn is_started(&self) -> bool {
        self.client.read().await.is_some()
    }

    // == Start ==
    /// Builds the connection pool. Does nothing if already started.
    pub async fn start(&self) -> Result<(), LookupError> {
        self.http_client().await.map(|_| ())
    }

    // == Shutdown ==
    /// Drops the connection pool. Does nothing if not started.
    pub async fn shutdown(&self) {
        if self.client.write().await.take().is_some() {
            info!("nbnhhsh client shut down");
        }
    }

    async fn http_client(&self) -> Result<reqwest::Client, LookupError> {
        if let Some(client) = self.client.read().await.as_ref() {
            return Ok(client.clone());
        }

        let mut slot = self.client.write().await;
        if let Some(client) = slot.as_ref() {
            return Ok(client.clone());
        }

        let client = reqwest::Client::builder().timeout(self.timeout).build()?;
        info!(
            "nbnhhsh client started for {} (timeout {:?})",
            self.base_url, self.timeout
        );
        *slot = Some(client.clone());
        Ok(client)
    }
}

#[async_trait]
impl RemoteLookup for NbnhhshClient {
    #[instrument(skip(self))]
    async fn guess(&self, keyword: &str) -> Result<Option<Value>, LookupError> {
        if keyword.is_empty() {
            return Ok(None);
        }

        let client = self.http_client().await?;
        let url = format!("{}guess", self.base_url);
        debug!("Sending guess request to {}", url);

        let response = client
            .post(&url)
            .json(&json!({ "text": keyword }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        let body = response.bytes().await?;
        let data: Value =
            serde_json::from_slice(&body).map_err(|e| LookupError::Decode(e.to_string()))?;

        match data {
            Value::Array(mut items)
                if items
                    .first()
                    .and_then(Value::as_object)
                    .is_some_and(|fields| !fields.is_empty()) =>
            {
                Ok(Some(items.swap_remove(0)))
            }
            _ => Ok(None),
        }
    }
}
