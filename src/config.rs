//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Default base URL of the nbnhhsh guess API
pub const DEFAULT_API_URL: &str = "https://lab.magiconch.com/api/nbnhhsh/";

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the remote guess API
    pub api_url: String,
    /// Per-request timeout for the remote API in seconds
    pub request_timeout: f64,
    /// Cache TTL in seconds, `<= 0` keeps results forever
    pub cache_ttl: i64,
    /// Soft maximum number of cached results, 0 = unbounded
    pub cache_max_size: usize,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `NBNHHSH_API_URL` - Remote API base URL (default: magiconch lab endpoint)
    /// - `REQUEST_TIMEOUT` - Remote call timeout in seconds (default: 10)
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 3600)
    /// - `CACHE_MAX_SIZE` - Maximum cached results (default: 1024)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: env::var("NBNHHSH_API_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.api_url),
            request_timeout: env_or("REQUEST_TIMEOUT", defaults.request_timeout),
            cache_ttl: env_or("CACHE_TTL", defaults.cache_ttl),
            cache_max_size: env_or("CACHE_MAX_SIZE", defaults.cache_max_size),
            server_port: env_or("SERVER_PORT", defaults.server_port),
        }
    }

    /// Returns the remote call timeout, falling back to the default for
    /// non-positive or non-finite values.
    pub fn timeout(&self) -> Duration {
        if self.request_timeout.is_finite() && self.request_timeout > 0.0 {
            Duration::from_secs_f64(self.request_timeout)
        } else {
            Duration::from_secs_f64(Self::default().request_timeout)
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: 10.0,
            cache_ttl: 3600,
            cache_max_size: 1024,
            server_port: 3000,
        }
    }
}
