//! Lookup domain types
//!
//! The remote API answers with loosely-typed JSON. `GuessPayload` decodes the
//! fields the service needs without ever rejecting a payload.

use serde::Serialize;
use serde_json::Value;

// == Guess Payload ==
/// Defensively decoded view of one remote guess object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessPayload {
    /// Canonical spelling reported by the API, if any
    pub name: Option<String>,
    /// Non-empty, trimmed candidate translations in API order
    pub translations: Vec<String>,
}

impl GuessPayload {
    /// Decodes `name` and `trans` from a raw payload.
    ///
    /// Missing or malformed fields fall back to `None` / an empty list.
    pub fn from_value(raw: &Value) -> Self {
        let name = raw
            .get("name")
            .and_then(scalar_to_string)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let translations = match raw.get("trans") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(scalar_to_string)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            _ => Vec::new(),
        };

        Self { name, translations }
    }
}

/// Stringifies JSON scalars; null, arrays and objects yield None.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

// == Lookup Result ==
/// Result of a successful lookup, shared between the cache and callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupResult {
    /// Display form of the abbreviation
    pub keyword: String,
    /// Candidate meanings, possibly empty
    pub translations: Vec<String>,
    /// Untouched payload from the remote API
    pub raw: Value,
}

impl LookupResult {
    /// Builds a result from a remote payload, using `fallback_keyword` when
    /// the payload carries no usable name.
    pub fn from_payload(raw: Value, fallback_keyword: &str) -> Self {
        let payload = GuessPayload::from_value(&raw);
        Self {
            keyword: payload
                .name
                .unwrap_or_else(|| fallback_keyword.to_string()),
            translations: payload.translations,
            raw,
        }
    }

    /// True when the API knows at least one meaning.
    pub fn has_translations(&self) -> bool {
        !self.translations.is_empty()
    }
}
