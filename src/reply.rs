//! Reply Formatting
//!
//! Turns chat messages into keywords and lookup results into reply text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::LookupResult;

/// Reply sent after the cache has been cleared
pub const CACHE_CLEARED_REPLY: &str = "nbnhhsh 缓存已清理";

static QUERY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?P<keyword>[a-z0-9]{2,})(?:是什么意思|是什么|是啥)[?？]?$")
        .expect("Invalid query pattern regex")
});

/// Extracts the abbreviation from a question like `yyds是什么？`.
///
/// The whole (trimmed) message must be the question; anything else yields None.
pub fn extract_keyword(message: &str) -> Option<&str> {
    QUERY_PATTERN
        .captures(message.trim())
        .and_then(|caps| caps.name("keyword"))
        .map(|m| m.as_str())
}

/// Joins candidate meanings: `a`, `a，或者 b`, `a，b，或者 c`.
pub fn format_translations(translations: &[String]) -> String {
    match translations {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{}，或者 {}", head.join("，"), last),
    }
}

/// Formats the reply for a result with at least one meaning.
pub fn build_reply(result: &LookupResult) -> String {
    format!(
        "{} 可能是: {}",
        result.keyword,
        format_translations(&result.translations)
    )
}

/// Formats the reply sent when no meaning is known for `keyword`.
pub fn not_found_reply(keyword: &str) -> String {
    format!("没能找到 {} 的含义", keyword)
}

/// Picks the reply for a lookup outcome. A result without meanings counts as
/// not found.
pub fn reply_for(keyword: &str, result: Option<&LookupResult>) -> String {
    match result {
        Some(result) if result.has_translations() => build_reply(result),
        _ => not_found_reply(keyword),
    }
}
