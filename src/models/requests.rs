//! Request DTOs for the lookup API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for the free-text query operation (POST /query)
///
/// # Fields
/// - `message`: A chat message such as `hhh是什么`
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    /// The raw chat message
    pub message: String,
}

impl QueryRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.message.trim().is_empty() {
            return Some("Message cannot be empty".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_request_deserialize() {
        let json = r#"{"message": "yyds是什么"}"#;
        let req: QueryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.message, "yyds是什么");
    }

    #[test]
    fn test_validate_blank_message() {
        let req = QueryRequest {
            message: "   ".to_string(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_valid_request() {
        let req = QueryRequest {
            message: "hhh是啥".to_string(),
        };
        assert!(req.validate().is_none());
    }
}
