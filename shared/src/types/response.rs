//! API response envelope types.
//!
//! All JSON endpoints answer with a `{ "data": { "message": ... } }` body;
//! validation failures additionally carry the list of offending field names.

use serde::{Deserialize, Serialize};

/// Inner payload of a message response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    /// Human-readable outcome message
    pub message: String,

    /// Field names that failed validation (present on validation errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

/// Standard JSON response envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub data: MessageBody,
}

impl MessageResponse {
    /// Create a plain message response
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            data: MessageBody {
                message: message.into(),
                fields: None,
            },
        }
    }

    /// Create a message response carrying failed field names
    pub fn with_fields(message: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            data: MessageBody {
                message: message.into(),
                fields: Some(fields),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_message_skips_fields() {
        let response = MessageResponse::new("Success");
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"data":{"message":"Success"}}"#);
    }

    #[test]
    fn test_fields_are_serialized_when_present() {
        let response = MessageResponse::with_fields(
            "Field validation failed.",
            vec!["contact_email".to_string()],
        );
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""fields":["contact_email"]"#));
    }

    #[test]
    fn test_round_trip() {
        let response = MessageResponse::with_fields("bad", vec!["a".into(), "b".into()]);
        let json = serde_json::to_string(&response).unwrap();
        let parsed: MessageResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response, parsed);
    }
}
