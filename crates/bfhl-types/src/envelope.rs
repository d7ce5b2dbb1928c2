//! The uniform JSON response envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DispatchError;
use crate::operation::OperationOutput;

/// Every response body of the service.
///
/// `data` is present only on success and `error` only on failure; the
/// health response carries neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Whether the request succeeded.
    pub is_success: bool,
    /// The configured identifying address.
    pub official_email: String,
    /// Operation result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Failure message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponseEnvelope {
    /// A liveness response: success with neither `data` nor `error`.
    pub fn health(official_email: impl Into<String>) -> Self {
        Self {
            is_success: true,
            official_email: official_email.into(),
            data: None,
            error: None,
        }
    }

    /// A success response carrying `output`.
    pub fn success(official_email: impl Into<String>, output: OperationOutput) -> Self {
        Self {
            is_success: true,
            official_email: official_email.into(),
            data: Some(output.into()),
            error: None,
        }
    }

    /// A failure response carrying `message`.
    pub fn failure(official_email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            official_email: official_email.into(),
            data: None,
            error: Some(message.into()),
        }
    }

    /// A failure response for a rejected request.
    pub fn from_error(official_email: impl Into<String>, err: &DispatchError) -> Self {
        Self::failure(official_email, err.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn health_omits_data_and_error() {
        let v = serde_json::to_value(ResponseEnvelope::health("me@example.com")).expect("ser");
        assert_eq!(v, json!({"is_success": true, "official_email": "me@example.com"}));
    }

    #[test]
    fn success_has_data_only() {
        let env = ResponseEnvelope::success("e", OperationOutput::Integer(12));
        let v = serde_json::to_value(&env).expect("ser");
        assert_eq!(v["data"], 12);
        assert!(v.get("error").is_none());
    }

    #[test]
    fn failure_has_error_only() {
        let env = ResponseEnvelope::failure("e", "Invalid key");
        let v = serde_json::to_value(&env).expect("ser");
        assert_eq!(v["is_success"], false);
        assert_eq!(v["error"], "Invalid key");
        assert!(v.get("data").is_none());
    }

    #[test]
    fn envelope_deserializes_from_wire() {
        let env: ResponseEnvelope = serde_json::from_str(
            r#"{"is_success":true,"official_email":"a@b.c","data":[2,3,5,7]}"#,
        )
        .expect("de");
        assert_eq!(env.data, Some(json!([2, 3, 5, 7])));
        assert!(env.error.is_none());
    }
}
