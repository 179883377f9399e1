//! Error taxonomy for backend calls and client-side form checks

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Shown for transport failures
pub const CONNECTION_ERROR: &str = "Connection error. Is the server running?";

/// Shown when an authenticated call returns 401
pub const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";

/// Failure of one backend call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// 401 from the backend
    #[error("authentication required")]
    Unauthorized,

    /// Any other non-2xx response
    #[error("server returned {status}")]
    Server {
        status: u16,
        message: Option<String>,
    },

    /// 2xx response whose body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a response. `None` means the status is a success.
    pub fn from_response(status: u16, body: &str) -> Option<Self> {
        match status {
            200..=299 => None,
            401 => Some(ApiError::Unauthorized),
            _ => Some(ApiError::Server {
                status,
                message: server_message(body),
            }),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Message for the user. `fallback` is used when the server gave none.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Network(_) => CONNECTION_ERROR.to_string(),
            ApiError::Unauthorized => SESSION_EXPIRED.to_string(),
            ApiError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Server { message: None, .. } | ApiError::Decode(_) => fallback.to_string(),
        }
    }
}

/// Decode a successful response body
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pull a human readable message out of an error body.
///
/// Looks at `error`, `message` and `detail` first, then at the first string
/// of the first field-error list (`{"email": ["already taken"]}`).
pub fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;

    for key in ["error", "message", "detail"] {
        if let Some(text) = object.get(key).and_then(Value::as_str) {
            let text = text.trim();
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }

    object.values().find_map(|field| match field {
        Value::Array(items) => items
            .iter()
            .find_map(Value::as_str)
            .map(str::to_string),
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        _ => None,
    })
}

/// Client-side form check failures, caught before any request is sent
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Please enter a valid YouTube link")]
    InvalidVideoUrl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_statuses_are_not_errors() {
        assert_eq!(ApiError::from_response(200, ""), None);
        assert_eq!(ApiError::from_response(201, "{}"), None);
        assert_eq!(ApiError::from_response(204, ""), None);
    }

    #[test]
    fn test_unauthorized_status() {
        let err = ApiError::from_response(401, r#"{"detail": "Token expired"}"#).unwrap();
        assert!(err.is_unauthorized());
        assert_eq!(err.user_message("ignored"), SESSION_EXPIRED);
    }

    #[test]
    fn test_server_error_with_message() {
        let err = ApiError::from_response(400, r#"{"error": "Falta URL"}"#).unwrap();
        assert_eq!(
            err,
            ApiError::Server {
                status: 400,
                message: Some("Falta URL".to_string())
            }
        );
        assert_eq!(err.user_message("fallback"), "Falta URL");
    }

    #[test]
    fn test_server_error_without_message_uses_fallback() {
        let err = ApiError::from_response(500, "<html>oops</html>").unwrap();
        assert_eq!(err.user_message("Failed to save."), "Failed to save.");
    }

    #[test]
    fn test_network_error_message() {
        let err = ApiError::Network("TypeError: Failed to fetch".to_string());
        assert_eq!(err.user_message("fallback"), CONNECTION_ERROR);
    }

    #[test]
    fn test_server_message_field_errors() {
        assert_eq!(
            server_message(r#"{"email": ["A user with that email already exists."]}"#),
            Some("A user with that email already exists.".to_string())
        );
        assert_eq!(
            server_message(r#"{"old_password": ["Wrong password."]}"#),
            Some("Wrong password.".to_string())
        );
    }

    #[test]
    fn test_server_message_priority() {
        assert_eq!(
            server_message(r#"{"detail": "d", "error": "e"}"#),
            Some("e".to_string())
        );
        assert_eq!(
            server_message(r#"{"message": "m", "detail": "d"}"#),
            Some("m".to_string())
        );
    }

    #[test]
    fn test_server_message_absent() {
        assert_eq!(server_message(""), None);
        assert_eq!(server_message("[]"), None);
        assert_eq!(server_message(r#"{"error": "  "}"#), None);
        assert_eq!(server_message(r#"{"count": 3}"#), None);
    }

    #[test]
    fn test_decode() {
        let ids: Vec<i64> = decode("[1, 2]").unwrap();
        assert_eq!(ids, vec![1, 2]);
        assert!(matches!(decode::<Vec<i64>>("{"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::PasswordTooShort { min: 6 }.to_string(),
            "Password must be at least 6 characters"
        );
        assert_eq!(ValidationError::Required("Email").to_string(), "Email is required");
    }
}
