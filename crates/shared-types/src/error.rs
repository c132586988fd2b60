use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Network,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured application error shared by the API client and the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BadRequest,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Unauthorized,
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Forbidden,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NotFound,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Network,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InternalError,
            message: message.into(),
        }
    }

    /// Whether this error means the stored token is no longer accepted.
    pub fn is_auth_failure(&self) -> bool {
        self.kind == AppErrorKind::Unauthorized
    }

    /// Extract a user-facing message from a backend error payload.
    ///
    /// Backends in the wild answer errors with small JSON objects whose
    /// message lives under `message`, `detail`, or `error`. Returns `None`
    /// when the body is not JSON or carries none of those fields.
    pub fn message_from_payload(body: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        for key in ["message", "detail", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                if !text.is_empty() {
                    return Some(text.to_string());
                }
            }
        }
        None
    }

    /// User-facing message with a generic fallback for unparseable errors.
    pub fn friendly_message(&self) -> String {
        if self.message.is_empty() {
            "Something went wrong. Please try again.".to_string()
        } else {
            self.message.clone()
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn message_from_payload_reads_message_field() {
        let body = r#"{"message": "Invalid credentials"}"#;
        assert_eq!(
            AppError::message_from_payload(body),
            Some("Invalid credentials".to_string())
        );
    }

    #[test]
    fn message_from_payload_reads_detail_and_error_fields() {
        assert_eq!(
            AppError::message_from_payload(r#"{"detail": "Token expired"}"#),
            Some("Token expired".to_string())
        );
        assert_eq!(
            AppError::message_from_payload(r#"{"error": "Nope"}"#),
            Some("Nope".to_string())
        );
    }

    #[test]
    fn message_from_payload_rejects_non_json_and_empty() {
        assert_eq!(AppError::message_from_payload("<html>502</html>"), None);
        assert_eq!(AppError::message_from_payload(""), None);
        assert_eq!(AppError::message_from_payload(r#"{"message": ""}"#), None);
        assert_eq!(AppError::message_from_payload(r#"{"other": "x"}"#), None);
    }

    #[test]
    fn friendly_message_falls_back_when_empty() {
        let err = AppError::network("");
        assert_eq!(err.friendly_message(), "Something went wrong. Please try again.");
        let err = AppError::network("connection refused");
        assert_eq!(err.friendly_message(), "connection refused");
    }

    #[test]
    fn unauthorized_is_an_auth_failure() {
        assert!(AppError::unauthorized("expired").is_auth_failure());
        assert!(!AppError::forbidden("wrong role").is_auth_failure());
        assert!(!AppError::network("offline").is_auth_failure());
    }

    #[test]
    fn display_impl_formats_kind_and_message() {
        let err = AppError::unauthorized("bad credentials");
        assert_eq!(format!("{}", err), "Unauthorized: bad credentials");
    }

    #[test]
    fn error_roundtrips_through_json() {
        let err = AppError::bad_request("missing start_date");
        let json = serde_json::to_string(&err).unwrap();
        let parsed: AppError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, parsed);
    }
}
