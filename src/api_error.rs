//! Classification of backend failures for display.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApiErrorKind {
    Unauthorized,
    Forbidden,
    NotFound,
    ServerError,
    Unknown,
}

impl ApiErrorKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            500..=599 => Self::ServerError,
            _ => Self::Unknown,
        }
    }

    /// Message shown to the user for this kind of failure.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::Unauthorized => "Your session has expired. Please sign in again.",
            Self::Forbidden => "You do not have permission to access this resource.",
            Self::NotFound => "The requested resource was not found.",
            Self::ServerError => "The server encountered an error. Please try again later.",
            Self::Unknown => "An unexpected error occurred.",
        }
    }

    /// Whether the session should be torn down.
    pub fn requires_login(self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind:?}: {message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::from_status(status), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(ApiErrorKind::from_status(401), ApiErrorKind::Unauthorized);
        assert_eq!(ApiErrorKind::from_status(403), ApiErrorKind::Forbidden);
        assert_eq!(ApiErrorKind::from_status(404), ApiErrorKind::NotFound);
        assert_eq!(ApiErrorKind::from_status(500), ApiErrorKind::ServerError);
        assert_eq!(ApiErrorKind::from_status(503), ApiErrorKind::ServerError);
        assert_eq!(ApiErrorKind::from_status(400), ApiErrorKind::Unknown);
        assert_eq!(ApiErrorKind::from_status(0), ApiErrorKind::Unknown);
    }

    #[test]
    fn test_only_unauthorized_requires_login() {
        assert!(ApiErrorKind::Unauthorized.requires_login());
        assert!(!ApiErrorKind::Forbidden.requires_login());
    }

    #[test]
    fn test_display() {
        let err = ApiError::from_status(404, "GET /documents/42");
        assert_eq!(err.to_string(), "NotFound: GET /documents/42");
    }
}
