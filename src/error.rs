//! Unified portal error model and mapping helpers.
//! This module provides a common error enum used across the API client, the
//! view forms, and the shell, along with a mapper from backend HTTP statuses.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PortalError {
    UserInput { code: String, message: String },
    Auth { code: String, message: String },
    Forbidden { code: String, message: String },
    NotFound { code: String, message: String },
    Conflict { code: String, message: String },
    Api { code: String, message: String },
    Io { code: String, message: String },
    Internal { code: String, message: String },
}

impl PortalError {
    pub fn code_str(&self) -> &str {
        match self {
            PortalError::UserInput { code, .. }
            | PortalError::Auth { code, .. }
            | PortalError::Forbidden { code, .. }
            | PortalError::NotFound { code, .. }
            | PortalError::Conflict { code, .. }
            | PortalError::Api { code, .. }
            | PortalError::Io { code, .. }
            | PortalError::Internal { code, .. } => code.as_str(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            PortalError::UserInput { message, .. }
            | PortalError::Auth { message, .. }
            | PortalError::Forbidden { message, .. }
            | PortalError::NotFound { message, .. }
            | PortalError::Conflict { message, .. }
            | PortalError::Api { message, .. }
            | PortalError::Io { message, .. }
            | PortalError::Internal { message, .. } => message.as_str(),
        }
    }

    pub fn user<S: Into<String>>(code: S, msg: S) -> Self { PortalError::UserInput { code: code.into(), message: msg.into() } }
    pub fn auth<S: Into<String>>(code: S, msg: S) -> Self { PortalError::Auth { code: code.into(), message: msg.into() } }
    pub fn forbidden<S: Into<String>>(code: S, msg: S) -> Self { PortalError::Forbidden { code: code.into(), message: msg.into() } }
    pub fn not_found<S: Into<String>>(code: S, msg: S) -> Self { PortalError::NotFound { code: code.into(), message: msg.into() } }
    pub fn conflict<S: Into<String>>(code: S, msg: S) -> Self { PortalError::Conflict { code: code.into(), message: msg.into() } }
    pub fn api<S: Into<String>>(code: S, msg: S) -> Self { PortalError::Api { code: code.into(), message: msg.into() } }
    pub fn io<S: Into<String>>(code: S, msg: S) -> Self { PortalError::Io { code: code.into(), message: msg.into() } }
    pub fn internal<S: Into<String>>(code: S, msg: S) -> Self { PortalError::Internal { code: code.into(), message: msg.into() } }

    /// Classify a backend response by HTTP status, carrying the server message.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            400 | 422 => PortalError::UserInput { code: "bad_request".into(), message },
            401 => PortalError::Auth { code: "unauthorized".into(), message },
            403 => PortalError::Forbidden { code: "forbidden".into(), message },
            404 => PortalError::NotFound { code: "not_found".into(), message },
            409 => PortalError::Conflict { code: "conflict".into(), message },
            500..=599 => PortalError::Api { code: "backend_error".into(), message },
            _ => PortalError::Api { code: format!("http_{}", status), message },
        }
    }

    /// True when retyping the form input could plausibly fix the failure.
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            PortalError::UserInput { .. } | PortalError::Auth { .. } | PortalError::Conflict { .. }
        )
    }
}

impl Display for PortalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code_str(), self.message())
    }
}

impl std::error::Error for PortalError {}

pub type PortalResult<T> = Result<T, PortalError>;

impl From<anyhow::Error> for PortalError {
    fn from(err: anyhow::Error) -> Self {
        PortalError::Internal { code: "internal".into(), message: err.to_string() }
    }
}

impl From<reqwest::Error> for PortalError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return PortalError::Io { code: "timeout".into(), message: err.to_string() };
        }
        if err.is_connect() {
            return PortalError::Io { code: "connect".into(), message: err.to_string() };
        }
        PortalError::Api { code: "http_client".into(), message: err.to_string() }
    }
}

impl From<std::io::Error> for PortalError {
    fn from(err: std::io::Error) -> Self {
        PortalError::Io { code: "io".into(), message: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert!(matches!(PortalError::from_status(400, "x".into()), PortalError::UserInput { .. }));
        assert!(matches!(PortalError::from_status(401, "x".into()), PortalError::Auth { .. }));
        assert!(matches!(PortalError::from_status(403, "x".into()), PortalError::Forbidden { .. }));
        assert!(matches!(PortalError::from_status(404, "x".into()), PortalError::NotFound { .. }));
        assert!(matches!(PortalError::from_status(409, "x".into()), PortalError::Conflict { .. }));
        assert!(matches!(PortalError::from_status(500, "x".into()), PortalError::Api { .. }));
        assert!(matches!(PortalError::from_status(418, "x".into()), PortalError::Api { .. }));
    }

    #[test]
    fn display_carries_code_and_message() {
        let e = PortalError::auth("unauthorized", "Invalid credentials");
        assert_eq!(e.to_string(), "unauthorized: Invalid credentials");
        assert_eq!(e.code_str(), "unauthorized");
        assert_eq!(e.message(), "Invalid credentials");
    }

    #[test]
    fn user_fixable_classes() {
        assert!(PortalError::user("bad_request", "missing field").is_user_fixable());
        assert!(PortalError::auth("unauthorized", "nope").is_user_fixable());
        assert!(PortalError::conflict("conflict", "dup").is_user_fixable());
        assert!(!PortalError::api("backend_error", "boom").is_user_fixable());
        assert!(!PortalError::io("timeout", "slow").is_user_fixable());
    }
}
