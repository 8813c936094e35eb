//! Authentication models.
//!
//! Request and response bodies for `POST /auth/login`, plus the bearer
//! credential handed out on success.

use crate::users::User;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque bearer token issued by the authentication endpoint.
///
/// `Debug` output is redacted so tokens never end up in logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Login request with email and password.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: AccessToken,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::UserRole;

    #[test]
    fn test_access_token_debug_is_redacted() {
        let token = AccessToken::new("secret-value");
        assert_eq!(format!("{:?}", token), "AccessToken(***)");
        assert_eq!(token.bearer(), "Bearer secret-value");
    }

    #[test]
    fn test_login_response_deserializes() {
        let body = r#"{
            "access_token": "tok",
            "token_type": "bearer",
            "user": {"id":"2","name":"John Smith","email":"john@focus.edu","role":"teacher"}
        }"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.access_token.as_str(), "tok");
        assert_eq!(response.user.role, UserRole::Teacher);
    }

    #[test]
    fn test_login_response_without_token_type() {
        let body = r#"{"access_token":"t","user":{"id":"1","name":"A","email":"a@b.c","role":"admin"}}"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.token_type, None);
    }
}
