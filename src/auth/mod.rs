//! Authentication — the admin session and its single authoritative lifecycle.
//!
//! ## Session model
//!
//! One [`Session`] slot lives inside the client: created by `login`,
//! destroyed by `logout`, never duplicated into a second store. While a
//! session exists its token is injected as a bearer header on every request.
//!
//! The backend has no logout endpoint; `logout()` ends the session
//! client-side by clearing the slot and the injected token.

#[cfg(feature = "http")]
pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated admin session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Bearer token issued by the backend. Held only here.
    pub(crate) token: String,
    pub email: String,
    pub logged_in_at: DateTime<Utc>,
}

/// `POST /api/auth/login` request body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/login` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /api/auth/register` request body.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_tolerates_either_field() {
        let resp: LoginResponse = serde_json::from_str(r#"{"token": "abc"}"#).unwrap();
        assert_eq!(resp.token.as_deref(), Some("abc"));

        let resp: LoginResponse =
            serde_json::from_str(r#"{"message": "Invalid credentials"}"#).unwrap();
        assert!(resp.token.is_none());
        assert_eq!(resp.message.as_deref(), Some("Invalid credentials"));
    }
}
