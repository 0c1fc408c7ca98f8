//! Auth sub-client — login, register, logout, session state.

use chrono::Utc;

use crate::auth::{LoginRequest, LoginResponse, RegisterRequest, Session};
use crate::client::ShopClient;
use crate::error::{AuthError, SdkError};
use crate::http::RetryPolicy;

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a ShopClient,
}

impl<'a> Auth<'a> {
    /// Login with email + password, creating the one authoritative session.
    ///
    /// On success the token is injected into subsequent requests; on any
    /// failure no session exists and no token is stored.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, SdkError> {
        let url = format!("{}/api/auth/login", self.client.http.base_url());
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let resp: LoginResponse = self
            .client
            .http
            .post(&url, &request, RetryPolicy::None)
            .await?;

        let token = resp.token.ok_or_else(|| {
            AuthError::LoginFailed(
                resp.message
                    .unwrap_or_else(|| "Invalid credentials".to_string()),
            )
        })?;

        let session = Session {
            token: token.clone(),
            email: email.to_string(),
            logged_in_at: Utc::now(),
        };

        self.client.http.set_auth_token(Some(token)).await;
        *self.client.session.write().await = Some(session.clone());

        Ok(session)
    }

    /// Create a new account. Does not log in.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), SdkError> {
        let url = format!("{}/api/auth/register", self.client.http.base_url());
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let _: serde_json::Value = self
            .client
            .http
            .post(&url, &request, RetryPolicy::None)
            .await?;
        Ok(())
    }

    /// End the session: the one slot is cleared and the bearer token with it.
    pub async fn logout(&self) {
        *self.client.session.write().await = None;
        self.client.http.set_auth_token(None).await;
    }

    /// Whether a session currently exists.
    pub async fn is_authenticated(&self) -> bool {
        self.client.session.read().await.is_some()
    }

    /// The current session, if any.
    pub async fn session(&self) -> Option<Session> {
        self.client.session.read().await.clone()
    }
}
