//! Low-level HTTP client — `ShopHttp`.
//!
//! Thin verb-level wrapper over `reqwest`. Endpoint paths live in the domain
//! sub-clients; this layer owns the base URL, the bearer token, status-code
//! mapping, and the retry loop.

use crate::error::HttpError;
use crate::http::retry::RetryPolicy;

use async_lock::RwLock;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Low-level HTTP client for the shop REST API.
pub struct ShopHttp {
    base_url: String,
    client: Client,
    /// Auth token injected as a bearer header once logged in. Never exposed.
    auth_token: Arc<RwLock<Option<String>>>,
}

impl ShopHttp {
    pub fn new(base_url: &str) -> Self {
        let builder = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
            auth_token: Arc::new(RwLock::new(None)),
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set or clear the auth token.
    pub(crate) async fn set_auth_token(&self, token: Option<String>) {
        *self.auth_token.write().await = token;
    }

    // ── Verb-level methods ───────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::GET, url, None::<&()>, retry)
            .await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::POST, url, Some(body), retry)
            .await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::PUT, url, Some(body), retry)
            .await
    }

    /// DELETE, discarding any response body. The backend answers 2xx with an
    /// empty body or an order echo; neither is useful to the caller.
    pub(crate) async fn delete(&self, url: &str, retry: RetryPolicy) -> Result<(), HttpError> {
        let _: serde_json::Value = self
            .request_with_retry(reqwest::Method::DELETE, url, None::<&()>, retry)
            .await?;
        Ok(())
    }

    /// POST/PUT a multipart form (item create/update carries an optional
    /// image part). Forms are not reusable, so these never retry.
    pub(crate) async fn send_multipart<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        url: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, HttpError> {
        let mut req = self.client.request(method, url).multipart(form);

        if let Some(token) = self.auth_token.read().await.as_ref() {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let resp = req.send().await?;
        Self::parse_response(resp).await
    }

    // ── Internal ─────────────────────────────────────────────────────────

    async fn request_with_retry<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let max_retries = retry.max_retries();
        if max_retries == 0 {
            return self.do_request(&method, url, body).await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            match self.do_request::<T, B>(&method, url, body).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => retry.retries_status(*status),
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                            }
                            retry.retries_status(429)
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        _ => false,
                    };

                    if should_retry && attempt < max_retries {
                        let delay = retry.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let mut req = self.client.request(method.clone(), url);

        if let Some(token) = self.auth_token.read().await.as_ref() {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        Self::parse_response(resp).await
    }

    async fn parse_response<T: DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, HttpError> {
        let status = resp.status();

        if status.is_success() {
            // Empty 2xx bodies (e.g. DELETE) deserialize as JSON null.
            let bytes = resp.bytes().await?;
            let parsed = if bytes.is_empty() {
                serde_json::from_slice(b"null")
            } else {
                serde_json::from_slice(&bytes)
            };
            return parsed.map_err(|e| HttpError::ServerError {
                status: status.as_u16(),
                body: format!("invalid response body: {e}"),
            });
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited {
                retry_after_ms: None,
            }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

impl Clone for ShopHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            auth_token: self.auth_token.clone(),
        }
    }
}
