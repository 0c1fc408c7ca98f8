//! Contact sub-client — submit a support message.

use super::ContactMessage;
use crate::client::ShopClient;
use crate::error::SdkError;
use crate::http::RetryPolicy;

/// Sub-client for the contact form.
pub struct Contact<'a> {
    pub(crate) client: &'a ShopClient,
}

impl<'a> Contact<'a> {
    /// Send a contact message. Incomplete forms are rejected locally before
    /// any request is dispatched.
    pub async fn send(&self, message: &ContactMessage) -> Result<(), SdkError> {
        if !message.is_complete() {
            return Err(SdkError::Validation(
                "Please fill in all fields".to_string(),
            ));
        }

        let url = format!("{}/api/contact", self.client.http.base_url());
        let _: serde_json::Value = self
            .client
            .http
            .post(&url, message, RetryPolicy::None)
            .await?;
        Ok(())
    }
}
