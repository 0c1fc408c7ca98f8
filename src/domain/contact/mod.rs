//! Contact domain — the support/contact form.

#[cfg(feature = "http")]
pub mod client;

use serde::Serialize;

/// A message submitted through the contact form.
#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// The form requires all three fields before dispatch.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completeness_check() {
        let msg = ContactMessage {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            message: "When does the cardigan restock?".into(),
        };
        assert!(msg.is_complete());

        let blank = ContactMessage {
            name: "Asha".into(),
            email: "  ".into(),
            message: "hi".into(),
        };
        assert!(!blank.is_complete());
    }
}
