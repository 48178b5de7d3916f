//! Mailer port — relay for contact-form submissions.

use std::future::Future;

use atelier_domain::error::AtelierError;
use serde::{Deserialize, Serialize};

/// A contact-form submission as received from the public site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    /// Reply-to address of the sender.
    pub email: String,
    /// Inquiry type selected in the form (e.g. "project", "support").
    #[serde(rename = "type", default)]
    pub inquiry: Option<String>,
    pub message: String,
}

/// Outbound relay for contact messages.
pub trait ContactMailer {
    fn send(
        &self,
        message: &ContactMessage,
    ) -> impl Future<Output = Result<(), AtelierError>> + Send;
}
