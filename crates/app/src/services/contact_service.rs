//! Contact service — validation and relay of contact-form submissions.

use atelier_domain::error::{AtelierError, ValidationError};

use crate::ports::{ContactMailer, ContactMessage};

/// Application service for the public contact form.
pub struct ContactService<M> {
    mailer: M,
}

impl<M: ContactMailer> ContactService<M> {
    /// Create a new service backed by the given mailer.
    pub fn new(mailer: M) -> Self {
        Self { mailer }
    }

    /// Validate a submission and relay it.
    ///
    /// Name, email, and message must be present; the inquiry type is
    /// optional. There is no retry: a relay failure is terminal for this
    /// submission and the caller re-submits manually.
    ///
    /// # Errors
    ///
    /// Returns [`AtelierError::Validation`] for missing fields and
    /// [`AtelierError::Mail`] when the relay fails.
    pub async fn submit(&self, message: ContactMessage) -> Result<(), AtelierError> {
        validate(&message)?;
        self.mailer.send(&message).await?;
        tracing::info!(from = %message.email, "relayed contact message");
        Ok(())
    }
}

fn validate(message: &ContactMessage) -> Result<(), ValidationError> {
    if message.name.trim().is_empty() {
        return Err(ValidationError::MissingField("name"));
    }
    if message.email.trim().is_empty() {
        return Err(ValidationError::MissingField("email"));
    }
    if message.message.trim().is_empty() {
        return Err(ValidationError::MissingField("message"));
    }
    Ok(())
}
