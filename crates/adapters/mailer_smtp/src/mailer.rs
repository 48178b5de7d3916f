//! SMTP implementation of [`ContactMailer`].

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use atelier_app::ports::{ContactMailer, ContactMessage};
use atelier_domain::error::AtelierError;

use crate::error::MailError;

/// Configuration for the SMTP relay.
#[derive(Debug, Clone)]
pub struct Config {
    /// SMTP relay hostname (STARTTLS/submission handled by lettre).
    pub host: String,
    pub username: String,
    pub password: String,
    /// Mailbox the relayed email is sent from.
    pub from: String,
    /// Agency inbox the contact form delivers to.
    pub to: String,
}

impl Config {
    /// Build a ready-to-use [`SmtpMailer`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MailError`] when the relay host or the configured
    /// mailboxes are invalid.
    pub fn build(self) -> Result<SmtpMailer, MailError> {
        let transport = SmtpTransport::relay(&self.host)?
            .credentials(Credentials::new(self.username, self.password))
            .build();
        Ok(SmtpMailer {
            transport,
            from: self.from.parse()?,
            to: self.to.parse()?,
        })
    }
}

/// SMTP-backed contact mailer.
pub struct SmtpMailer {
    transport: SmtpTransport,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    fn build_message(&self, message: &ContactMessage) -> Result<Message, MailError> {
        let reply_to: Mailbox = message.email.parse()?;
        Ok(Message::builder()
            .from(self.from.clone())
            .reply_to(reply_to)
            .to(self.to.clone())
            .subject(subject(message))
            .body(body(message))?)
    }
}

impl ContactMailer for SmtpMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), AtelierError> {
        let email = self.build_message(message).map_err(AtelierError::from)?;
        let transport = self.transport.clone();

        // lettre's SMTP transport is blocking; keep it off the async runtime.
        tokio::task::spawn_blocking(move || transport.send(&email))
            .await
            .map_err(MailError::from)?
            .map_err(MailError::from)?;

        tracing::debug!("relayed contact email");
        Ok(())
    }
}

fn subject(message: &ContactMessage) -> String {
    match message.inquiry.as_deref() {
        Some(inquiry) if !inquiry.is_empty() => {
            format!("[contact/{inquiry}] {}", message.name)
        }
        _ => format!("[contact] {}", message.name),
    }
}

fn body(message: &ContactMessage) -> String {
    format!(
        "From: {} <{}>\nInquiry: {}\n\n{}",
        message.name,
        message.email,
        message.inquiry.as_deref().unwrap_or("general"),
        message.message,
    )
}
