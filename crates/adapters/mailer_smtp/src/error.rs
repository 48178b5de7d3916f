//! Mail-specific error type wrapping lettre errors.

use atelier_domain::error::AtelierError;

/// Errors originating from the SMTP mailer.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// The message could not be assembled.
    #[error("message build error")]
    Message(#[from] lettre::error::Error),

    /// A configured or submitted address failed to parse.
    #[error("invalid mailbox address")]
    Address(#[from] lettre::address::AddressError),

    /// The SMTP relay rejected or failed the send.
    #[error("smtp transport error")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The blocking send task was cancelled.
    #[error("relay task failed")]
    Join(#[from] tokio::task::JoinError),
}

impl From<MailError> for AtelierError {
    fn from(err: MailError) -> Self {
        Self::Mail(Box::new(err))
    }
}
