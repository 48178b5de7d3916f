//! # atelier-adapter-mailer-smtp
//!
//! SMTP implementation of the [`ContactMailer`](atelier_app::ports::ContactMailer)
//! port using [lettre](https://docs.rs/lettre).
//!
//! Contact-form submissions are formatted into a plain-text email with the
//! visitor's address as reply-to and relayed through a configured SMTP
//! host. There is no queueing or retry; a failed relay surfaces to the
//! caller.

pub mod error;
pub mod mailer;

pub use error::MailError;
pub use mailer::{Config, SmtpMailer};
