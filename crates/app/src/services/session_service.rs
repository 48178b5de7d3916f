//! Session service — the admin authentication gate.
//!
//! Admin routes only render for a valid session. The gate is a small
//! state machine: a token check yields authenticated, expired, or
//! unauthenticated, and the HTTP layer turns the last two into a redirect
//! to the login route. There is no timeout, retry, or backoff.

use chrono::Duration;

use atelier_domain::error::AtelierError;
use atelier_domain::time;

use crate::ports::{Session, SessionStore};

/// Outcome of checking a bearer token.
#[derive(Debug, Clone)]
pub enum AuthStatus {
    /// The token maps to a live session.
    Authenticated(Session),
    /// The token was known but its session has lapsed.
    Expired,
    /// The token is absent or unknown.
    Unauthenticated,
}

impl AuthStatus {
    /// Whether the request may proceed into the admin surface.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Application service issuing and checking admin sessions.
pub struct SessionService<S> {
    store: S,
    admin_password: String,
    ttl: Duration,
}

impl<S: SessionStore> SessionService<S> {
    /// Create a new service with the configured admin password and
    /// session lifetime.
    pub fn new(store: S, admin_password: impl Into<String>, ttl: Duration) -> Self {
        Self {
            store,
            admin_password: admin_password.into(),
            ttl,
        }
    }

    /// Exchange the admin password for a fresh session.
    ///
    /// # Errors
    ///
    /// Returns [`AtelierError::Unauthorized`] when the password does not
    /// match.
    pub fn login(&self, password: &str) -> Result<Session, AtelierError> {
        if password != self.admin_password {
            tracing::warn!("admin login rejected");
            return Err(AtelierError::Unauthorized);
        }
        let now = time::now();
        let session = Session {
            token: uuid::Uuid::new_v4().to_string(),
            created_at: now,
            expires_at: now + self.ttl,
        };
        self.store.insert(session.clone());
        Ok(session)
    }

    /// Check a bearer token against the session store.
    #[must_use]
    pub fn authenticate(&self, token: &str) -> AuthStatus {
        match self.store.get(token) {
            Some(session) if session.is_expired(time::now()) => {
                self.store.remove(token);
                AuthStatus::Expired
            }
            Some(session) => AuthStatus::Authenticated(session),
            None => AuthStatus::Unauthenticated,
        }
    }

    /// Revoke a session. Unknown tokens are ignored.
    pub fn logout(&self, token: &str) {
        self.store.remove(token);
    }
}
