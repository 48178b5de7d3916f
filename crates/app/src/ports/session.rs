//! Session port — storage for admin session tokens.

use atelier_domain::time::Timestamp;
use serde::{Deserialize, Serialize};

/// An admin session, identified by an opaque bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
}

impl Session {
    /// Whether the session has expired as of `at`.
    #[must_use]
    pub fn is_expired(&self, at: Timestamp) -> bool {
        at >= self.expires_at
    }
}

/// Storage for active sessions.
///
/// Sessions are small, ephemeral, and process-local, so this port is
/// synchronous; an IO-backed implementation would wrap its own runtime
/// handle.
pub trait SessionStore {
    fn insert(&self, session: Session);

    fn get(&self, token: &str) -> Option<Session>;

    fn remove(&self, token: &str);
}
