//! In-process session store backed by a mutex-guarded map.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::ports::{Session, SessionStore};

/// In-memory [`SessionStore`]. Sessions do not survive a restart, which
/// matches their short lifetime.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Session>> {
        // A poisoned lock only means another thread panicked mid-insert;
        // the map itself stays usable.
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for InMemorySessionStore {
    fn insert(&self, session: Session) {
        self.lock().insert(session.token.clone(), session);
    }

    fn get(&self, token: &str) -> Option<Session> {
        self.lock().get(token).cloned()
    }

    fn remove(&self, token: &str) {
        self.lock().remove(token);
    }
}
