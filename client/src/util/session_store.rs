//! Persisted `{token, user}` session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page writes the session, the dashboard reads it, and logout
//! clears it. All three go through `SessionStore` so there is exactly one
//! place that knows the storage keys and the serialized layout.
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail outright: a missing session is `Absent`, anything
//! unreadable or half-written is `Corrupt`. Callers route both to the
//! unauthenticated path.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use super::storage::{BrowserStorage, KeyValueStore, StorageError};
use crate::net::types::{Session, User};

/// Storage key for the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the JSON-serialized user record.
pub const USER_KEY: &str = "user";

/// Result of reading the persisted session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionLoad {
    Present(Session),
    Absent,
    Corrupt(String),
}

impl SessionLoad {
    pub fn into_session(self) -> Option<Session> {
        match self {
            Self::Present(session) => Some(session),
            Self::Absent | Self::Corrupt(_) => None,
        }
    }
}

/// Session repository over a key/value backend.
#[derive(Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl SessionStore<BrowserStorage> {
    /// Session store backed by `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn load(&self) -> SessionLoad {
        let load = self.read();
        if let SessionLoad::Corrupt(reason) = &load {
            log::warn!("ignoring corrupt session: {reason}");
        }
        load
    }

    fn read(&self) -> SessionLoad {
        let token = match self.storage.get(TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => return SessionLoad::Corrupt(e.to_string()),
        };
        let raw_user = match self.storage.get(USER_KEY) {
            Ok(user) => user,
            Err(e) => return SessionLoad::Corrupt(e.to_string()),
        };

        match (token, raw_user) {
            (None, None) => SessionLoad::Absent,
            (Some(_), None) => SessionLoad::Corrupt("token stored without user".to_owned()),
            (None, Some(_)) => SessionLoad::Corrupt("user stored without token".to_owned()),
            (Some(token), Some(_)) if token.is_empty() => SessionLoad::Corrupt("empty token".to_owned()),
            (Some(token), Some(raw_user)) => match serde_json::from_str::<User>(&raw_user) {
                Ok(user) => SessionLoad::Present(Session { token, user }),
                Err(e) => SessionLoad::Corrupt(format!("malformed user record: {e}")),
            },
        }
    }

    /// Persist `session`, replacing any previous one.
    ///
    /// If either write fails both keys are removed, so a failed save leaves
    /// no session at all rather than a mix of old and new halves.
    ///
    /// # Errors
    ///
    /// Returns the backend error when either key cannot be written.
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        let raw_user = serde_json::to_string(&session.user).map_err(|e| StorageError::Write {
            key: USER_KEY.to_owned(),
            reason: e.to_string(),
        })?;
        let written = self
            .storage
            .set(USER_KEY, &raw_user)
            .and_then(|()| self.storage.set(TOKEN_KEY, &session.token));
        if let Err(e) = written {
            if let Err(cleanup) = self.clear() {
                log::warn!("failed to discard partial session: {cleanup}");
            }
            return Err(e);
        }
        Ok(())
    }

    /// Remove both session keys.
    ///
    /// # Errors
    ///
    /// Returns the backend error if either key cannot be removed.
    pub fn clear(&self) -> Result<(), StorageError> {
        let token = self.storage.remove(TOKEN_KEY);
        let user = self.storage.remove(USER_KEY);
        token.and(user)
    }
}
