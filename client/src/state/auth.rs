//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as context by `App`. Starts out `loading` (the server cannot see
//! local storage) and is resolved once on the client after mount from the
//! persisted session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Session;
use crate::util::session_store::SessionLoad;

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl AuthState {
    /// Resolved state from a session read. Corrupt sessions count as absent.
    pub fn from_load(load: SessionLoad) -> Self {
        Self { session: load.into_session(), loading: false }
    }

    pub fn signed_out() -> Self {
        Self { session: None, loading: false }
    }
}
