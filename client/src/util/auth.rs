//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior
//! and resolve the persisted session the same way.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::navigation::{Redirect, Route, perform};
use super::session_store::SessionStore;
use super::storage::KeyValueStore;
use crate::state::auth::AuthState;

/// True once auth has loaded and no session is present.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.session.is_none()
}

/// Read the persisted session into a resolved `AuthState`.
pub fn resolve_auth<S: KeyValueStore>(store: &SessionStore<S>) -> AuthState {
    AuthState::from_load(store.load())
}

/// Redirect to `/login` whenever auth has loaded and no session is present.
pub fn install_unauth_redirect(auth: RwSignal<AuthState>) {
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            perform(Redirect::now(Route::Login));
        }
    });
}

/// Clear the persisted session and mark the user signed out. Pages with an
/// installed unauth redirect then send the browser to `/login`.
pub fn sign_out<S: KeyValueStore>(store: &SessionStore<S>, auth: RwSignal<AuthState>) {
    if let Err(e) = store.clear() {
        log::warn!("failed to clear session: {e}");
    }
    auth.set(AuthState::signed_out());
}
