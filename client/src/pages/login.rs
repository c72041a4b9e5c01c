//! Login page: email + password against the external auth API.
//!
//! On success the returned token and user record are persisted and the
//! browser moves to `/dashboard` after a short grace period.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::status_banner::StatusBanner;
use crate::net::api::{ApiError, AuthApi};
use crate::net::types::{Credentials, Session};
use crate::state::form::FormStatus;
use crate::util::navigation::{Redirect, Route};
use crate::util::session_store::SessionStore;
use crate::util::storage::KeyValueStore;

pub const LOGIN_REDIRECT_DELAY_MS: u32 = 1000;

const MSG_VALIDATING: &str = "Validando credenciales...";
const MSG_WELCOME: &str = "¡Bienvenido de nuevo!";
const MSG_BAD_CREDENTIALS: &str = "Credenciales incorrectas";
const MSG_LOGIN_FAILED: &str = "Error al iniciar sesión";
const MSG_SESSION_NOT_SAVED: &str = "No se pudo guardar la sesión";

/// Result of one login attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginOutcome {
    pub status: FormStatus,
    pub redirect: Option<Redirect>,
}

impl LoginOutcome {
    fn failed(message: impl Into<String>) -> Self {
        Self { status: FormStatus::error(message), redirect: None }
    }
}

pub fn normalize_credentials(email: &str, password: &str) -> Credentials {
    Credentials { email: email.trim().to_owned(), password: password.to_owned() }
}

/// Status shown while a login request is in flight.
pub fn login_pending_status() -> FormStatus {
    FormStatus::loading(MSG_VALIDATING)
}

/// User-facing text for a failed login.
pub fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Rejected { message: Some(message), .. } => message.clone(),
        ApiError::Rejected { message: None, .. } => MSG_BAD_CREDENTIALS.to_owned(),
        ApiError::NoResponse | ApiError::Request(_) | ApiError::Decode(_) => MSG_LOGIN_FAILED.to_owned(),
    }
}

/// Submit `credentials`, persisting the session on success.
///
/// Nothing is written to `store` unless the collaborator accepted the
/// credentials and returned a complete session.
pub async fn submit_login<A, S>(api: &A, store: &SessionStore<S>, credentials: Credentials) -> LoginOutcome
where
    A: AuthApi,
    S: KeyValueStore,
{
    let resp = match api.login(&credentials).await {
        Ok(resp) => resp,
        Err(e) => {
            log::info!("login rejected: {e}");
            return LoginOutcome::failed(login_error_message(&e));
        }
    };

    if let Err(e) = store.save(&Session::from(resp)) {
        log::warn!("login succeeded but session was not persisted: {e}");
        return LoginOutcome::failed(MSG_SESSION_NOT_SAVED);
    }

    LoginOutcome {
        status: FormStatus::success(MSG_WELCOME),
        redirect: Some(Redirect::after(Route::Dashboard, LOGIN_REDIRECT_DELAY_MS)),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::idle());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_loading {
            return;
        }
        let credentials = normalize_credentials(&email.get_untracked(), &password.get_untracked());
        status.set(login_pending_status());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpAuthApi::default();
            let outcome = submit_login(&api, &SessionStore::browser(), credentials).await;
            status.set(outcome.status);
            if let Some(redirect) = outcome.redirect {
                crate::util::navigation::perform(redirect);
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
        }
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <div class="login-card__header">
                    <h2>"Acceso " <span class="accent">"VIP"</span></h2>
                    <p class="login-card__subtitle">"Continúa tu evolución"</p>
                </div>
                <label class="login-label">
                    "Email de Atleta"
                    <input
                        class="login-input"
                        name="email"
                        type="email"
                        placeholder="atleta@gym.com"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-label">
                    "Contraseña"
                    <input
                        class="login-input"
                        name="password"
                        type="password"
                        placeholder="••••••••"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <StatusBanner status=status/>
                <button class="login-button" type="submit" disabled=move || status.get().is_loading>
                    {move || if status.get().is_loading { "Verificando..." } else { "Entrar al Gym" }}
                </button>
                <a class="login-card__link" href=Route::Register.path()>
                    "¿No tienes cuenta? " <span class="accent">"Regístrate aquí"</span>
                </a>
            </form>
        </div>
    }
}
