//! Registration page: name, email and password for a new athlete account.
//!
//! Password length is checked locally before any request is made. Nothing is
//! persisted; a successful registration sends the user on to `/login`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::components::status_banner::StatusBanner;
use crate::net::api::{ApiError, AuthApi};
use crate::net::types::Registration;
use crate::state::form::FormStatus;
use crate::util::navigation::{Redirect, Route};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const REGISTER_REDIRECT_DELAY_MS: u32 = 1500;

const MSG_PASSWORD_TOO_SHORT: &str = "Mínimo 6 caracteres requeridos";
const MSG_PROCESSING: &str = "Procesando registro...";
const MSG_REGISTERED: &str = "¡Atleta registrado!";
const MSG_NO_RESPONSE: &str = "El servidor no responde";
const MSG_CONNECTION: &str = "Error de conexión";
const MSG_REGISTER_FAILED: &str = "Error al registrar atleta";

/// Result of one registration attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterOutcome {
    pub status: FormStatus,
    /// Reset all inputs to empty strings.
    pub clear_form: bool,
    pub redirect: Option<Redirect>,
}

impl RegisterOutcome {
    fn failed(message: impl Into<String>) -> Self {
        Self { status: FormStatus::error(message), clear_form: false, redirect: None }
    }
}

/// Local checks that must pass before the form is submitted.
///
/// # Errors
///
/// Returns the message to show when the password is shorter than
/// [`MIN_PASSWORD_LEN`]. Length is counted in UTF-16 code units, the same
/// way the browser measures input values.
pub fn validate_registration(form: &Registration) -> Result<(), &'static str> {
    if form.password.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Err(MSG_PASSWORD_TOO_SHORT);
    }
    Ok(())
}

/// Status shown while a registration request is in flight.
pub fn register_pending_status() -> FormStatus {
    FormStatus::loading(MSG_PROCESSING)
}

/// User-facing text for a failed registration.
pub fn register_error_message(err: &ApiError) -> String {
    if let Some(message) = err.server_message() {
        return message.to_owned();
    }
    match err {
        ApiError::NoResponse => MSG_NO_RESPONSE,
        ApiError::Request(_) => MSG_CONNECTION,
        ApiError::Rejected { .. } | ApiError::Decode(_) => MSG_REGISTER_FAILED,
    }
    .to_owned()
}

/// Validate `form` and, if it passes, submit it to the user-creation API.
pub async fn submit_registration<A: AuthApi>(api: &A, form: Registration) -> RegisterOutcome {
    if let Err(message) = validate_registration(&form) {
        return RegisterOutcome::failed(message);
    }

    match api.register(&form).await {
        Ok(resp) => RegisterOutcome {
            status: FormStatus::success(resp.message.unwrap_or_else(|| MSG_REGISTERED.to_owned())),
            clear_form: true,
            redirect: Some(Redirect::after(Route::Login, REGISTER_REDIRECT_DELAY_MS)),
        },
        Err(e) => {
            log::info!("registration failed: {e}");
            RegisterOutcome::failed(register_error_message(&e))
        }
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::idle());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_loading {
            return;
        }
        let form = Registration {
            name: name.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
        };
        if let Err(message) = validate_registration(&form) {
            status.set(FormStatus::error(message));
            return;
        }
        status.set(register_pending_status());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpAuthApi::default();
            let outcome = submit_registration(&api, form).await;
            if outcome.clear_form {
                name.set(String::new());
                email.set(String::new());
                password.set(String::new());
            }
            status.set(outcome.status);
            if let Some(redirect) = outcome.redirect {
                crate::util::navigation::perform(redirect);
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
        }
    };

    let busy = move || status.get().is_loading;

    view! {
        <div class="register-page">
            <a class="register-page__back" href=Route::Home.path()>"← Volver al Inicio"</a>
            <form class="register-card" on:submit=on_submit>
                <div class="register-card__header">
                    <h2>"Únete a la " <span class="accent">"Élite"</span></h2>
                    <p class="register-card__subtitle">"Crea tu perfil de atleta"</p>
                </div>
                <label class="register-label">
                    "Nombre Completo"
                    <input
                        class="register-input"
                        name="name"
                        type="text"
                        placeholder="Ej. Marcus Vicius"
                        required
                        disabled=busy
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="register-label">
                    "Email de Atleta"
                    <input
                        class="register-input"
                        name="email"
                        type="email"
                        placeholder="atleta@gym.com"
                        required
                        disabled=busy
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="register-label">
                    "Contraseña"
                    <input
                        class="register-input"
                        name="password"
                        type="password"
                        placeholder="Mínimo 6 caracteres"
                        required
                        disabled=busy
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <StatusBanner status=status/>
                <button class="register-button" type="submit" disabled=busy>
                    {move || if busy() { "Registrando..." } else { "Empezar Transformación" }}
                </button>
                <p class="register-card__footer">
                    "¿Ya eres miembro? " <a href=Route::Login.path()>"Inicia Sesión"</a>
                </p>
            </form>
        </div>
    }
}
