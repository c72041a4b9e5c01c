//! Dashboard page gated on the persisted session.
//!
//! The session is read once on the client after mount. Without one the page
//! shows a loading placeholder while the browser is sent to `/login`; with
//! one it renders exactly one role panel.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::role_panel::{AthletePanel, CoachPanel};
use crate::net::types::{Role, User};
use crate::state::auth::AuthState;
use crate::util::auth::{install_unauth_redirect, sign_out};
use crate::util::navigation::Route;
use crate::util::session_store::SessionStore;

/// What the dashboard should render for a given auth state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardView {
    /// Session not read yet.
    Loading,
    /// No usable session; leave for `route`.
    Redirect(Route),
    Coach(User),
    Athlete(User),
}

pub fn select_view(state: &AuthState) -> DashboardView {
    if state.loading {
        return DashboardView::Loading;
    }
    let Some(session) = state.session.as_ref() else {
        return DashboardView::Redirect(Route::Login);
    };
    match &session.user.role {
        Role::Coach => DashboardView::Coach(session.user.clone()),
        Role::Athlete => DashboardView::Athlete(session.user.clone()),
        Role::Other(raw) => {
            log::info!("unrecognized role {raw:?}, showing athlete panel");
            DashboardView::Athlete(session.user.clone())
        }
    }
}

pub fn greeting(user: &User) -> String {
    format!("Hola, {}", user.name)
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth);

    let on_logout = Callback::new(move |()| sign_out(&SessionStore::browser(), auth));

    view! {
        <div class="dashboard-page">
            {move || match select_view(&auth.get()) {
                DashboardView::Loading | DashboardView::Redirect(_) => {
                    view! { <p class="dashboard-page__loading">"Cargando..."</p> }.into_any()
                }
                DashboardView::Coach(user) => {
                    view! {
                        <DashboardHeader user=user on_logout=on_logout/>
                        <CoachPanel/>
                    }
                        .into_any()
                }
                DashboardView::Athlete(user) => {
                    view! {
                        <DashboardHeader user=user on_logout=on_logout/>
                        <AthletePanel/>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn DashboardHeader(user: User, on_logout: Callback<()>) -> impl IntoView {
    view! {
        <header class="dashboard-page__header">
            <h1>{greeting(&user)}</h1>
            <button class="btn" on:click=move |_| on_logout.run(())>"Cerrar sesión"</button>
        </header>
    }
}
