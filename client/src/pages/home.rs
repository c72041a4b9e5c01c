//! Landing page linking to login and registration.

use leptos::prelude::*;

use crate::util::navigation::Route;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Gym " <span class="accent">"Élite"</span></h1>
            <p class="home-page__tagline">"Entrena. Registra. Evoluciona."</p>
            <nav class="home-page__actions">
                <a class="btn btn--primary" href=Route::Login.path()>"Entrar al Gym"</a>
                <a class="btn" href=Route::Register.path()>"Crear cuenta"</a>
            </nav>
        </div>
    }
}
