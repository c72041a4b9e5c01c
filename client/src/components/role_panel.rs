//! Role-specific dashboard panels.
//!
//! DESIGN
//! ======
//! Exactly one panel is mounted per dashboard render; selection lives in
//! `pages::dashboard::select_view`, not here.

use leptos::prelude::*;

/// Panel for coaches: athlete management entry point.
#[component]
pub fn CoachPanel() -> impl IntoView {
    view! {
        <section class="role-panel role-panel--coach">
            <h2>"PANEL DE COACH"</h2>
            <p>"Bienvenido entrenador. Aquí puedes gestionar a tus atletas."</p>
        </section>
    }
}

/// Default panel for athletes and any unrecognized role.
#[component]
pub fn AthletePanel() -> impl IntoView {
    view! {
        <section class="role-panel role-panel--athlete">
            <h2>"PANEL DE ATLETA"</h2>
            <p>"Aquí verás tus rutinas y dietas asignadas."</p>
        </section>
    }
}
