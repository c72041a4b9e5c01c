//! Inline status message shown under a form.

use leptos::prelude::*;

use crate::state::form::FormStatus;

/// Renders the form's current message, if any, tinted by outcome.
#[component]
pub fn StatusBanner(status: RwSignal<FormStatus>) -> impl IntoView {
    view! {
        <Show when=move || status.get().has_message()>
            <div class=move || format!("status {}", status.get().tone()) role="status">
                {move || status.get().message}
            </div>
        </Show>
    }
}
