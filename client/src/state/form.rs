//! Per-form submission status.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each form instance owns one `FormStatus`. It is replaced wholesale on every
//! submission attempt, and `is_loading` gates the submit control so only one
//! request is in flight per form.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub message: String,
    pub is_error: bool,
    pub is_loading: bool,
}

impl FormStatus {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn loading(message: impl Into<String>) -> Self {
        Self { message: message.into(), is_error: false, is_loading: true }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), is_error: false, is_loading: false }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), is_error: true, is_loading: false }
    }

    pub fn has_message(&self) -> bool {
        !self.message.is_empty()
    }

    /// CSS modifier for the status banner.
    pub fn tone(&self) -> &'static str {
        if self.is_error { "status--error" } else { "status--ok" }
    }
}
