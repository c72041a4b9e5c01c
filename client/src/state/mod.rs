//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is app-wide context; `form` is owned per form instance.

pub mod auth;
pub mod form;
