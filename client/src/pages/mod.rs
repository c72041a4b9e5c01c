//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Submission logic lives in plain async functions next to
//! each page so it runs without a browser.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;
