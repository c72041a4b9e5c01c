//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form feedback and role-specific dashboard content.

pub mod role_panel;
pub mod status_banner;
