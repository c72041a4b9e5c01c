//! Networking modules for the external gym API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls and `types` defines the shared wire schema.

pub mod api;
#[cfg(test)]
pub(crate) mod fake_api;
pub mod types;
