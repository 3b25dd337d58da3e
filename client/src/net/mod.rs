//! Networking modules for the remote user API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls against the configured base URL and `types`
//! defines the wire schema shared with that service.

pub mod api;
pub mod types;
