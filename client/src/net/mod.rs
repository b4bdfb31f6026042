//! Networking modules for the consultation API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the submission call and `types` defines the wire schema
//! shared with the server crate.

pub mod api;
pub mod types;
