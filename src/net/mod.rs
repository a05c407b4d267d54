//! Networking modules for the identity REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and `types` defines the shared wire schema.

pub mod api;
pub mod types;
