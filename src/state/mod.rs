//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session_store` is the only persisted state; `auth` is the reactive view
//! every route and component reads.

pub mod auth;
pub mod notice;
pub mod session_store;
