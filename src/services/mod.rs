//! Client-side services that own persistence and backend calls.
//!
//! DESIGN
//! ======
//! Services hold no reactive state. `state::auth` wraps `auth` in signals;
//! pages use `catalog` and `enrollment` directly.

pub mod auth;
pub mod catalog;
pub mod credentials;
pub mod enrollment;
