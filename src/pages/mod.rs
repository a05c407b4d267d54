//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page reads auth state from context; access control is applied by the
//! route guards in `app`, never inside a page.

pub mod class_detail;
pub mod dashboard;
pub mod index;
pub mod login;
pub mod not_found;
