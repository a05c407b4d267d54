//! Route access decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::route_guard` renders whatever `decide` returns. Keeping the
//! decision pure lets every route apply identical redirect behavior.
//!
//! The loading check must run before the authentication check: a returning
//! user with a valid token is unauthenticated until rehydration finishes, and
//! redirecting during that window would bounce them to the login page.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::auth::AuthState;

pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Access policy attached to a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Signed-in users only; others go to the login page.
    RequireAuth,
    /// Signed-out users only; signed-in users go to the dashboard.
    PublicOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth state is still resolving: render neither content nor redirect.
    Placeholder,
    Redirect(&'static str),
    Render,
}

pub fn decide(access: RouteAccess, state: &AuthState) -> GuardDecision {
    if state.loading {
        return GuardDecision::Placeholder;
    }
    match (access, state.is_authenticated()) {
        (RouteAccess::RequireAuth, false) => GuardDecision::Redirect(LOGIN_ROUTE),
        (RouteAccess::PublicOnly, true) => GuardDecision::Redirect(DASHBOARD_ROUTE),
        _ => GuardDecision::Render,
    }
}
