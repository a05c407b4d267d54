//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthContext` is constructed once in `app::App` and provided through the
//! Leptos context tree. Route guards and user-aware components read its
//! `AuthState` signal; the login page, nav bar and logout actions call its
//! operations. Nothing else writes the signal.
//!
//! STATE MACHINE
//! =============
//! `Rehydrating` (initial) resolves exactly once to `Authenticated` or
//! `Unauthenticated`; login/register/logout then move between those two.
//! `loading` is true only while rehydrating or while a login/register call is
//! in flight.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::error::AuthError;
use crate::net::api::{AuthApi, HttpAuthApi};
use crate::net::types::{RegisterRequest, User};
use crate::services::auth::AuthService;
use crate::services::credentials::CredentialStrategy;
use crate::state::session_store::{BrowserSessionStore, SessionStore};
use crate::util::timeout::{TimerFn, browser_timer, with_timeout};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::rehydrating()
    }
}

impl AuthState {
    pub fn rehydrating() -> Self {
        Self { user: None, loading: true }
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    pub fn signed_out() -> Self {
        Self { user: None, loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Process-wide auth holder: the state signal plus the service that mutates it.
pub struct AuthContext<S, A> {
    state: RwSignal<AuthState>,
    service: Arc<AuthService<S, A>>,
    rehydrate_timeout_ms: u32,
    timer: TimerFn,
    rehydration_started: Arc<AtomicBool>,
}

/// The context type the browser app provides.
pub type AppAuthContext = AuthContext<BrowserSessionStore, HttpAuthApi>;

impl<S, A> Clone for AuthContext<S, A> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            service: Arc::clone(&self.service),
            rehydrate_timeout_ms: self.rehydrate_timeout_ms,
            timer: self.timer,
            rehydration_started: Arc::clone(&self.rehydration_started),
        }
    }
}

impl<S: SessionStore, A: AuthApi> AuthContext<S, A> {
    pub fn new(service: AuthService<S, A>, rehydrate_timeout_ms: u32) -> Self {
        Self {
            state: RwSignal::new(AuthState::rehydrating()),
            service: Arc::new(service),
            rehydrate_timeout_ms,
            timer: browser_timer,
            rehydration_started: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Replace the clock that bounds the rehydration lookup.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn with_timer(mut self, timer: TimerFn) -> Self {
        self.timer = timer;
        self
    }

    /// Read-only view for guards and components.
    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    #[cfg(test)]
    pub(crate) fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    pub fn credentials(&self) -> CredentialStrategy {
        self.service.credentials()
    }

    /// Restore the session persisted by a previous visit.
    ///
    /// Runs once per context; later calls return immediately. A failed or
    /// timed-out lookup clears the stored token and is not reported.
    pub async fn rehydrate(&self) {
        if self.rehydration_started.swap(true, Ordering::AcqRel) {
            return;
        }

        let next = if self.service.has_session() {
            match with_timeout(self.service.current_user(), (self.timer)(self.rehydrate_timeout_ms)).await {
                Some(Ok(user)) => {
                    log::info!("session restored for {}", user.id);
                    AuthState::signed_in(user)
                }
                Some(Err(e)) => {
                    log::warn!("discarding stored session: {e}");
                    self.service.clear_session();
                    AuthState::signed_out()
                }
                None => {
                    log::warn!("session lookup timed out after {}ms", self.rehydrate_timeout_ms);
                    self.service.clear_session();
                    AuthState::signed_out()
                }
            }
        } else {
            log::debug!("no stored session");
            AuthState::signed_out()
        };

        self.state.set(next);
    }

    /// Sign in and publish the new user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` on any failure; the state is
    /// left signed out.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        self.state.update(|s| s.loading = true);
        match self.service.login(email, password).await {
            Ok(user) => {
                self.state.set(AuthState::signed_in(user));
                Ok(())
            }
            Err(e) => {
                log::warn!("login rejected: {e}");
                self.state.set(AuthState::signed_out());
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Register an account and publish it as the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::RegistrationFailed` on any failure; the state is
    /// left signed out.
    pub async fn register(&self, request: RegisterRequest) -> Result<(), AuthError> {
        self.state.update(|s| s.loading = true);
        match self.service.register(&request).await {
            Ok(user) => {
                self.state.set(AuthState::signed_in(user));
                Ok(())
            }
            Err(e) => {
                log::warn!("registration rejected: {e}");
                self.state.set(AuthState::signed_out());
                Err(AuthError::RegistrationFailed)
            }
        }
    }

    /// Sign out. Always ends signed out, whatever the backend says.
    pub async fn logout(&self) {
        self.service.logout().await;
        self.state.set(AuthState::signed_out());
    }
}
