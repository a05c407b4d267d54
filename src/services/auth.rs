//! Auth service: credential checks and session token lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth context (`state::auth`) drives this service; the service is the
//! only writer of the session store. Every success path persists the token
//! before returning, and every sign-out path clears it.
//!
//! ERROR HANDLING
//! ==============
//! Backend failures collapse into `AuthError` variants for login, register and
//! current-user lookups. Logout never fails: remote errors are logged and the
//! local session is cleared regardless. Nothing is retried.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::error::AuthError;
use crate::net::api::AuthApi;
use crate::net::types::{AuthResponse, LoginRequest, RegisterRequest, User};
use crate::services::credentials::CredentialStrategy;
use crate::state::session_store::{Session, SessionStore};

pub struct AuthService<S, A> {
    store: S,
    api: A,
    credentials: CredentialStrategy,
}

impl<S: SessionStore, A: AuthApi> AuthService<S, A> {
    pub fn new(store: S, api: A, credentials: CredentialStrategy) -> Self {
        Self { store, api, credentials }
    }

    pub fn credentials(&self) -> CredentialStrategy {
        self.credentials
    }

    /// Whether a session token is currently persisted.
    pub fn has_session(&self) -> bool {
        self.store.load().is_some()
    }

    /// Drop the persisted session without contacting the backend.
    pub fn clear_session(&self) {
        self.store.clear();
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` when the backend rejects the
    /// credentials or cannot be reached.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if let Some(account) = self.credentials.resolve_login(email) {
            log::info!("demo login for {email}");
            self.store.save(&Session::new(account.token, None));
            return Ok(account.user);
        }

        let request = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        match self.api.login(&request).await {
            Ok(response) => Ok(self.persist(response)),
            Err(e) => {
                log::warn!("login failed: {e}");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Create an account and sign in as it.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::RegistrationFailed` when the backend rejects the
    /// registration or cannot be reached.
    pub async fn register(&self, request: &RegisterRequest) -> Result<User, AuthError> {
        match self.api.register(request).await {
            Ok(response) => Ok(self.persist(response)),
            Err(e) => {
                log::warn!("registration failed: {e}");
                Err(AuthError::RegistrationFailed)
            }
        }
    }

    /// Invalidate the session remotely (best effort) and clear it locally.
    pub async fn logout(&self) {
        let session = self.store.load();
        let token = session.as_ref().map(|s| s.token.as_str());
        let refresh = session.as_ref().and_then(|s| s.refresh_token.as_deref());
        if let Err(e) = self.api.logout(token, refresh).await {
            log::warn!("logout request failed: {e}");
        }

        self.store.clear();
    }

    /// Look up the user owning the persisted session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionInvalid` when no token is stored or the
    /// backend rejects it. The stored token is left for the caller to clear.
    pub async fn current_user(&self) -> Result<User, AuthError> {
        let Some(session) = self.store.load() else {
            return Err(AuthError::SessionInvalid);
        };

        if let Some(user) = self.credentials.resolve_token(&session.token) {
            return Ok(user);
        }

        self.api.current_user(&session.token).await.map_err(|e| {
            log::warn!("session lookup failed: {e}");
            AuthError::SessionInvalid
        })
    }

    fn persist(&self, response: AuthResponse) -> User {
        self.store.save(&Session::new(response.token, response.refresh));
        response.user
    }
}
