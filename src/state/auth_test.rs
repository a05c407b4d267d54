use std::sync::{Arc, Mutex};

use futures::executor::block_on;

use super::*;
use crate::error::ApiError;
use crate::net::types::{AuthResponse, LoginRequest, UserRole};
use crate::state::session_store::{REFRESH_TOKEN_KEY, StorageSessionStore, TOKEN_KEY};
use crate::test_support::{Call, MemoryStorage, MockAuthApi, TestService, auth_response, sample_user, service};
use crate::util::storage::KeyValueStore;
use crate::util::timeout::Timer;

fn context(svc: TestService) -> AuthContext<StorageSessionStore<MemoryStorage>, MockAuthApi> {
    AuthContext::new(svc, 1_000)
}

fn register_request() -> RegisterRequest {
    RegisterRequest {
        name: "Ada Lovelace".to_owned(),
        email: "ada@school.edu".to_owned(),
        password: "pw".to_owned(),
        role: UserRole::Teacher,
    }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_is_rehydrating() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_signed_in_is_authenticated_and_idle() {
    let state = AuthState::signed_in(sample_user());
    assert!(state.is_authenticated());
    assert!(!state.loading);
}

// =============================================================
// Rehydration
// =============================================================

#[test]
fn new_context_starts_rehydrating() {
    let (svc, _, _) = service(MockAuthApi::new(), CredentialStrategy::Remote);
    let ctx = context(svc);
    assert_eq!(ctx.snapshot(), AuthState::rehydrating());
}

#[test]
fn rehydrate_without_token_signs_out_without_network() {
    let (svc, _, api) = service(MockAuthApi::new(), CredentialStrategy::Remote);
    let ctx = context(svc);

    block_on(ctx.rehydrate());

    assert_eq!(ctx.snapshot(), AuthState::signed_out());
    assert!(api.calls().is_empty());
}

#[test]
fn rehydrate_with_valid_token_restores_exact_user() {
    let api = MockAuthApi::new().with_current_user(Ok(sample_user()));
    let (svc, storage, _) = service(api, CredentialStrategy::Remote);
    storage.set(TOKEN_KEY, "jwt-stored");
    let ctx = context(svc);

    block_on(ctx.rehydrate());

    assert_eq!(ctx.snapshot(), AuthState::signed_in(sample_user()));
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("jwt-stored"));
}

#[test]
fn rehydrate_with_rejected_token_clears_session() {
    let api = MockAuthApi::new().with_current_user(Err(ApiError::Status(401)));
    let (svc, storage, _) = service(api, CredentialStrategy::Remote);
    storage.set(TOKEN_KEY, "expired");
    storage.set(REFRESH_TOKEN_KEY, "stale");
    let ctx = context(svc);

    block_on(ctx.rehydrate());

    assert_eq!(ctx.snapshot(), AuthState::signed_out());
    assert!(storage.is_empty());
}

/// `AuthApi` whose session lookup never completes.
#[derive(Clone, Default)]
struct HangingApi;

impl AuthApi for HangingApi {
    async fn login(&self, _request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn register(&self, _request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn logout(&self, _token: Option<&str>, _refresh: Option<&str>) -> Result<(), ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn current_user(&self, _token: &str) -> Result<User, ApiError> {
        futures::future::pending().await
    }
}

fn elapsed_timer(_timeout_ms: u32) -> Timer {
    Box::pin(futures::future::ready(()))
}

#[test]
fn rehydrate_timeout_clears_session_and_signs_out() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "jwt");
    storage.set(REFRESH_TOKEN_KEY, "refresh");
    let ctx = AuthContext::new(
        AuthService::new(StorageSessionStore::new(storage.clone()), HangingApi, CredentialStrategy::Remote),
        1,
    )
    .with_timer(elapsed_timer);

    block_on(ctx.rehydrate());

    assert_eq!(ctx.snapshot(), AuthState::signed_out());
    assert!(storage.get(TOKEN_KEY).is_none());
    assert!(storage.is_empty());
}

#[test]
fn rehydrate_completes_before_elapsed_timer_when_lookup_is_ready() {
    let api = MockAuthApi::new().with_current_user(Ok(sample_user()));
    let (svc, storage, _) = service(api, CredentialStrategy::Remote);
    storage.set(TOKEN_KEY, "jwt");
    let ctx = context(svc).with_timer(elapsed_timer);

    block_on(ctx.rehydrate());

    assert_eq!(ctx.snapshot(), AuthState::signed_in(sample_user()));
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("jwt"));
}

#[test]
fn rehydrate_runs_only_once() {
    let api = MockAuthApi::new().with_current_user(Ok(sample_user()));
    let (svc, storage, api) = service(api, CredentialStrategy::Remote);
    storage.set(TOKEN_KEY, "jwt");
    let ctx = context(svc);

    block_on(ctx.rehydrate());
    block_on(ctx.logout());
    storage.set(TOKEN_KEY, "jwt-again");
    block_on(ctx.rehydrate());

    assert_eq!(ctx.snapshot(), AuthState::signed_out());
    let lookups = api.calls().into_iter().filter(|c| matches!(c, Call::CurrentUser(_))).count();
    assert_eq!(lookups, 1);
}

#[test]
fn login_then_rehydrate_round_trips_user() {
    let api = MockAuthApi::new()
        .with_login(Ok(auth_response("jwt-1", Some("refresh-1"))))
        .with_current_user(Ok(sample_user()));
    let (svc, storage, _) = service(api.clone(), CredentialStrategy::Remote);
    let first = context(svc);
    block_on(first.rehydrate());
    block_on(first.login("ada@school.edu", "pw")).unwrap();

    // A fresh context over the same storage models a page reload.
    let reloaded = AuthContext::new(
        AuthService::new(StorageSessionStore::new(storage), api, CredentialStrategy::Remote),
        1_000,
    );
    block_on(reloaded.rehydrate());

    assert_eq!(reloaded.snapshot().user, Some(sample_user()));
}

#[test]
fn demo_session_survives_reload() {
    let (svc, storage, api) = service(MockAuthApi::new(), CredentialStrategy::Demo);
    storage.set(TOKEN_KEY, "demo-student-token");
    let ctx = context(svc);

    block_on(ctx.rehydrate());

    assert_eq!(ctx.snapshot().user.map(|u| u.id), Some("demo-student".to_owned()));
    assert!(api.calls().is_empty());
}

// =============================================================
// Login / register / logout
// =============================================================

#[test]
fn login_success_authenticates_and_persists_token() {
    let api = MockAuthApi::new().with_login(Ok(auth_response("jwt-1", None)));
    let (svc, storage, _) = service(api, CredentialStrategy::Remote);
    let ctx = context(svc);
    block_on(ctx.rehydrate());

    block_on(ctx.login("ada@school.edu", "pw")).unwrap();

    let state = ctx.snapshot();
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("jwt-1"));
}

#[test]
fn login_failure_normalizes_error_and_resets_loading() {
    let api = MockAuthApi::new().with_login(Err(ApiError::Transport("offline".to_owned())));
    let (svc, storage, _) = service(api, CredentialStrategy::Remote);
    let ctx = context(svc);
    block_on(ctx.rehydrate());

    let err = block_on(ctx.login("ada@school.edu", "pw")).unwrap_err();

    assert_eq!(err, AuthError::InvalidCredentials);
    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(ctx.snapshot(), AuthState::signed_out());
    assert!(storage.is_empty());
}

#[test]
fn demo_login_authenticates_without_network() {
    let (svc, _, api) = service(MockAuthApi::new(), CredentialStrategy::Demo);
    let ctx = context(svc);
    block_on(ctx.rehydrate());

    block_on(ctx.login("teacher@demo.com", "whatever")).unwrap();

    assert_eq!(ctx.snapshot().user.map(|u| u.role), Some(UserRole::Teacher));
    assert!(api.calls().is_empty());
}

#[test]
fn register_success_authenticates() {
    let api = MockAuthApi::new().with_register(Ok(auth_response("jwt-new", None)));
    let (svc, storage, _) = service(api, CredentialStrategy::Remote);
    let ctx = context(svc);
    block_on(ctx.rehydrate());

    block_on(ctx.register(register_request())).unwrap();

    assert!(ctx.snapshot().is_authenticated());
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("jwt-new"));
}

#[test]
fn register_failure_normalizes_error() {
    let api = MockAuthApi::new().with_register(Err(ApiError::Status(409)));
    let (svc, _, _) = service(api, CredentialStrategy::Remote);
    let ctx = context(svc);
    block_on(ctx.rehydrate());

    let err = block_on(ctx.register(register_request())).unwrap_err();

    assert_eq!(err, AuthError::RegistrationFailed);
    assert_eq!(ctx.snapshot(), AuthState::signed_out());
}

#[test]
fn logout_signs_out_even_when_remote_fails() {
    let api = MockAuthApi::new()
        .with_login(Ok(auth_response("jwt-1", Some("refresh-1"))))
        .with_logout(Err(ApiError::Status(500)));
    let (svc, storage, _) = service(api, CredentialStrategy::Remote);
    let ctx = context(svc);
    block_on(ctx.rehydrate());
    block_on(ctx.login("ada@school.edu", "pw")).unwrap();

    block_on(ctx.logout());

    assert_eq!(ctx.snapshot(), AuthState::signed_out());
    assert!(storage.is_empty());
}

// =============================================================
// Loading flag while a call is in flight
// =============================================================

/// `AuthApi` that records the `loading` flag it observes mid-call.
#[derive(Clone, Default)]
struct ObservingApi {
    state: Arc<Mutex<Option<ReadSignal<AuthState>>>>,
    seen_loading: Arc<Mutex<Vec<bool>>>,
}

impl ObservingApi {
    fn observe(&self) {
        if let Some(signal) = *self.state.lock().unwrap() {
            self.seen_loading.lock().unwrap().push(signal.get_untracked().loading);
        }
    }
}

impl AuthApi for ObservingApi {
    async fn login(&self, _request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.observe();
        Ok(auth_response("jwt", None))
    }

    async fn register(&self, _request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.observe();
        Err(ApiError::Status(400))
    }

    async fn logout(&self, _token: Option<&str>, _refresh: Option<&str>) -> Result<(), ApiError> {
        self.observe();
        Ok(())
    }

    async fn current_user(&self, _token: &str) -> Result<User, ApiError> {
        self.observe();
        Ok(sample_user())
    }
}

#[test]
fn loading_is_set_only_during_login_and_register_calls() {
    let api = ObservingApi::default();
    let storage = MemoryStorage::new();
    let ctx = AuthContext::new(
        AuthService::new(StorageSessionStore::new(storage), api.clone(), CredentialStrategy::Remote),
        1_000,
    );
    *api.state.lock().unwrap() = Some(ctx.state());
    block_on(ctx.rehydrate());

    block_on(ctx.login("ada@school.edu", "pw")).unwrap();
    assert!(!ctx.snapshot().loading);
    block_on(ctx.logout());
    assert!(block_on(ctx.register(register_request())).is_err());
    assert!(!ctx.snapshot().loading);

    // login: loading, logout: idle, register: loading.
    assert_eq!(*api.seen_loading.lock().unwrap(), vec![true, false, true]);
}
