//! Test doubles shared by the service and context tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::ApiError;
use crate::net::api::AuthApi;
use crate::net::types::{AuthResponse, LoginRequest, RegisterRequest, User, UserRole};
use crate::services::auth::AuthService;
use crate::services::credentials::CredentialStrategy;
use crate::state::session_store::StorageSessionStore;
use crate::util::storage::KeyValueStore;

pub(crate) type TestService = AuthService<StorageSessionStore<MemoryStorage>, MockAuthApi>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    Login(LoginRequest),
    Register(RegisterRequest),
    Logout { token: Option<String>, refresh: Option<String> },
    CurrentUser(String),
}

#[derive(Default)]
struct MockState {
    login: Option<Result<AuthResponse, ApiError>>,
    register: Option<Result<AuthResponse, ApiError>>,
    logout: Option<Result<(), ApiError>>,
    current_user: Option<Result<User, ApiError>>,
    calls: Vec<Call>,
}

/// Scripted `AuthApi`. Unscripted calls fail with `ApiError::Unavailable`;
/// clones share the script and call log.
#[derive(Clone, Default)]
pub(crate) struct MockAuthApi {
    state: Arc<Mutex<MockState>>,
}

impl MockAuthApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_login(self, result: Result<AuthResponse, ApiError>) -> Self {
        self.lock().login = Some(result);
        self
    }

    pub(crate) fn with_register(self, result: Result<AuthResponse, ApiError>) -> Self {
        self.lock().register = Some(result);
        self
    }

    pub(crate) fn with_logout(self, result: Result<(), ApiError>) -> Self {
        self.lock().logout = Some(result);
        self
    }

    pub(crate) fn with_current_user(self, result: Result<User, ApiError>) -> Self {
        self.lock().current_user = Some(result);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AuthApi for MockAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let mut state = self.lock();
        state.calls.push(Call::Login(request.clone()));
        state.login.clone().unwrap_or(Err(ApiError::Unavailable))
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let mut state = self.lock();
        state.calls.push(Call::Register(request.clone()));
        state.register.clone().unwrap_or(Err(ApiError::Unavailable))
    }

    async fn logout(&self, token: Option<&str>, refresh: Option<&str>) -> Result<(), ApiError> {
        let mut state = self.lock();
        state.calls.push(Call::Logout {
            token: token.map(str::to_owned),
            refresh: refresh.map(str::to_owned),
        });
        state.logout.clone().unwrap_or(Err(ApiError::Unavailable))
    }

    async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        let mut state = self.lock();
        state.calls.push(Call::CurrentUser(token.to_owned()));
        state.current_user.clone().unwrap_or(Err(ApiError::Unavailable))
    }
}

pub(crate) fn sample_user() -> User {
    User {
        id: "u-17".to_owned(),
        name: "Ada Lovelace".to_owned(),
        email: "ada@school.edu".to_owned(),
        role: UserRole::Teacher,
        avatar: Some("https://cdn.school.edu/ada.png".to_owned()),
    }
}

pub(crate) fn auth_response(token: &str, refresh: Option<&str>) -> AuthResponse {
    AuthResponse { user: sample_user(), token: token.to_owned(), refresh: refresh.map(str::to_owned) }
}

/// Service over in-memory storage; returns the storage and mock for inspection.
pub(crate) fn service(api: MockAuthApi, strategy: CredentialStrategy) -> (TestService, MemoryStorage, MockAuthApi) {
    let storage = MemoryStorage::new();
    let service = AuthService::new(StorageSessionStore::new(storage.clone()), api.clone(), strategy);
    (service, storage, api)
}

/// In-process storage; clones share the same map.
#[derive(Clone, Debug, Default)]
pub(crate) struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}
