//! Persisted session tokens.
//!
//! The store owns no logic: the auth service is its only writer, and it always
//! clears the access and refresh tokens together.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use crate::util::storage::{KeyValueStore, LocalStorage};

pub const TOKEN_KEY: &str = "token";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Bearer credentials for the current browser session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub refresh_token: Option<String>,
}

impl Session {
    pub fn new(token: impl Into<String>, refresh_token: Option<String>) -> Self {
        Self { token: token.into(), refresh_token }
    }
}

/// Single persisted session slot.
pub trait SessionStore {
    /// Read the stored session; `None` when no access token is present.
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// `SessionStore` over any `KeyValueStore`, using the `token` and
/// `refreshToken` keys.
#[derive(Clone, Debug, Default)]
pub struct StorageSessionStore<K> {
    storage: K,
}

/// Session store persisted in browser `localStorage`.
pub type BrowserSessionStore = StorageSessionStore<LocalStorage>;

impl<K: KeyValueStore> StorageSessionStore<K> {
    pub fn new(storage: K) -> Self {
        Self { storage }
    }
}

impl<K: KeyValueStore> SessionStore for StorageSessionStore<K> {
    fn load(&self) -> Option<Session> {
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let refresh_token = self.storage.get(REFRESH_TOKEN_KEY).filter(|t| !t.is_empty());
        Some(Session { token, refresh_token })
    }

    fn save(&self, session: &Session) {
        self.storage.set(TOKEN_KEY, &session.token);
        match &session.refresh_token {
            Some(refresh) => self.storage.set(REFRESH_TOKEN_KEY, refresh),
            None => self.storage.remove(REFRESH_TOKEN_KEY),
        }
    }

    fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
    }
}
