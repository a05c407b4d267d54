//! REST client for the identity endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call fails with
//! `ApiError::Unavailable`, since these endpoints are only meaningful in the
//! browser. Tests substitute their own `AuthApi` implementation.
//!
//! ERROR HANDLING
//! ==============
//! Calls return `Result<_, ApiError>` and never panic; the auth service decides
//! which failures surface to the user and which are only logged.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::error::ApiError;

use super::types::{AuthResponse, LoginRequest, RegisterRequest, User};
#[cfg(feature = "hydrate")]
use super::types::LogoutRequest;

pub const LOGIN_PATH: &str = "/auth/login/";
pub const REGISTER_PATH: &str = "/auth/register/";
pub const LOGOUT_PATH: &str = "/auth/logout/";
pub const CURRENT_USER_PATH: &str = "/auth/user/";

/// Transport seam between the auth service and the identity backend.
///
/// Tokens are passed explicitly so the implementation never reads the session
/// store itself.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `POST /auth/login/`.
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError>;

    /// `POST /auth/register/`.
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError>;

    /// `POST /auth/logout/` with the refresh token in the body.
    async fn logout(&self, token: Option<&str>, refresh: Option<&str>) -> Result<(), ApiError>;

    /// `GET /auth/user/` authorized by `token`.
    async fn current_user(&self, token: &str) -> Result<User, ApiError>;
}

/// `AuthApi` backed by `fetch` through `gloo-net`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn endpoint(&self, path: &str) -> String {
        endpoint_url(&self.base_url, path)
    }
}

fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
fn transport_error(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn decode_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            log::debug!("POST {LOGIN_PATH}");
            let resp = gloo_net::http::Request::post(&self.endpoint(LOGIN_PATH))
                .json(request)
                .map_err(transport_error)?
                .send()
                .await
                .map_err(transport_error)?;
            decode_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.endpoint(LOGIN_PATH), request);
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            log::debug!("POST {REGISTER_PATH}");
            let resp = gloo_net::http::Request::post(&self.endpoint(REGISTER_PATH))
                .json(request)
                .map_err(transport_error)?
                .send()
                .await
                .map_err(transport_error)?;
            decode_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.endpoint(REGISTER_PATH), request);
            Err(ApiError::Unavailable)
        }
    }

    async fn logout(&self, token: Option<&str>, refresh: Option<&str>) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            log::debug!("POST {LOGOUT_PATH}");
            let mut builder = gloo_net::http::Request::post(&self.endpoint(LOGOUT_PATH));
            if let Some(token) = token {
                builder = builder.header("Authorization", &bearer_header(token));
            }
            let body = LogoutRequest { refresh: refresh.map(str::to_owned) };
            let resp = builder
                .json(&body)
                .map_err(transport_error)?
                .send()
                .await
                .map_err(transport_error)?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.endpoint(LOGOUT_PATH), token, refresh);
            Err(ApiError::Unavailable)
        }
    }

    async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            log::debug!("GET {CURRENT_USER_PATH}");
            let resp = gloo_net::http::Request::get(&self.endpoint(CURRENT_USER_PATH))
                .header("Authorization", &bearer_header(token))
                .send()
                .await
                .map_err(transport_error)?;
            decode_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.endpoint(CURRENT_USER_PATH), token);
            Err(ApiError::Unavailable)
        }
    }
}
