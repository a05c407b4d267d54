//! Wire DTOs for the identity REST endpoints.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON so serde round-trips stay lossless;
//! a rehydrated `User` must compare equal to the one originally returned.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role; decides which dashboard and class actions are offered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Student,
    Teacher,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
        }
    }

    /// Parse the value of a role radio/select input.
    pub fn from_input(raw: &str) -> Option<Self> {
        match raw.trim() {
            "student" => Some(Self::Student),
            "teacher" => Some(Self::Teacher),
            _ => None,
        }
    }
}

/// An authenticated user as returned by `/auth/user/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// Avatar image URL, if the account has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Response body of `/auth/login/` and `/auth/register/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    /// Bearer token for subsequent authenticated calls.
    pub token: String,
    /// Refresh token, when the backend issues one.
    #[serde(default, alias = "refreshToken", skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// Body of `/auth/logout/`. `refresh` is sent as `null` when absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutRequest {
    pub refresh: Option<String>,
}
