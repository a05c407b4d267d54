//! Credential-resolution strategies for login.
//!
//! `Remote` sends every login to the identity backend. `Demo` first resolves
//! the two reserved demo addresses to fixed identities without touching the
//! network, then falls back to the backend for everything else. Demo builds
//! only; production deployments set `EDULEARN_DEMO_LOGINS=false`.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use crate::net::types::{User, UserRole};

pub const DEMO_STUDENT_EMAIL: &str = "student@demo.com";
pub const DEMO_TEACHER_EMAIL: &str = "teacher@demo.com";

/// A fixed identity plus the token persisted when it signs in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoAccount {
    pub user: User,
    pub token: &'static str,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CredentialStrategy {
    #[default]
    Remote,
    Demo,
}

impl CredentialStrategy {
    pub fn from_demo_flag(demo_logins: bool) -> Self {
        if demo_logins { Self::Demo } else { Self::Remote }
    }

    /// Resolve a login locally. Any password is accepted for a demo address.
    pub fn resolve_login(self, email: &str) -> Option<DemoAccount> {
        match self {
            Self::Remote => None,
            Self::Demo => demo_accounts().into_iter().find(|account| account.user.email == email),
        }
    }

    /// Resolve a persisted demo token back to its identity.
    pub fn resolve_token(self, token: &str) -> Option<User> {
        match self {
            Self::Remote => None,
            Self::Demo => demo_accounts()
                .into_iter()
                .find(|account| account.token == token)
                .map(|account| account.user),
        }
    }
}

pub fn demo_accounts() -> [DemoAccount; 2] {
    [
        DemoAccount {
            user: User {
                id: "demo-student".to_owned(),
                name: "Student Acc".to_owned(),
                email: DEMO_STUDENT_EMAIL.to_owned(),
                role: UserRole::Student,
                avatar: None,
            },
            token: "demo-student-token",
        },
        DemoAccount {
            user: User {
                id: "demo-teacher".to_owned(),
                name: "Teacher Acc".to_owned(),
                email: DEMO_TEACHER_EMAIL.to_owned(),
                role: UserRole::Teacher,
                avatar: None,
            },
            token: "demo-teacher-token",
        },
    ]
}
