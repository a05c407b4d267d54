//! App-wide transient notification.
//!
//! DESIGN
//! ======
//! Lives at the app root rather than in a page: route guards unmount the login
//! page while a sign-in is in flight, so page-local messages would be lost.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use crate::error::AuthError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, title: title.into(), description: description.into() }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, title: title.into(), description: description.into() }
    }

    /// Notice for a rejected login or registration.
    pub fn from_auth_error(err: &AuthError) -> Self {
        let description = match err {
            AuthError::InvalidCredentials => "Please check your credentials and try again.",
            AuthError::RegistrationFailed => "Please check your information and try again.",
            AuthError::SessionInvalid => "Please sign in again.",
        };
        Self::error(err.to_string(), description)
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Error => "notice notice--error",
        }
    }
}
