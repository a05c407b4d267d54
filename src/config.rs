//! Front-end configuration resolved at build time.
//!
//! The WASM bundle has no process environment, so values are baked in with
//! `option_env!` when the crate is compiled:
//!
//! - `EDULEARN_API_URL`: identity API base URL (default `http://localhost:8000/api`)
//! - `EDULEARN_DEMO_LOGINS`: enable the fixed demo accounts (default `true`)
//! - `EDULEARN_REHYDRATE_TIMEOUT_MS`: startup session lookup bound (default `10000`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_REHYDRATE_TIMEOUT_MS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL every auth endpoint path is appended to. No trailing slash.
    pub api_url: String,
    /// Whether `student@demo.com` / `teacher@demo.com` bypass the backend.
    pub demo_logins: bool,
    pub rehydrate_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            demo_logins: true,
            rehydrate_timeout_ms: DEFAULT_REHYDRATE_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    /// Build config from the variables captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first malformed variable.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("EDULEARN_API_URL"),
            option_env!("EDULEARN_DEMO_LOGINS"),
            option_env!("EDULEARN_REHYDRATE_TIMEOUT_MS"),
        )
    }

    /// Build config from raw optional values; `None` selects the default.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first malformed value.
    pub fn from_values(
        api_url: Option<&str>,
        demo_logins: Option<&str>,
        rehydrate_timeout_ms: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_url = match api_url {
            None => DEFAULT_API_URL.to_owned(),
            Some(raw) => {
                let trimmed = raw.trim().trim_end_matches('/');
                if trimmed.is_empty() {
                    return Err(ConfigError::Empty { var: "EDULEARN_API_URL" });
                }
                trimmed.to_owned()
            }
        };
        let demo_logins = match demo_logins {
            None => true,
            Some(raw) => parse_flag("EDULEARN_DEMO_LOGINS", raw)?,
        };
        let rehydrate_timeout_ms = match rehydrate_timeout_ms {
            None => DEFAULT_REHYDRATE_TIMEOUT_MS,
            Some(raw) => parse_timeout("EDULEARN_REHYDRATE_TIMEOUT_MS", raw)?,
        };

        Ok(Self { api_url, demo_logins, rehydrate_timeout_ms })
    }
}

fn parse_flag(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { var, value: raw.to_owned() }),
    }
}

fn parse_timeout(var: &'static str, raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::InvalidNumber { var, value: raw.to_owned() }),
    }
}
