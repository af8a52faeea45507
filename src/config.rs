//! Client configuration baked in at build time.
//!
//! The browser bundle has no process environment, so values are captured with
//! `option_env!` when the crate is compiled:
//!
//! - `BLOODBANK_API_BASE_URL`: REST root, default `/api`
//! - `BLOODBANK_REQUEST_TIMEOUT_MS`: per-request ceiling, default 10000

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 10_000;
pub const LOGIN_ROUTE: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid request timeout '{0}': expected a positive integer of milliseconds")]
    InvalidTimeout(String),
    #[error("invalid API base URL '{0}'")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST root without a trailing slash.
    pub api_base_url: String,
    pub request_timeout_ms: u32,
    /// Where the session-expired path navigates.
    pub login_route: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            login_route: LOGIN_ROUTE.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Config from the values captured at compile time.
    ///
    /// Invalid values fall back to defaults with a warning; a bad build-time
    /// setting must not leave the bundle unable to start.
    #[must_use]
    pub fn from_build_env() -> Self {
        let base = option_env!("BLOODBANK_API_BASE_URL");
        let timeout = option_env!("BLOODBANK_REQUEST_TIMEOUT_MS");
        Self::from_values(base, timeout).unwrap_or_else(|err| {
            log::warn!("config: {err}; using defaults");
            Self::default()
        })
    }

    /// Build config from raw optional values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a supplied value does not parse.
    pub fn from_values(base_url: Option<&str>, timeout_ms: Option<&str>) -> Result<Self, ConfigError> {
        let api_base_url = parse_base_url(base_url)?;
        let request_timeout_ms = parse_timeout(timeout_ms)?;
        Ok(Self { api_base_url, request_timeout_ms, login_route: LOGIN_ROUTE.to_owned() })
    }

    /// Join an endpoint path (with or without a leading slash) onto the base.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_API_BASE_URL.to_owned());
    };
    let valid = raw.starts_with('/') || raw.starts_with("http://") || raw.starts_with("https://");
    if !valid || raw.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    let trimmed = raw.trim_end_matches('/');
    Ok(if trimmed.is_empty() { String::new() } else { trimmed.to_owned() })
}

fn parse_timeout(raw: Option<&str>) -> Result<u32, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_REQUEST_TIMEOUT_MS);
    };
    match raw.parse::<u32>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(ConfigError::InvalidTimeout(raw.to_owned())),
    }
}
