//! Client configuration baked in at build time.
//!
//! A WASM bundle has no process environment at runtime, so values come from
//! `option_env!` when the bundle is compiled and fall back to the defaults
//! below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";

/// Errors produced while validating client configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("KALAA_API_BASE_URL must be an http(s) URL or an absolute path, got '{0}'")]
    InvalidApiBase(String),

    #[error("KALAA_TOKEN_KEY must not be empty")]
    EmptyTokenKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST API root without a trailing slash.
    pub api_base_url: String,
    /// `localStorage` key holding the bearer token.
    pub token_storage_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build config from build-time environment variables.
    ///
    /// Optional:
    /// - `KALAA_API_BASE_URL`: default `http://localhost:8080/api`
    /// - `KALAA_TOKEN_KEY`: default `token`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a provided value is malformed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("KALAA_API_BASE_URL"), option_env!("KALAA_TOKEN_KEY"))
    }

    /// Build config from raw optional values; `None` selects the default.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a provided value is malformed.
    pub fn from_values(api_base_url: Option<&str>, token_storage_key: Option<&str>) -> Result<Self, ConfigError> {
        let api_base_url = parse_api_base(api_base_url.unwrap_or(DEFAULT_API_BASE_URL))?;
        let token_storage_key = token_storage_key.unwrap_or(DEFAULT_TOKEN_STORAGE_KEY).trim();
        if token_storage_key.is_empty() {
            return Err(ConfigError::EmptyTokenKey);
        }
        Ok(Self { api_base_url, token_storage_key: token_storage_key.to_owned() })
    }
}

fn parse_api_base(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let valid = trimmed.starts_with("http://") || trimmed.starts_with("https://") || trimmed.starts_with('/');
    if !valid {
        return Err(ConfigError::InvalidApiBase(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}
