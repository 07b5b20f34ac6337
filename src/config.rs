//! Runtime configuration for the REST backend and the SSR server.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle cannot read the process environment, so the API base
//! URL is baked in at compile time (`CAMPUS_API_BASE_URL`). The server reads
//! the same variable at startup, after `dotenvy` has loaded a `.env` file.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";
pub const DEFAULT_PORT: u16 = 3000;
pub const API_BASE_URL_ENV: &str = "CAMPUS_API_BASE_URL";

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value '{0}'")]
    InvalidPort(String),
    #[error("invalid {API_BASE_URL_ENV} value '{0}' (expected http:// or https:// URL)")]
    InvalidBaseUrl(String),
}

/// Location of the REST backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::compiled()
    }
}

impl ApiConfig {
    /// Build from an explicit base URL, trimming any trailing `/`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when the value is not an
    /// absolute `http(s)` URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_owned()));
        }
        Ok(Self { base_url: trimmed.to_owned() })
    }

    /// Base URL baked in at compile time, falling back to the local backend.
    pub fn compiled() -> Self {
        option_env!("CAMPUS_API_BASE_URL")
            .and_then(|raw| Self::new(raw).ok())
            .unwrap_or_else(|| Self { base_url: DEFAULT_API_BASE_URL.to_owned() })
    }

    /// Collection URL for a resource path such as `/formateurs/`.
    pub fn endpoint(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.base_url)
    }

    /// Item URL for a resource path and record id, keeping the trailing `/`.
    pub fn item(&self, path: &str, id: &str) -> String {
        let collection = self.endpoint(path);
        let collection = collection.trim_end_matches('/');
        format!("{collection}/{id}/")
    }
}

/// Server-side settings loaded from the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub api: ApiConfig,
}

impl ServerConfig {
    /// Read `PORT` and `CAMPUS_API_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when either variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when either variable is present but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let api = match lookup(API_BASE_URL_ENV) {
            Some(raw) => ApiConfig::new(&raw)?,
            None => ApiConfig::compiled(),
        };
        Ok(Self { port, api })
    }
}
