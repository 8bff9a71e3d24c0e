//! Configuration structures
//!
//! Loading (environment, files) lives in `plantview-infra::config`; this
//! module only defines the shape and the defaults.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ACCOUNT_NAME, DEFAULT_API_BASE_URL, DEFAULT_KEYCHAIN_SERVICE, DEFAULT_LOGIN_PATH,
    DEFAULT_REFRESH_PATH, DEFAULT_TIMEOUT_SECS,
};
use crate::{PlantViewError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub credentials: CredentialConfig,
}

/// Backend API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base origin every request path is appended to (no trailing slash).
    pub base_url: String,
    pub timeout_secs: u64,
    /// Login endpoint; 401s on paths under it never trigger a refresh.
    pub login_path: String,
    /// Refresh endpoint; 401s on paths under it never trigger a refresh.
    pub refresh_path: String,
    pub user_agent: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            refresh_path: DEFAULT_REFRESH_PATH.to_string(),
            user_agent: None,
        }
    }
}

impl ApiConfig {
    /// Config pointing at `base_url` with every other field defaulted.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Self::default() }
    }

    /// Whether `path` addresses the login or refresh endpoints.
    pub fn is_auth_endpoint(&self, path: &str) -> bool {
        path.starts_with(&self.login_path) || path.starts_with(&self.refresh_path)
    }
}

/// Where credentials are persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialBackend {
    /// Platform keychain (survives restarts)
    #[default]
    Keychain,
    /// Process memory only
    Memory,
}

impl std::str::FromStr for CredentialBackend {
    type Err = PlantViewError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keychain" => Ok(Self::Keychain),
            "memory" => Ok(Self::Memory),
            other => {
                Err(PlantViewError::Config(format!("Unknown credential backend: {other}")))
            }
        }
    }
}

/// Credential store settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialConfig {
    pub backend: CredentialBackend,
    /// Keychain service name
    pub service_name: String,
    /// Keychain account the credential pair is stored under
    pub account: String,
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            backend: CredentialBackend::default(),
            service_name: DEFAULT_KEYCHAIN_SERVICE.to_string(),
            account: DEFAULT_ACCOUNT_NAME.to_string(),
        }
    }
}

impl Config {
    /// Reject configurations the client cannot work with.
    ///
    /// # Errors
    /// Returns `PlantViewError::Config` describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(PlantViewError::Config("api.base_url must not be empty".into()));
        }
        if self.api.timeout_secs == 0 {
            return Err(PlantViewError::Config("api.timeout_secs must be positive".into()));
        }
        for (name, path) in
            [("api.login_path", &self.api.login_path), ("api.refresh_path", &self.api.refresh_path)]
        {
            if !path.starts_with('/') {
                return Err(PlantViewError::Config(format!("{name} must start with '/'")));
            }
        }
        if self.credentials.backend == CredentialBackend::Keychain
            && self.credentials.service_name.trim().is_empty()
        {
            return Err(PlantViewError::Config(
                "credentials.service_name must not be empty".into(),
            ));
        }
        Ok(())
    }
}
