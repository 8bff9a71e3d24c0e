//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Environment variables, when `PLANTVIEW_API_URL` is set
//! 2. Otherwise the first config file found by [`probe_config_paths`]
//! 3. Otherwise built-in defaults
//!
//! The result is validated before it is returned.
//!
//! ## Environment Variables
//! - `PLANTVIEW_API_URL`: Backend base URL (required for env loading)
//! - `PLANTVIEW_API_TIMEOUT_SECS`: Request timeout in seconds
//! - `PLANTVIEW_LOGIN_PATH`: Login endpoint path
//! - `PLANTVIEW_REFRESH_PATH`: Refresh endpoint path
//! - `PLANTVIEW_USER_AGENT`: User-Agent header value
//! - `PLANTVIEW_CREDENTIAL_BACKEND`: `keychain` or `memory`
//! - `PLANTVIEW_KEYCHAIN_SERVICE`: Keychain service name
//! - `PLANTVIEW_KEYCHAIN_ACCOUNT`: Keychain account name
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./plantview.toml`, `./plantview.json`, `./config.toml`, `./config.json`
//! 2. The same names in the parent directory
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use plantview_domain::{ApiConfig, Config, CredentialConfig, PlantViewError, Result};

use crate::errors::InfraError;

const CONFIG_FILE_NAMES: [&str; 4] =
    ["plantview.toml", "plantview.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `PlantViewError::Config` if:
/// - An environment variable or config file holds an invalid value
/// - The resulting configuration fails validation
pub fn load() -> Result<Config> {
    let config = match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            config
        }
        Err(e) => {
            tracing::debug!(error = %e, "Environment configuration unavailable, trying file");
            match probe_config_paths() {
                Some(path) => load_from_file(Some(path))?,
                None => {
                    tracing::info!("No configuration found; using defaults");
                    Config::default()
                }
            }
        }
    };

    config.validate()?;
    Ok(config)
}

/// Load configuration from environment variables
///
/// `PLANTVIEW_API_URL` must be present; every other variable falls back to
/// its default.
///
/// # Errors
/// Returns `PlantViewError::Config` if `PLANTVIEW_API_URL` is missing or a
/// variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var("PLANTVIEW_API_URL")?;
    let defaults = ApiConfig::default();

    let timeout_secs = match optional_env("PLANTVIEW_API_TIMEOUT_SECS") {
        Some(value) => value.parse::<u64>().map_err(|e| {
            PlantViewError::Config(format!("Invalid PLANTVIEW_API_TIMEOUT_SECS: {e}"))
        })?,
        None => defaults.timeout_secs,
    };

    let credential_defaults = CredentialConfig::default();
    let backend = match optional_env("PLANTVIEW_CREDENTIAL_BACKEND") {
        Some(value) => value.parse()?,
        None => credential_defaults.backend,
    };

    Ok(Config {
        api: ApiConfig {
            base_url,
            timeout_secs,
            login_path: optional_env("PLANTVIEW_LOGIN_PATH").unwrap_or(defaults.login_path),
            refresh_path: optional_env("PLANTVIEW_REFRESH_PATH").unwrap_or(defaults.refresh_path),
            user_agent: optional_env("PLANTVIEW_USER_AGENT"),
        },
        credentials: CredentialConfig {
            backend,
            service_name: optional_env("PLANTVIEW_KEYCHAIN_SERVICE")
                .unwrap_or(credential_defaults.service_name),
            account: optional_env("PLANTVIEW_KEYCHAIN_ACCOUNT")
                .unwrap_or(credential_defaults.account),
        },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Supports JSON and
/// TOML (detected by file extension). Missing sections and fields take their
/// defaults.
///
/// # Errors
/// Returns `PlantViewError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(PlantViewError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            PlantViewError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| PlantViewError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content, by file extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let parsed = match extension {
        "toml" => toml::from_str(contents).map_err(InfraError::from),
        "json" => serde_json::from_str(contents).map_err(InfraError::from),
        _ => {
            return Err(PlantViewError::Config(format!("Unsupported config format: {extension}")))
        }
    };

    parsed.map_err(PlantViewError::from)
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut directories = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        directories.push(cwd.clone());
        directories.push(cwd.join(".."));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            directories.push(exe_dir.to_path_buf());
        }
    }

    directories
        .iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    optional_env(key).ok_or_else(|| {
        PlantViewError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Non-empty environment variable, trimmed
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
