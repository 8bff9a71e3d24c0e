//! Application constants
//!
//! Centralized location for domain-level defaults used throughout the
//! application.

// API defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOGIN_PATH: &str = "/auth/token/";
pub const DEFAULT_REFRESH_PATH: &str = "/auth/token/refresh/";
pub const CURRENT_USER_PATH: &str = "/auth/me";

// Feature endpoints
pub const CATALOG_PATH: &str = "/catalog";
pub const PRODUCTION_HISTORY_PATH: &str = "/production-history";

// History paging defaults
pub const DEFAULT_HISTORY_LIMIT: u32 = 200;
pub const DEFAULT_HISTORY_OFFSET: u32 = 0;

// Credential storage
pub const DEFAULT_KEYCHAIN_SERVICE: &str = "PlantView.api";
pub const DEFAULT_ACCOUNT_NAME: &str = "default";
