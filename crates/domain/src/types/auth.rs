//! Authentication payloads
//!
//! Shapes exchanged with the token endpoints and `/auth/me`.

use serde::{Deserialize, Serialize};

/// Credentials posted to the login endpoint
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Credential pair issued on login
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
}

impl std::fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("LoginResponse { .. }")
    }
}

/// Body posted to the refresh endpoint
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Refresh endpoint response; `refresh` is present when the backend rotates.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshResponse {
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub refresh: Option<String>,
}

impl std::fmt::Debug for RefreshResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshResponse")
            .field("has_access", &self.access.is_some())
            .field("rotated", &self.refresh.is_some())
            .finish()
    }
}

/// Signed-in operator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    /// Display name, when the backend sends one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// e.g. `["admin", "operator"]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

impl User {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.as_ref().is_some_and(|roles| roles.iter().any(|r| r == role))
    }
}
