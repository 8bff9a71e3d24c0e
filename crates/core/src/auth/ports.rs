//! Port interfaces for authentication
//!
//! These traits define the boundaries between the session logic in core and
//! the credential storage and HTTP implementations in infra.

use async_trait::async_trait;
use plantview_domain::{ApiResult, LoginRequest, LoginResponse, Result, User};

/// Persistent storage for the access/refresh credential pair.
///
/// Absent credentials read as `Ok(None)`; only storage failures are errors.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Current access credential
    async fn access(&self) -> Result<Option<String>>;

    /// Replace the access credential
    async fn set_access(&self, token: &str) -> Result<()>;

    /// Current refresh credential
    async fn refresh(&self) -> Result<Option<String>>;

    /// Replace the refresh credential
    async fn set_refresh(&self, token: &str) -> Result<()>;

    /// Remove both credentials. Succeeds when nothing is stored.
    async fn clear_all(&self) -> Result<()>;
}

/// Backend authentication endpoints
///
/// Credential refresh is not part of this port; the API client performs it
/// when a request is rejected with 401.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange email and password for a credential pair
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse>;

    /// Profile of the signed-in user
    async fn me(&self) -> ApiResult<User>;
}
