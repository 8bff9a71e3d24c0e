//! Session management - who is signed in
//!
//! Wraps the auth gateway and credential store with the sign-in lifecycle:
//! login stores the issued pair and loads the profile, logout wipes
//! everything, restore re-establishes a session from stored credentials.

use std::sync::Arc;

use parking_lot::RwLock;
use plantview_domain::{ApiResult, LoginRequest, User};
use tracing::{debug, info, warn};

use super::ports::{AuthGateway, CredentialStore};

/// Sign-in lifecycle and cached profile of the current user
pub struct SessionService {
    gateway: Arc<dyn AuthGateway>,
    credentials: Arc<dyn CredentialStore>,
    user: RwLock<Option<User>>,
}

impl SessionService {
    /// Create a new session service with no cached user
    pub fn new(gateway: Arc<dyn AuthGateway>, credentials: Arc<dyn CredentialStore>) -> Self {
        Self { gateway, credentials, user: RwLock::new(None) }
    }

    /// Sign in, persist both credentials, then load the profile.
    ///
    /// # Errors
    /// Returns the gateway's error for rejected credentials, or an internal
    /// error when the credential store cannot be written.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<User> {
        let request = LoginRequest { email: email.to_string(), password: password.to_string() };
        let tokens = self.gateway.login(&request).await?;

        self.credentials.set_access(&tokens.access).await?;
        self.credentials.set_refresh(&tokens.refresh).await?;

        let user = self.gateway.me().await?;
        info!(user_id = %user.id, "signed in");
        *self.user.write() = Some(user.clone());
        Ok(user)
    }

    /// Drop the cached user and wipe stored credentials.
    ///
    /// # Errors
    /// Returns an internal error when the credential store cannot be cleared;
    /// the cached user is dropped regardless.
    pub async fn logout(&self) -> ApiResult<()> {
        self.user.write().take();
        self.credentials.clear_all().await?;
        info!("signed out");
        Ok(())
    }

    /// Load the user from stored credentials, if any.
    ///
    /// Any failure leaves the session signed out.
    pub async fn restore(&self) -> Option<User> {
        match self.credentials.access().await {
            Ok(Some(_)) => {}
            Ok(None) => {
                debug!("no stored access credential; starting signed out");
                return None;
            }
            Err(err) => {
                warn!(error = %err, "credential store unavailable; starting signed out");
                return None;
            }
        }

        match self.gateway.me().await {
            Ok(user) => {
                debug!(user_id = %user.id, "session restored");
                *self.user.write() = Some(user.clone());
                Some(user)
            }
            Err(err) => {
                debug!(status = err.status, kind = ?err.kind, "session restore failed");
                self.user.write().take();
                None
            }
        }
    }

    /// Reload the profile of the signed-in user.
    ///
    /// # Errors
    /// Returns the gateway's error; the cached user is left unchanged.
    pub async fn refresh_user(&self) -> ApiResult<User> {
        let user = self.gateway.me().await?;
        *self.user.write() = Some(user.clone());
        Ok(user)
    }

    /// Cached profile, if signed in
    pub fn current_user(&self) -> Option<User> {
        self.user.read().clone()
    }

    /// Whether an access credential is stored
    pub async fn is_authenticated(&self) -> bool {
        matches!(self.credentials.access().await, Ok(Some(_)))
    }
}
