//! Session commands

use plantview_domain::{ApiResult, User};
use serde::Serialize;

use crate::context::AppContext;
use crate::utils::command_helpers::execute_logged;

/// Outcome of `status`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SessionStatus {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Sign in and persist both credentials.
pub async fn login(ctx: &AppContext, email: &str, password: &str) -> ApiResult<User> {
    execute_logged("auth::login", ctx.session.login(email, password)).await
}

/// Forget the stored credentials.
pub async fn logout(ctx: &AppContext) -> ApiResult<()> {
    execute_logged("auth::logout", ctx.session.logout()).await
}

/// Fetch the signed-in user from the backend.
pub async fn current_user(ctx: &AppContext) -> ApiResult<User> {
    execute_logged("auth::current_user", ctx.session.refresh_user()).await
}

/// Report whether the stored credentials still resolve to a user.
///
/// Never fails: an expired or missing session is reported as signed out.
pub async fn session_status(ctx: &AppContext) -> ApiResult<SessionStatus> {
    execute_logged("auth::session_status", async {
        let user = ctx.session.restore().await;
        Ok(SessionStatus { authenticated: user.is_some(), user })
    })
    .await
}
