//! Authentication endpoints

use std::sync::Arc;

use async_trait::async_trait;
use plantview_core::AuthGateway;
use plantview_domain::constants::CURRENT_USER_PATH;
use plantview_domain::{ApiResult, LoginRequest, LoginResponse, User};
use tracing::{debug, instrument};

use super::client::ApiClient;

/// [`AuthGateway`] over the token and profile endpoints
pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for AuthApi {
    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        let path = self.client.config().login_path.clone();
        let tokens = self.client.post(&path, request).await?;
        debug!("credential pair issued");
        Ok(tokens)
    }

    #[instrument(skip(self))]
    async fn me(&self) -> ApiResult<User> {
        self.client.get(CURRENT_USER_PATH).await
    }
}
