//! Authenticated API client
//!
//! Every request carries the stored access credential. A 401 from any
//! endpoint other than login/refresh triggers one credential refresh, shared
//! by every request that fails while it is pending, after which the original
//! request is replayed exactly once with the new credential. A failed refresh
//! wipes the stored credentials.

use std::sync::Arc;

use plantview_core::{CredentialStore, SingleFlight};
use plantview_domain::{
    ApiConfig, ApiError, ApiResult, PlantViewError, RefreshRequest, RefreshResponse, Result,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::response::ResponseEnvelope;
use crate::http::{ApiRequest, HttpClient, HttpMethod, Transport};

const UNAUTHORIZED: u16 = 401;

/// API client with transparent credential refresh
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    credentials: Arc<dyn CredentialStore>,
    config: ApiConfig,
    refresh: SingleFlight<ApiResult<String>>,
}

impl ApiClient {
    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Whether a credential refresh is currently pending
    pub fn is_refreshing(&self) -> bool {
        self.refresh.is_in_flight()
    }

    /// Execute a GET request
    ///
    /// # Errors
    /// Returns the normalized [`ApiError`] of the final attempt.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.execute(ApiRequest::new(HttpMethod::Get, path, None)).await
    }

    /// Execute a POST request with a JSON body
    ///
    /// # Errors
    /// Returns the normalized [`ApiError`] of the final attempt.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.execute(ApiRequest::new(HttpMethod::Post, path, Some(encode_body(body)?))).await
    }

    /// Execute a PUT request with a JSON body
    ///
    /// # Errors
    /// Returns the normalized [`ApiError`] of the final attempt.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.execute(ApiRequest::new(HttpMethod::Put, path, Some(encode_body(body)?))).await
    }

    /// Execute a PATCH request with a JSON body
    ///
    /// # Errors
    /// Returns the normalized [`ApiError`] of the final attempt.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.execute(ApiRequest::new(HttpMethod::Patch, path, Some(encode_body(body)?))).await
    }

    /// Execute a DELETE request
    ///
    /// # Errors
    /// Returns the normalized [`ApiError`] of the final attempt.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.execute(ApiRequest::new(HttpMethod::Delete, path, None)).await
    }

    /// Send `request` with the stored access credential, refreshing and
    /// replaying it once on 401.
    ///
    /// A missing access credential is not an error; the request goes out
    /// without an `Authorization` header.
    ///
    /// # Errors
    /// - the final attempt's non-2xx status and backend message
    /// - `Unauthorized` when the session cannot be refreshed
    /// - `Transport` (status 0) when no response was received
    /// - `Internal` when the credential store fails
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<T> {
        let access = self.credentials.access().await?;
        let response = self.transport.send(&request, access.as_deref()).await?;

        if response.status != UNAUTHORIZED {
            return ResponseEnvelope::from_raw(response).into_result();
        }

        if self.config.is_auth_endpoint(&request.path) {
            debug!(path = %request.path, "401 from authentication endpoint; not refreshing");
            return ResponseEnvelope::from_raw(response).into_result();
        }

        debug!(path = %request.path, "access credential rejected; refreshing");
        let access = self.refreshed_access().await?;

        let retried = self.transport.send(&request, Some(&access)).await?;
        if retried.status == UNAUTHORIZED {
            warn!(path = %request.path, "request rejected again after refresh");
        }
        ResponseEnvelope::from_raw(retried).into_result()
    }

    /// Join the pending refresh or start one.
    async fn refreshed_access(&self) -> ApiResult<String> {
        let transport = Arc::clone(&self.transport);
        let credentials = Arc::clone(&self.credentials);
        let refresh_path = self.config.refresh_path.clone();

        match self.refresh.run(move || refresh_session(transport, credentials, refresh_path)).await
        {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(error = %err, "credential refresh did not complete");
                clear_credentials(self.credentials.as_ref()).await;
                Err(ApiError::internal(err.to_string()))
            }
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("refresh", &self.refresh)
            .finish_non_exhaustive()
    }
}

/// Refresh the session; wipes stored credentials on any failure.
async fn refresh_session(
    transport: Arc<dyn Transport>,
    credentials: Arc<dyn CredentialStore>,
    refresh_path: String,
) -> ApiResult<String> {
    match request_new_access(transport.as_ref(), credentials.as_ref(), &refresh_path).await {
        Ok(access) => {
            info!("access credential refreshed");
            Ok(access)
        }
        Err(err) => {
            warn!(status = err.status, kind = ?err.kind, "credential refresh failed; clearing credentials");
            clear_credentials(credentials.as_ref()).await;
            Err(err)
        }
    }
}

async fn request_new_access(
    transport: &dyn Transport,
    credentials: &dyn CredentialStore,
    refresh_path: &str,
) -> ApiResult<String> {
    let Some(refresh) = credentials.refresh().await? else {
        return Err(ApiError::unauthorized(UNAUTHORIZED, "No refresh token available"));
    };

    let body = encode_body(&RefreshRequest { refresh })?;
    let request = ApiRequest::new(HttpMethod::Post, refresh_path, Some(body));
    let envelope = ResponseEnvelope::from_raw(transport.send(&request, None).await?);

    if !envelope.is_success() {
        let message = envelope.message();
        return Err(ApiError::unauthorized(envelope.status, message));
    }

    let tokens: RefreshResponse = serde_json::from_value(envelope.body).unwrap_or_default();
    let Some(access) = tokens.access.filter(|token| !token.is_empty()) else {
        return Err(ApiError::protocol(500, "Refresh response did not include an access token"));
    };

    credentials.set_access(&access).await?;
    if let Some(rotated) = tokens.refresh.filter(|token| !token.is_empty()) {
        debug!("refresh credential rotated");
        credentials.set_refresh(&rotated).await?;
    }

    Ok(access)
}

async fn clear_credentials(credentials: &dyn CredentialStore) {
    if let Err(err) = credentials.clear_all().await {
        warn!(error = %err, "failed to clear stored credentials");
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> ApiResult<serde_json::Value> {
    serde_json::to_value(body)
        .map_err(|err| ApiError::internal(format!("Failed to serialize body: {err}")))
}

/// Builder for API client
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiConfig>,
    credentials: Option<Arc<dyn CredentialStore>>,
    transport: Option<Arc<dyn Transport>>,
}

impl ApiClientBuilder {
    /// Set the API configuration
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the credential store
    pub fn credentials(mut self, credentials: Arc<dyn CredentialStore>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Replace the default reqwest transport
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns `PlantViewError::Config` if the credential store is missing or
    /// the HTTP client cannot be created.
    pub fn build(self) -> Result<ApiClient> {
        let config = self.config.unwrap_or_default();
        let credentials = self
            .credentials
            .ok_or_else(|| PlantViewError::Config("Credential store not set".to_string()))?;
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpClient::from_config(&config)?),
        };

        Ok(ApiClient { transport, credentials, config, refresh: SingleFlight::new("refresh") })
    }
}
