//! Application context - dependency injection container

use std::sync::Arc;

use plantview_core::{CatalogGateway, CredentialStore, HistoryGateway, SessionService};
use plantview_domain::{Config, Result};
use plantview_infra::credentials::store_from_config;
use plantview_infra::{config, ApiClient, AuthApi, CatalogApi, HistoryApi};
use tracing::{debug, info};

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub credentials: Arc<dyn CredentialStore>,
    pub client: Arc<ApiClient>,
    pub session: Arc<SessionService>,
    pub catalog: Arc<dyn CatalogGateway>,
    pub history: Arc<dyn HistoryGateway>,
}

impl AppContext {
    /// Load configuration and build the context.
    ///
    /// # Errors
    /// Returns `PlantViewError::Config` for invalid configuration and
    /// `PlantViewError::Credentials` if the credential store cannot be opened.
    pub fn new() -> Result<Self> {
        Self::from_config(config::load()?)
    }

    /// Build the context from an explicit configuration.
    ///
    /// # Errors
    /// See [`AppContext::new`].
    pub fn from_config(config: Config) -> Result<Self> {
        config.validate()?;
        let credentials = store_from_config(&config.credentials)?;
        Self::with_credentials(config, credentials)
    }

    /// Build the context around an existing credential store.
    ///
    /// # Errors
    /// Returns `PlantViewError::Config` if the HTTP client cannot be built.
    pub fn with_credentials(config: Config, credentials: Arc<dyn CredentialStore>) -> Result<Self> {
        let client = Arc::new(
            ApiClient::builder()
                .config(config.api.clone())
                .credentials(Arc::clone(&credentials))
                .build()?,
        );

        let auth = Arc::new(AuthApi::new(Arc::clone(&client)));
        let session = Arc::new(SessionService::new(auth, Arc::clone(&credentials)));
        let catalog: Arc<dyn CatalogGateway> = Arc::new(CatalogApi::new(Arc::clone(&client)));
        let history: Arc<dyn HistoryGateway> = Arc::new(HistoryApi::new(Arc::clone(&client)));

        debug!(backend = ?config.credentials.backend, "credential store ready");
        info!(base_url = %config.api.base_url, "PlantView context initialized");

        Ok(Self { config, credentials, client, session, catalog, history })
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").field("config", &self.config).finish_non_exhaustive()
    }
}
