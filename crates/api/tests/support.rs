#![allow(dead_code)]

use std::sync::Arc;

use plantview_app::AppContext;
use plantview_domain::{ApiConfig, Config, CredentialBackend, CredentialConfig};
use plantview_infra::InMemoryCredentialStore;
use wiremock::MockServer;

/// Config pointing at `server` with in-memory credentials.
pub fn config_for(server: &MockServer) -> Config {
    Config {
        api: ApiConfig::with_base_url(server.uri()),
        credentials: CredentialConfig { backend: CredentialBackend::Memory, ..CredentialConfig::default() },
    }
}

/// Context over `server` sharing `store`.
pub fn context_for(server: &MockServer, store: Arc<InMemoryCredentialStore>) -> AppContext {
    AppContext::with_credentials(config_for(server), store).expect("context should build")
}

/// Store holding access `old` and refresh `r1`.
pub fn signed_in_store() -> Arc<InMemoryCredentialStore> {
    Arc::new(InMemoryCredentialStore::with_tokens("old", Some("r1".to_string())))
}

pub fn user_json() -> serde_json::Value {
    serde_json::json!({
        "id": "42",
        "email": "operator@plant.example",
        "user": "Line Operator",
        "roles": ["operator"]
    })
}
