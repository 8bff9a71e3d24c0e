use std::sync::Arc;

use plantview_domain::ApiConfig;
use plantview_infra::{ApiClient, InMemoryCredentialStore};
use wiremock::MockServer;

pub const REFRESH_PATH: &str = "/auth/token/refresh/";

/// Store holding access `old` and refresh `r1`.
pub fn signed_in_store() -> Arc<InMemoryCredentialStore> {
    Arc::new(InMemoryCredentialStore::with_tokens("old", Some("r1".to_string())))
}

/// Client talking to `server` with the given store.
pub fn client_for(server: &MockServer, store: Arc<InMemoryCredentialStore>) -> Arc<ApiClient> {
    let client = ApiClient::builder()
        .config(ApiConfig::with_base_url(server.uri()))
        .credentials(store)
        .build()
        .expect("api client should build");
    Arc::new(client)
}
