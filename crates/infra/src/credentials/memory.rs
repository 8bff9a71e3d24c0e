//! Process-local credential store

use async_trait::async_trait;
use parking_lot::RwLock;
use plantview_core::CredentialStore;
use plantview_domain::Result;

#[derive(Default)]
struct Tokens {
    access: Option<String>,
    refresh: Option<String>,
}

/// Credentials held in memory for the lifetime of the process.
#[derive(Default)]
pub struct InMemoryCredentialStore {
    tokens: RwLock<Tokens>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a credential pair
    pub fn with_tokens(access: impl Into<String>, refresh: Option<String>) -> Self {
        Self { tokens: RwLock::new(Tokens { access: Some(access.into()), refresh }) }
    }
}

impl std::fmt::Debug for InMemoryCredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tokens = self.tokens.read();
        f.debug_struct("InMemoryCredentialStore")
            .field("has_access", &tokens.access.is_some())
            .field("has_refresh", &tokens.refresh.is_some())
            .finish()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn access(&self) -> Result<Option<String>> {
        Ok(self.tokens.read().access.clone())
    }

    async fn set_access(&self, token: &str) -> Result<()> {
        self.tokens.write().access = Some(token.to_string());
        Ok(())
    }

    async fn refresh(&self) -> Result<Option<String>> {
        Ok(self.tokens.read().refresh.clone())
    }

    async fn set_refresh(&self, token: &str) -> Result<()> {
        self.tokens.write().refresh = Some(token.to_string());
        Ok(())
    }

    async fn clear_all(&self) -> Result<()> {
        *self.tokens.write() = Tokens::default();
        Ok(())
    }
}
