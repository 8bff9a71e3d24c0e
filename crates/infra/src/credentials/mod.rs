//! Credential store implementations

pub mod keychain;
pub mod memory;

use std::sync::Arc;

use plantview_core::CredentialStore;
use plantview_domain::{CredentialBackend, CredentialConfig, Result};

pub use keychain::KeychainCredentialStore;
pub use memory::InMemoryCredentialStore;

/// Store selected by `config.backend`
///
/// # Errors
/// Returns `PlantViewError::Credentials` if the keychain cannot be opened.
pub fn store_from_config(config: &CredentialConfig) -> Result<Arc<dyn CredentialStore>> {
    match config.backend {
        CredentialBackend::Keychain => Ok(Arc::new(KeychainCredentialStore::from_config(config)?)),
        CredentialBackend::Memory => Ok(Arc::new(InMemoryCredentialStore::new())),
    }
}
