//! Platform keychain credential store
//!
//! Persists the credential pair in the OS keychain (Keychain Access on
//! macOS, Credential Manager on Windows, the kernel keyring on Linux) so a
//! session survives restarts. Entries are named `access.<account>` and
//! `refresh.<account>` under the configured service.

use async_trait::async_trait;
use keyring::Entry;
use plantview_core::CredentialStore;
use plantview_domain::{CredentialConfig, PlantViewError, Result};
use tracing::debug;

use crate::errors::InfraError;

/// [`CredentialStore`] backed by the platform keychain.
pub struct KeychainCredentialStore {
    service_name: String,
    account: String,
    access: Entry,
    refresh: Entry,
}

impl KeychainCredentialStore {
    /// Open the entries for `account` under `service_name`.
    ///
    /// # Errors
    /// Returns `PlantViewError::Credentials` if the keychain rejects the
    /// entry names.
    pub fn new(service_name: impl Into<String>, account: impl Into<String>) -> Result<Self> {
        let service_name = service_name.into();
        let account = account.into();
        let access = open_entry(&service_name, &format!("access.{account}"))?;
        let refresh = open_entry(&service_name, &format!("refresh.{account}"))?;
        Ok(Self { service_name, account, access, refresh })
    }

    /// # Errors
    /// See [`KeychainCredentialStore::new`].
    pub fn from_config(config: &CredentialConfig) -> Result<Self> {
        Self::new(config.service_name.clone(), config.account.clone())
    }

    fn read(&self, entry: &Entry, kind: &'static str) -> Result<Option<String>> {
        match entry.get_password() {
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => {
                debug!(service = %self.service_name, account = %self.account, kind, "no keychain entry");
                Ok(None)
            }
            Err(err) => Err(InfraError::from(err).into()),
        }
    }

    fn write(&self, entry: &Entry, kind: &'static str, secret: &str) -> Result<()> {
        entry.set_password(secret).map_err(|err| PlantViewError::from(InfraError::from(err)))?;
        debug!(service = %self.service_name, account = %self.account, kind, "stored credential in keychain");
        Ok(())
    }

    fn delete(&self, entry: &Entry, kind: &'static str) -> Result<()> {
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => {
                debug!(service = %self.service_name, account = %self.account, kind, "cleared keychain entry");
                Ok(())
            }
            Err(err) => Err(InfraError::from(err).into()),
        }
    }
}

impl std::fmt::Debug for KeychainCredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeychainCredentialStore")
            .field("service_name", &self.service_name)
            .field("account", &self.account)
            .finish_non_exhaustive()
    }
}

fn open_entry(service_name: &str, key: &str) -> Result<Entry> {
    Entry::new(service_name, key).map_err(|err| InfraError::from(err).into())
}

#[async_trait]
impl CredentialStore for KeychainCredentialStore {
    async fn access(&self) -> Result<Option<String>> {
        self.read(&self.access, "access")
    }

    async fn set_access(&self, token: &str) -> Result<()> {
        self.write(&self.access, "access", token)
    }

    async fn refresh(&self) -> Result<Option<String>> {
        self.read(&self.refresh, "refresh")
    }

    async fn set_refresh(&self, token: &str) -> Result<()> {
        self.write(&self.refresh, "refresh", token)
    }

    async fn clear_all(&self) -> Result<()> {
        // Attempt both deletions before reporting the first failure.
        let access = self.delete(&self.access, "access");
        let refresh = self.delete(&self.refresh, "refresh");
        access.and(refresh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_store(account: &str) -> KeychainCredentialStore {
        keyring::set_default_credential_builder(keyring::mock::default_credential_builder());
        KeychainCredentialStore::new("PlantView.test", account).expect("keychain store")
    }

    #[tokio::test]
    async fn missing_entries_read_as_absent() {
        let store = mock_store("empty");
        assert!(store.access().await.unwrap().is_none());
        assert!(store.refresh().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn stores_and_reads_back() {
        let store = mock_store("roundtrip");
        store.set_access("a1").await.unwrap();
        store.set_refresh("r1").await.unwrap();

        assert_eq!(store.access().await.unwrap().as_deref(), Some("a1"));
        assert_eq!(store.refresh().await.unwrap().as_deref(), Some("r1"));
    }

    #[tokio::test]
    async fn clear_all_is_idempotent() {
        let store = mock_store("clear");
        store.set_access("a1").await.unwrap();

        store.clear_all().await.unwrap();
        store.clear_all().await.unwrap();

        assert!(store.access().await.unwrap().is_none());
        assert!(store.refresh().await.unwrap().is_none());
    }

    #[test]
    fn debug_omits_secrets() {
        let store = mock_store("debug");
        let rendered = format!("{store:?}");
        assert!(rendered.contains("PlantView.test"));
        assert!(rendered.contains("debug"));
    }
}
