//! # PlantView Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The reqwest-backed HTTP transport
//! - The authenticated API client and backend gateways
//! - Credential stores (platform keychain, in-memory)
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `plantview-core`
//! - Contains all "impure" code (network, keychain, filesystem)

pub mod api;
pub mod config;
pub mod credentials;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::{ApiClient, ApiClientBuilder, AuthApi, CatalogApi, HistoryApi};
pub use credentials::{InMemoryCredentialStore, KeychainCredentialStore};
pub use errors::InfraError;
pub use http::{ApiRequest, HttpClient, HttpMethod, RawResponse, Transport};
