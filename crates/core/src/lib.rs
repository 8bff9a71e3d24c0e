//! # PlantView Core
//!
//! Business logic layer - no HTTP or storage code.
//!
//! This crate contains:
//! - Port interfaces (traits) for credentials, auth, catalog and history
//! - Session management
//! - The single-flight primitive used to coordinate credential refresh
//! - Request path and query-string construction
//!
//! ## Architecture Principles
//! - Only depends on `plantview-domain`
//! - All external dependencies via traits

pub mod auth;
pub mod catalog;
pub mod history;
pub mod sync;
pub mod utils;

// Re-export specific items to avoid ambiguity
pub use auth::ports::{AuthGateway, CredentialStore};
pub use auth::SessionService;
pub use catalog::ports::CatalogGateway;
pub use history::ports::HistoryGateway;
pub use sync::{SingleFlight, SingleFlightError};
pub use utils::QueryParams;
