//! Authenticated access to the PlantView backend
//!
//! [`ApiClient`] is the single entry point for HTTP calls: it attaches the
//! stored access credential, refreshes it once when the backend answers 401,
//! and normalizes every failure into [`plantview_domain::ApiError`]. The
//! gateway types implement the core ports on top of it.

pub mod auth;
pub mod catalog;
pub mod client;
pub mod history;
pub mod response;

pub use auth::AuthApi;
pub use catalog::CatalogApi;
pub use client::{ApiClient, ApiClientBuilder};
pub use history::HistoryApi;
pub use response::ResponseEnvelope;
