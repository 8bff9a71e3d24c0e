//! Shared helpers

pub mod query;

pub use query::QueryParams;
