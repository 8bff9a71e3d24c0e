//! Domain types and models

pub mod auth;
pub mod catalog;
pub mod history;

pub use auth::{LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, User};
pub use catalog::{CatalogFilters, PriceRange, Product};
pub use history::{
    ExecutionStatus, ExecutionSummary, HistoryDetailResponse, HistoryItem, HistoryQuery,
    HistoryResponse, LineExecutionSummary, Machine, ManufacturingOrder, RevisionSummary,
};
