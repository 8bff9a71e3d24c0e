//! Port interface for the product catalog

use async_trait::async_trait;
use plantview_domain::{ApiResult, CatalogFilters, Product};

/// Read access to the product catalog
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Products visible to `filters.client`, narrowed by the optional filters
    async fn list_products(&self, filters: &CatalogFilters) -> ApiResult<Vec<Product>>;
}
