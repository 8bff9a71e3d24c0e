//! Product catalog endpoint

use std::sync::Arc;

use async_trait::async_trait;
use plantview_core::catalog::catalog_path;
use plantview_core::CatalogGateway;
use plantview_domain::{ApiResult, CatalogFilters, Product};
use tracing::{debug, instrument};

use super::client::ApiClient;

/// [`CatalogGateway`] over `GET /catalog`
pub struct CatalogApi {
    client: Arc<ApiClient>,
}

impl CatalogApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogGateway for CatalogApi {
    #[instrument(skip(self), fields(client = filters.client))]
    async fn list_products(&self, filters: &CatalogFilters) -> ApiResult<Vec<Product>> {
        let products: Vec<Product> = self.client.get(&catalog_path(filters)).await?;
        debug!(count = products.len(), "catalog loaded");
        Ok(products)
    }
}
