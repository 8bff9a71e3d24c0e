//! Product catalog commands

use plantview_domain::{ApiError, ApiResult, CatalogFilters, Product};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_logged;

/// List the products available to a client.
///
/// # Errors
/// Rejects a non-positive client id before any request is sent.
pub async fn list_products(ctx: &AppContext, filters: &CatalogFilters) -> ApiResult<Vec<Product>> {
    execute_logged("catalog::list_products", async {
        if filters.client <= 0 {
            return Err(ApiError::from_status(400, "Client id must be a positive number"));
        }
        ctx.catalog.list_products(filters).await
    })
    .await
}
