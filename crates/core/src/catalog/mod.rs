//! Product catalog

pub mod ports;

use plantview_domain::constants::CATALOG_PATH;
use plantview_domain::CatalogFilters;

use crate::utils::query::QueryParams;

/// Request path (with query string) for a catalog search
pub fn catalog_path(filters: &CatalogFilters) -> String {
    QueryParams::new()
        .set("client", Some(filters.client))
        .set("product_code", filters.product_code.as_deref())
        .set("product_description", filters.product_description.as_deref())
        .set("category", filters.category)
        .append_to(CATALOG_PATH)
}
