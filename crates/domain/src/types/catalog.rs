//! Product catalog types

use serde::{Deserialize, Serialize};

/// Catalog search filters; `client` is mandatory, the rest narrow the result.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogFilters {
    pub client: i64,
    pub product_code: Option<String>,
    pub product_description: Option<String>,
    pub category: Option<i64>,
}

impl CatalogFilters {
    pub fn for_client(client: i64) -> Self {
        Self { client, ..Self::default() }
    }
}

/// Volume price tier for a product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceRange {
    pub units_from: f64,
    /// Upper bound as sent by the backend (may be open-ended text)
    pub units_to: String,
    pub price: f64,
    pub discount_1: f64,
    pub discount_2: f64,
    pub discount_3: f64,
    pub key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub product_code: String,
    pub product_description: String,
    pub units_per_package: f64,
    pub units: f64,
    #[serde(default)]
    pub price_ranges: Vec<PriceRange>,
}

impl Product {
    /// Price tier that applies to `quantity` units, if any.
    pub fn price_for(&self, quantity: f64) -> Option<&PriceRange> {
        self.price_ranges.iter().rev().find(|range| quantity >= range.units_from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        serde_json::from_value(serde_json::json!({
            "product_code": "P-100",
            "product_description": "Steel bracket",
            "units_per_package": 50,
            "units": 1,
            "price_ranges": [
                {"units_from": 1, "units_to": "99", "price": 2.5,
                 "discount_1": 0, "discount_2": 0, "discount_3": 0, "key": "A"},
                {"units_from": 100, "units_to": "", "price": 2.1,
                 "discount_1": 5, "discount_2": 0, "discount_3": 0, "key": "B"}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_product_deserializes_integer_quantities() {
        let product = product();
        assert_eq!(product.units_per_package, 50.0);
        assert_eq!(product.price_ranges.len(), 2);
    }

    #[test]
    fn test_price_for_picks_highest_applicable_tier() {
        let product = product();
        assert_eq!(product.price_for(10.0).map(|r| r.key.as_str()), Some("A"));
        assert_eq!(product.price_for(250.0).map(|r| r.key.as_str()), Some("B"));
        assert!(product.price_for(0.0).is_none());
    }
}
