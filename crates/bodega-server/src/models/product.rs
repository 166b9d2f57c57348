//! Product API Models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use bodega::{Product, ProductFilter};

/// Product as exposed by the API
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            image_url: product.image_url,
            category: product.category,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Create product request; all fields required, checked at the boundary
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

/// Update product request; absent fields keep their current value
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

/// Query options for product listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct ProductListQuery {
    /// Restrict to a category, matched case-insensitively
    pub category: Option<String>,
    /// `price` or `name` for ascending order; anything else is ignored
    pub sort: Option<String>,
}

impl ProductListQuery {
    pub fn into_filter(self) -> ProductFilter {
        ProductFilter {
            category: self.category.filter(|c| !c.trim().is_empty()),
            sort: self.sort.as_deref().and_then(|s| s.parse().ok()),
        }
    }
}

/// `{"products": [...]}` listing envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductListResponse {
    pub products: Vec<ProductDto>,
}

/// `{"product": {...}}` envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub product: ProductDto,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bodega::ProductSort;

    #[test]
    fn query_parses_known_sort_keys() {
        let filter = ProductListQuery {
            category: None,
            sort: Some("price".to_string()),
        }
        .into_filter();
        assert_eq!(filter.sort, Some(ProductSort::Price));
    }

    #[test]
    fn query_drops_unknown_sort_keys() {
        let filter = ProductListQuery {
            category: Some("Snacks".to_string()),
            sort: Some("popularity".to_string()),
        }
        .into_filter();
        assert_eq!(filter.sort, None);
        assert_eq!(filter.category.as_deref(), Some("Snacks"));
    }

    #[test]
    fn query_treats_blank_category_as_absent() {
        let filter = ProductListQuery {
            category: Some("  ".to_string()),
            sort: None,
        }
        .into_filter();
        assert!(filter.category.is_none());
    }
}
