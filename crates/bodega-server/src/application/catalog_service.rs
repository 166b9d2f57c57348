//! Catalog Application Service (Use Case)
//!
//! Orchestrates domain operations for product management.

use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use bodega::{DomainError, Product, ProductFilter, ProductRepository};

/// Application service for catalog operations
pub struct CatalogService<R: ProductRepository> {
    repo: Arc<R>,
}

impl<R: ProductRepository> CatalogService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// List products passing `filter`, in the filter's order
    pub async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, DomainError> {
        self.repo.find_all(filter).await
    }

    /// Get a product by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError> {
        self.repo.find_by_id(id).await
    }

    /// Create a new product
    pub async fn create(
        &self,
        name: String,
        description: String,
        price: Decimal,
        image_url: String,
        category: String,
    ) -> Result<Product, DomainError> {
        if price < Decimal::ZERO {
            return Err(DomainError::validation("price must not be negative"));
        }

        let product = Product::new(name, description, price, image_url, category);
        let saved = self.repo.save(&product).await?;

        tracing::info!("Created product: {} ({})", saved.name, saved.id);

        Ok(saved)
    }

    /// Update a product; absent fields keep their current value
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        description: Option<String>,
        price: Option<Decimal>,
        image_url: Option<String>,
        category: Option<String>,
    ) -> Result<Product, DomainError> {
        if let Some(price) = price {
            if price < Decimal::ZERO {
                return Err(DomainError::validation("price must not be negative"));
            }
        }

        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product", id))?;

        let updated = Product {
            id: current.id,
            name: name.unwrap_or(current.name),
            description: description.unwrap_or(current.description),
            price: price.unwrap_or(current.price),
            image_url: image_url.unwrap_or(current.image_url),
            category: category.unwrap_or(current.category),
            created_at: current.created_at,
            updated_at: chrono::Utc::now(),
        };

        self.repo.save(&updated).await
    }

    /// Delete a product
    pub async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted product: {}", id);
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::InMemoryProducts;
    use bodega::ProductSort;
    use rust_decimal_macros::dec;

    fn service() -> CatalogService<InMemoryProducts> {
        CatalogService::new(Arc::new(InMemoryProducts::default()))
    }

    async fn seed(
        service: &CatalogService<InMemoryProducts>,
        name: &str,
        price: Decimal,
        category: &str,
    ) -> Product {
        service
            .create(
                name.to_string(),
                format!("{} description", name),
                price,
                format!("https://img.example/{}.png", name),
                category.to_string(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn category_filter_matches_case_insensitively() {
        let service = service();
        seed(&service, "Chips", dec!(1.50), "snacks").await;
        seed(&service, "Cola", dec!(1.25), "Drinks").await;

        let found = service
            .list(&ProductFilter::by_category("Snacks"))
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Chips");
    }

    #[tokio::test]
    async fn price_sort_returns_non_decreasing_prices() {
        let service = service();
        seed(&service, "Trail Mix", dec!(4.75), "snacks").await;
        seed(&service, "Gum", dec!(0.50), "snacks").await;
        seed(&service, "Chips", dec!(1.50), "snacks").await;

        let found = service
            .list(&ProductFilter::sorted(ProductSort::Price))
            .await
            .unwrap();

        assert_eq!(found.len(), 3);
        assert!(found.windows(2).all(|w| w[0].price <= w[1].price));
    }

    #[tokio::test]
    async fn name_sort_returns_ascending_names() {
        let service = service();
        seed(&service, "Cola", dec!(1.25), "Drinks").await;
        seed(&service, "Apple Juice", dec!(2.00), "Drinks").await;

        let found = service
            .list(&ProductFilter::sorted(ProductSort::Name))
            .await
            .unwrap();

        let names: Vec<&str> = found.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Apple Juice", "Cola"]);
    }

    #[tokio::test]
    async fn default_listing_keeps_insertion_order() {
        let service = service();
        seed(&service, "Zebra Cakes", dec!(3.00), "snacks").await;
        seed(&service, "Apple Juice", dec!(2.00), "Drinks").await;

        let found = service.list(&ProductFilter::default()).await.unwrap();

        let names: Vec<&str> = found.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Zebra Cakes", "Apple Juice"]);
    }

    #[tokio::test]
    async fn create_rejects_negative_price() {
        let service = service();
        let err = service
            .create(
                "Refund Bait".to_string(),
                "should not exist".to_string(),
                dec!(-1.00),
                "https://img.example/none.png".to_string(),
                "snacks".to_string(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn update_merges_fields_and_snapshots_nothing_else() {
        let service = service();
        let product = seed(&service, "Chips", dec!(1.50), "snacks").await;

        let updated = service
            .update(product.id, None, None, Some(dec!(1.75)), None, None)
            .await
            .unwrap();

        assert_eq!(updated.price, dec!(1.75));
        assert_eq!(updated.name, "Chips");
        assert_eq!(updated.category, "snacks");
    }

    #[tokio::test]
    async fn update_of_unknown_product_is_not_found() {
        let service = service();
        let err = service
            .update(Uuid::new_v4(), Some("Ghost".to_string()), None, None, None, None)
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_reports_whether_anything_was_removed() {
        let service = service();
        let product = seed(&service, "Chips", dec!(1.50), "snacks").await;

        assert!(service.delete(product.id).await.unwrap());
        assert!(!service.delete(product.id).await.unwrap());
    }
}
