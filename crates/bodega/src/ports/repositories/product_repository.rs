//! Product Repository Port
//!
//! Abstract interface for catalog persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Product, ProductFilter};

/// Repository interface for Product entities
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find all products passing `filter`, in the filter's order
    async fn find_all(&self, filter: &ProductFilter) -> Result<Vec<Product>, DomainError>;

    /// Find a product by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError>;

    /// Save a product (insert or update)
    async fn save(&self, product: &Product) -> Result<Product, DomainError>;

    /// Delete a product by ID
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
