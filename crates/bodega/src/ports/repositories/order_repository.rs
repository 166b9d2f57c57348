//! Order Repository Port
//!
//! Abstract interface for order and order-item persistence. Items belong to
//! their order, so both live behind the same port.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Order, OrderItem};

/// Repository interface for Order entities and their items
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Find all orders
    async fn find_all(&self) -> Result<Vec<Order>, DomainError>;

    /// Find an order by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError>;

    /// Save an order (insert or update)
    async fn save(&self, order: &Order) -> Result<Order, DomainError>;

    /// Delete an order by ID, together with its items
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Attach one item to an order. Each call is an independent write; there
    /// is no batching and no transaction spanning several items.
    async fn add_item(&self, item: &OrderItem) -> Result<OrderItem, DomainError>;

    /// Find the items belonging to one order
    async fn find_items(&self, order_id: Uuid) -> Result<Vec<OrderItem>, DomainError>;

    /// Find every item across all orders
    async fn find_all_items(&self) -> Result<Vec<OrderItem>, DomainError>;
}
