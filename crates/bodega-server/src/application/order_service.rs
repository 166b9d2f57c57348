//! Order Application Service (Use Case)
//!
//! Orchestrates order creation, item attachment and on-demand total
//! computation. Checkout is a sequence of independent writes: the client
//! creates the order, then attaches items one call at a time. A failure
//! partway through leaves the order with the items created so far; nothing
//! here rolls back or compensates.

use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use bodega::{
    order_total, DomainError, Order, OrderItem, OrderRepository, OrderStatus, ProductRepository,
};

/// Application service for order operations
pub struct OrderService<R: OrderRepository, P: ProductRepository> {
    orders: Arc<R>,
    products: Arc<P>,
}

impl<R: OrderRepository, P: ProductRepository> OrderService<R, P> {
    pub fn new(orders: Arc<R>, products: Arc<P>) -> Self {
        Self { orders, products }
    }

    /// Get all orders with their items
    pub async fn list_all(&self) -> Result<Vec<(Order, Vec<OrderItem>)>, DomainError> {
        let orders = self.orders.find_all().await?;
        let mut results = Vec::with_capacity(orders.len());

        for order in orders {
            let items = self.orders.find_items(order.id).await?;
            results.push((order, items));
        }

        Ok(results)
    }

    /// Get an order by ID with its items
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<(Order, Vec<OrderItem>)>, DomainError> {
        let order = match self.orders.find_by_id(id).await? {
            Some(o) => o,
            None => return Ok(None),
        };

        let items = self.orders.find_items(order.id).await?;

        Ok(Some((order, items)))
    }

    /// Create a new order with zero total; items are attached afterwards
    pub async fn create(
        &self,
        customer: String,
        dorm: String,
        status: Option<OrderStatus>,
    ) -> Result<Order, DomainError> {
        let order = Order::new(customer, dorm, status);
        let saved = self.orders.save(&order).await?;

        tracing::info!("Created order: {} for {}", saved.id, saved.customer);

        Ok(saved)
    }

    /// Update an order; absent fields keep their current value.
    ///
    /// Passing `total` here is the only way the cached total is ever
    /// persisted.
    pub async fn update(
        &self,
        id: Uuid,
        customer: Option<String>,
        dorm: Option<String>,
        status: Option<OrderStatus>,
        total: Option<Decimal>,
    ) -> Result<Order, DomainError> {
        let current = self
            .orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Order", id))?;

        let updated = Order {
            id: current.id,
            customer: customer.unwrap_or(current.customer),
            dorm: dorm.unwrap_or(current.dorm),
            status: status.unwrap_or(current.status),
            total: total.unwrap_or(current.total),
            created_at: current.created_at,
            updated_at: chrono::Utc::now(),
        };

        self.orders.save(&updated).await
    }

    /// Delete an order together with its items
    pub async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let deleted = self.orders.delete(id).await?;
        if deleted {
            tracing::info!("Deleted order: {}", id);
        }
        Ok(deleted)
    }

    /// Attach one item to an order, snapshotting the supplied price.
    ///
    /// The order and the product must both exist at this moment; the price
    /// is stored as-is and stays put if the product's price changes later.
    pub async fn add_item(
        &self,
        order_id: Uuid,
        product_id: Uuid,
        quantity: i32,
        price: Decimal,
    ) -> Result<OrderItem, DomainError> {
        if quantity <= 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        if price < Decimal::ZERO {
            return Err(DomainError::validation("price must not be negative"));
        }

        self.orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Order", order_id))?;
        self.products
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product", product_id))?;

        let item = OrderItem::new(order_id, product_id, quantity, price);
        let saved = self.orders.add_item(&item).await?;

        tracing::info!(
            "Added item to order {}: product {} x{}",
            saved.order_id,
            saved.product_id,
            saved.quantity
        );

        Ok(saved)
    }

    /// Items belonging to one order
    pub async fn items_of(&self, order_id: Uuid) -> Result<Vec<OrderItem>, DomainError> {
        self.orders.find_items(order_id).await
    }

    /// Every item across all orders
    pub async fn list_items(&self) -> Result<Vec<OrderItem>, DomainError> {
        self.orders.find_all_items().await
    }

    /// Compute the order total on demand: Σ price × quantity over the
    /// order's items.
    ///
    /// The result is never written back to the order; persisting the cached
    /// total is the caller's explicit decision via `update`. An unknown
    /// order has no items and totals zero, matching the read path.
    pub async fn calculate_total(&self, order_id: Uuid) -> Result<Decimal, DomainError> {
        let items = self.orders.find_items(order_id).await?;
        Ok(order_total(&items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{InMemoryOrders, InMemoryProducts};
    use crate::application::CatalogService;
    use rust_decimal_macros::dec;

    struct Harness {
        orders: Arc<InMemoryOrders>,
        catalog: CatalogService<InMemoryProducts>,
        service: OrderService<InMemoryOrders, InMemoryProducts>,
    }

    fn harness() -> Harness {
        let orders = Arc::new(InMemoryOrders::default());
        let products = Arc::new(InMemoryProducts::default());
        Harness {
            orders: orders.clone(),
            catalog: CatalogService::new(products.clone()),
            service: OrderService::new(orders, products),
        }
    }

    async fn seed_product(h: &Harness, name: &str, price: Decimal) -> bodega::Product {
        h.catalog
            .create(
                name.to_string(),
                format!("{} description", name),
                price,
                format!("https://img.example/{}.png", name),
                "snacks".to_string(),
            )
            .await
            .unwrap()
    }

    async fn seed_order(h: &Harness) -> Order {
        h.service
            .create("Ada".to_string(), "D-204".to_string(), None)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn new_order_is_pending_with_zero_total() {
        let h = harness();
        let order = seed_order(&h).await;

        assert!(order.status.is_pending());
        assert_eq!(order.total, Decimal::ZERO);
        assert!(h.service.items_of(order.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn calculate_total_sums_price_times_quantity_exactly() {
        let h = harness();
        let order = seed_order(&h).await;
        let snack = seed_product(&h, "Chips", dec!(2.50)).await;
        let drink = seed_product(&h, "Cola", dec!(1.00)).await;

        h.service
            .add_item(order.id, snack.id, 3, dec!(2.50))
            .await
            .unwrap();
        h.service
            .add_item(order.id, drink.id, 2, dec!(1.00))
            .await
            .unwrap();

        assert_eq!(h.service.calculate_total(order.id).await.unwrap(), dec!(9.50));
    }

    #[tokio::test]
    async fn calculate_total_of_order_without_items_is_zero() {
        let h = harness();
        let order = seed_order(&h).await;

        assert_eq!(
            h.service.calculate_total(order.id).await.unwrap(),
            Decimal::ZERO
        );
    }

    #[tokio::test]
    async fn calculate_total_of_unknown_order_is_zero() {
        let h = harness();

        assert_eq!(
            h.service.calculate_total(Uuid::new_v4()).await.unwrap(),
            Decimal::ZERO
        );
    }

    #[tokio::test]
    async fn calculate_total_does_not_persist_the_cached_total() {
        let h = harness();
        let order = seed_order(&h).await;
        let snack = seed_product(&h, "Chips", dec!(2.50)).await;

        h.service
            .add_item(order.id, snack.id, 2, dec!(2.50))
            .await
            .unwrap();
        assert_eq!(h.service.calculate_total(order.id).await.unwrap(), dec!(5.00));

        let (stored, _) = h.service.get_by_id(order.id).await.unwrap().unwrap();
        assert_eq!(stored.total, Decimal::ZERO);
    }

    #[tokio::test]
    async fn item_price_is_a_snapshot_not_a_live_reference() {
        let h = harness();
        let order = seed_order(&h).await;
        let snack = seed_product(&h, "Chips", dec!(2.50)).await;

        h.service
            .add_item(order.id, snack.id, 2, snack.price)
            .await
            .unwrap();

        // Catalog price change after the fact must not touch the order.
        h.catalog
            .update(snack.id, None, None, Some(dec!(9.99)), None, None)
            .await
            .unwrap();

        assert_eq!(h.service.calculate_total(order.id).await.unwrap(), dec!(5.00));
    }

    #[tokio::test]
    async fn checkout_flow_creates_order_then_items_then_totals() {
        let h = harness();
        let product_a = seed_product(&h, "Granola Bar", dec!(1.00)).await;
        let product_b = seed_product(&h, "Trail Mix", dec!(3.00)).await;

        // Phase 1: the order, empty and pending.
        let order = seed_order(&h).await;

        // Phase 2: one create call per distinct cart entry.
        h.service
            .add_item(order.id, product_a.id, 2, product_a.price)
            .await
            .unwrap();
        h.service
            .add_item(order.id, product_b.id, 1, product_b.price)
            .await
            .unwrap();

        let items = h.service.items_of(order.id).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(h.service.calculate_total(order.id).await.unwrap(), dec!(5.00));
    }

    #[tokio::test]
    async fn failed_second_item_leaves_first_in_place_without_rollback() {
        let h = harness();
        let product_a = seed_product(&h, "Granola Bar", dec!(1.00)).await;
        let product_b = seed_product(&h, "Trail Mix", dec!(3.00)).await;
        let order = seed_order(&h).await;

        h.orders.fail_items_after(1);

        h.service
            .add_item(order.id, product_a.id, 2, product_a.price)
            .await
            .unwrap();
        let err = h
            .service
            .add_item(order.id, product_b.id, 1, product_b.price)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Repository(_)));

        // The order survives with exactly the items that made it in.
        let (_, items) = h.service.get_by_id(order.id).await.unwrap().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(h.service.calculate_total(order.id).await.unwrap(), dec!(2.00));
    }

    #[tokio::test]
    async fn add_item_requires_an_existing_order() {
        let h = harness();
        let snack = seed_product(&h, "Chips", dec!(2.50)).await;

        let err = h
            .service
            .add_item(Uuid::new_v4(), snack.id, 1, snack.price)
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn add_item_requires_an_existing_product() {
        let h = harness();
        let order = seed_order(&h).await;

        let err = h
            .service
            .add_item(order.id, Uuid::new_v4(), 1, dec!(1.00))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn add_item_rejects_non_positive_quantity() {
        let h = harness();
        let order = seed_order(&h).await;
        let snack = seed_product(&h, "Chips", dec!(2.50)).await;

        let err = h
            .service
            .add_item(order.id, snack.id, 0, snack.price)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn update_persists_the_cached_total_only_on_request() {
        let h = harness();
        let order = seed_order(&h).await;

        let updated = h
            .service
            .update(order.id, None, None, None, Some(dec!(9.50)))
            .await
            .unwrap();

        assert_eq!(updated.total, dec!(9.50));
        assert_eq!(updated.customer, "Ada");
    }

    #[tokio::test]
    async fn delete_removes_the_order_and_its_items() {
        let h = harness();
        let order = seed_order(&h).await;
        let snack = seed_product(&h, "Chips", dec!(2.50)).await;
        h.service
            .add_item(order.id, snack.id, 1, snack.price)
            .await
            .unwrap();

        assert!(h.service.delete(order.id).await.unwrap());
        assert!(h.service.get_by_id(order.id).await.unwrap().is_none());
        assert!(h.service.list_items().await.unwrap().is_empty());
    }
}
