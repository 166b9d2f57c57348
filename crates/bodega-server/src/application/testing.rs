//! In-memory repository implementations for service tests
//!
//! These honor the same port contracts as the Postgres adapters, including
//! the filter semantics, so services can be exercised without a database.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use bodega::{
    DomainError, Order, OrderItem, OrderRepository, Product, ProductFilter, ProductRepository,
};

#[derive(Default)]
pub struct InMemoryProducts {
    products: Mutex<Vec<Product>>,
}

#[async_trait]
impl ProductRepository for InMemoryProducts {
    async fn find_all(&self, filter: &ProductFilter) -> Result<Vec<Product>, DomainError> {
        let products = self.products.lock().unwrap();
        let mut found: Vec<Product> = products
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        if let Some(sort) = filter.sort {
            found.sort_by(|a, b| sort.compare(a, b));
        }
        Ok(found)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError> {
        let products = self.products.lock().unwrap();
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn save(&self, product: &Product) -> Result<Product, DomainError> {
        let mut products = self.products.lock().unwrap();
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product.clone(),
            None => products.push(product.clone()),
        }
        Ok(product.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() < before)
    }
}

pub struct InMemoryOrders {
    orders: Mutex<Vec<Order>>,
    items: Mutex<Vec<OrderItem>>,
    /// Item inserts beyond this many simulate a storage failure.
    item_capacity: AtomicUsize,
}

impl Default for InMemoryOrders {
    fn default() -> Self {
        Self {
            orders: Mutex::new(Vec::new()),
            items: Mutex::new(Vec::new()),
            item_capacity: AtomicUsize::new(usize::MAX),
        }
    }
}

impl InMemoryOrders {
    /// Make item inserts fail after `n` have succeeded.
    pub fn fail_items_after(&self, n: usize) {
        self.item_capacity.store(n, Ordering::SeqCst);
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrders {
    async fn find_all(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.orders.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        let orders = self.orders.lock().unwrap();
        Ok(orders.iter().find(|o| o.id == id).cloned())
    }

    async fn save(&self, order: &Order) -> Result<Order, DomainError> {
        let mut orders = self.orders.lock().unwrap();
        match orders.iter_mut().find(|o| o.id == order.id) {
            Some(existing) => *existing = order.clone(),
            None => orders.push(order.clone()),
        }
        Ok(order.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut orders = self.orders.lock().unwrap();
        let before = orders.len();
        orders.retain(|o| o.id != id);
        // Cascade, like the schema does.
        self.items.lock().unwrap().retain(|i| i.order_id != id);
        Ok(orders.len() < before)
    }

    async fn add_item(&self, item: &OrderItem) -> Result<OrderItem, DomainError> {
        let mut items = self.items.lock().unwrap();
        if items.len() >= self.item_capacity.load(Ordering::SeqCst) {
            return Err(DomainError::Repository(
                "simulated storage failure".to_string(),
            ));
        }
        items.push(item.clone());
        Ok(item.clone())
    }

    async fn find_items(&self, order_id: Uuid) -> Result<Vec<OrderItem>, DomainError> {
        let items = self.items.lock().unwrap();
        Ok(items
            .iter()
            .filter(|i| i.order_id == order_id)
            .cloned()
            .collect())
    }

    async fn find_all_items(&self) -> Result<Vec<OrderItem>, DomainError> {
        Ok(self.items.lock().unwrap().clone())
    }
}
