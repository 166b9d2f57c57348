//! Order and OrderItem - a placed request and its lines
//!
//! An order owns its items. Each item carries a price snapshot taken when
//! the item was added, so later product price changes never alter the
//! history of an existing order.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::OrderStatus;

/// Order - a customer's placed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub customer: String,
    /// Dorm / room identifier used for delivery.
    pub dorm: String,
    pub status: OrderStatus,
    /// Cached total. Starts at zero and is only ever written through an
    /// explicit order update, never recomputed implicitly.
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Create a new Order with generated ID, zero total and default status
    pub fn new(customer: String, dorm: String, status: Option<OrderStatus>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            customer,
            dorm,
            status: status.unwrap_or_default(),
            total: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        }
    }
}

/// OrderItem - one line of an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    /// Price snapshot taken at add time, not a live product reference.
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

impl OrderItem {
    /// Create a new OrderItem with generated ID
    pub fn new(order_id: Uuid, product_id: Uuid, quantity: i32, price: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id,
            product_id,
            quantity,
            price,
            created_at: Utc::now(),
        }
    }

    /// price × quantity for this line
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Sum of price × quantity across a set of order items.
///
/// Returns zero for an empty set. Decimal arithmetic throughout; monetary
/// sums must not accumulate binary-fraction error.
pub fn order_total(items: &[OrderItem]) -> Decimal {
    items.iter().map(OrderItem::line_total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(price: Decimal, quantity: i32) -> OrderItem {
        OrderItem::new(Uuid::new_v4(), Uuid::new_v4(), quantity, price)
    }

    #[test]
    fn new_order_starts_pending_with_zero_total() {
        let order = Order::new("Ada".to_string(), "D-204".to_string(), None);
        assert_eq!(order.status.as_str(), "pending");
        assert_eq!(order.total, Decimal::ZERO);
    }

    #[test]
    fn line_total_is_price_times_quantity() {
        assert_eq!(item(dec!(2.50), 3).line_total(), dec!(7.50));
    }

    #[test]
    fn order_total_sums_lines_exactly() {
        let items = vec![item(dec!(2.50), 3), item(dec!(1.00), 2)];
        assert_eq!(order_total(&items), dec!(9.50));
    }

    #[test]
    fn order_total_of_no_items_is_zero() {
        assert_eq!(order_total(&[]), Decimal::ZERO);
    }

    #[test]
    fn order_total_has_no_float_drift() {
        // 0.10 summed ten times is exactly 1.00, which f64 cannot promise.
        let items: Vec<OrderItem> = (0..10).map(|_| item(dec!(0.10), 1)).collect();
        assert_eq!(order_total(&items), dec!(1.00));
    }
}
