//! Order and OrderItem API Models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use bodega::{Order, OrderItem};

/// Order as exposed by the API (without items)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: Uuid,
    pub customer: String,
    pub dorm: String,
    pub status: String,
    /// Cached total; starts at 0 and only changes through an explicit update
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderDto {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            customer: order.customer,
            dorm: order.dorm,
            status: order.status.to_string(),
            total: order.total,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

/// Order item as exposed by the API
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    /// Price snapshot taken when the item was added
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<OrderItem> for OrderItemDto {
    fn from(item: OrderItem) -> Self {
        Self {
            id: item.id,
            order_id: item.order_id,
            product_id: item.product_id,
            quantity: item.quantity,
            price: item.price,
            created_at: item.created_at,
        }
    }
}

/// Order together with its items, for reads
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderWithItemsDto {
    pub id: Uuid,
    pub customer: String,
    pub dorm: String,
    pub status: String,
    pub total: Decimal,
    pub items: Vec<OrderItemDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<(Order, Vec<OrderItem>)> for OrderWithItemsDto {
    fn from((order, items): (Order, Vec<OrderItem>)) -> Self {
        Self {
            id: order.id,
            customer: order.customer,
            dorm: order.dorm,
            status: order.status.to_string(),
            total: order.total,
            items: items.into_iter().map(Into::into).collect(),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

/// Create order request; customer and dorm are required
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub customer: Option<String>,
    pub dorm: Option<String>,
    /// Defaults to `"pending"` when absent or blank
    pub status: Option<String>,
}

/// Update order request; absent fields keep their current value
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderRequest {
    pub customer: Option<String>,
    pub dorm: Option<String>,
    pub status: Option<String>,
    /// The only way the cached total is ever persisted
    pub total: Option<Decimal>,
}

/// Attach-item request for `POST /orders/:orderId/items`
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddOrderItemRequest {
    pub product_id: Option<Uuid>,
    pub quantity: Option<i32>,
    pub price: Option<Decimal>,
}

/// Standalone item-create request for `POST /order-items`
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItemRequest {
    pub order_id: Option<Uuid>,
    pub product_id: Option<Uuid>,
    pub quantity: Option<i32>,
    pub price: Option<Decimal>,
}

/// `{"orders": [...]}` listing envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderListResponse {
    pub orders: Vec<OrderWithItemsDto>,
}

/// `{"order": {...}}` envelope for writes
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub order: OrderDto,
}

/// `{"order": {...}}` envelope for reads, items included
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderWithItemsResponse {
    pub order: OrderWithItemsDto,
}

/// `{"orderItem": {...}}` envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemResponse {
    #[serde(rename = "orderItem")]
    pub order_item: OrderItemDto,
}

/// `{"orderItems": [...]}` listing envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemListResponse {
    #[serde(rename = "orderItems")]
    pub order_items: Vec<OrderItemDto>,
}

/// `{"total": ...}` computed-total envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderTotalResponse {
    pub total: Decimal,
}
