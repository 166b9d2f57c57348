//! Order Item Routes - Flat listing and standalone creation
//!
//! The standalone create carries its order id in the body; the per-order
//! variant lives under /orders/:orderId/items.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::errors::ApiError;
use crate::models::{CreateOrderItemRequest, OrderItemListResponse, OrderItemResponse};
use crate::AppState;

/// List every order item across all orders
#[utoipa::path(
    get,
    path = "/order-items",
    responses(
        (status = 200, description = "All order items", body = OrderItemListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "OrderItems"
)]
pub async fn list_order_items(
    State(state): State<AppState>,
) -> Result<Json<OrderItemListResponse>, ApiError> {
    let items = state.order_service.list_items().await?;

    Ok(Json(OrderItemListResponse {
        order_items: items.into_iter().map(Into::into).collect(),
    }))
}

/// Create one order item with an explicit order reference
#[utoipa::path(
    post,
    path = "/order-items",
    request_body = CreateOrderItemRequest,
    responses(
        (status = 201, description = "Item created", body = OrderItemResponse),
        (status = 400, description = "Missing required order item fields"),
        (status = 404, description = "Order or product not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "OrderItems"
)]
pub async fn create_order_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderItemRequest>,
) -> Result<(StatusCode, Json<OrderItemResponse>), ApiError> {
    let (Some(order_id), Some(product_id), Some(quantity), Some(price)) = (
        payload.order_id,
        payload.product_id,
        payload.quantity.filter(|q| *q != 0),
        payload.price.filter(|p| !p.is_zero()),
    ) else {
        return Err(ApiError::bad_request("Missing required order item fields"));
    };

    let item = state
        .order_service
        .add_item(order_id, product_id, quantity, price)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(OrderItemResponse {
            order_item: item.into(),
        }),
    ))
}

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/order-items",
        get(list_order_items).post(create_order_item),
    )
}
