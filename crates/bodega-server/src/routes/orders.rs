//! Order Routes - Order lifecycle and per-order items
//!
//! Checkout is driven by the client as two phases: create the order, then
//! attach one item per call. These handlers deliberately do not wrap that
//! sequence in anything transactional.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use bodega::OrderStatus;

use crate::errors::ApiError;
use crate::models::{
    AddOrderItemRequest, CreateOrderRequest, OrderItemResponse, OrderListResponse, OrderResponse,
    OrderTotalResponse, OrderWithItemsResponse, UpdateOrderRequest,
};
use crate::routes::non_blank;
use crate::AppState;

/// List all orders with their items
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "List of all orders", body = OrderListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<OrderListResponse>, ApiError> {
    let results = state.order_service.list_all().await?;

    Ok(Json(OrderListResponse {
        orders: results.into_iter().map(Into::into).collect(),
    }))
}

/// Get order by ID, items included
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order found", body = OrderWithItemsResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderWithItemsResponse>, ApiError> {
    let result = state
        .order_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Order not found"))?;

    Ok(Json(OrderWithItemsResponse {
        order: result.into(),
    }))
}

/// Create new order with zero total
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = OrderResponse),
        (status = 400, description = "Missing customer or dorm info"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError> {
    let (Some(customer), Some(dorm)) = (non_blank(payload.customer), non_blank(payload.dorm))
    else {
        return Err(ApiError::bad_request("Missing customer or dorm info"));
    };

    let status = non_blank(payload.status).map(OrderStatus::new);
    let order = state.order_service.create(customer, dorm, status).await?;

    Ok((
        StatusCode::CREATED,
        Json(OrderResponse {
            order: order.into(),
        }),
    ))
}

/// Update order
#[utoipa::path(
    put,
    path = "/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order updated", body = OrderResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Orders"
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateOrderRequest>,
) -> Result<Json<OrderResponse>, ApiError> {
    let order = state
        .order_service
        .update(
            id,
            payload.customer,
            payload.dorm,
            payload.status.map(OrderStatus::new),
            payload.total,
        )
        .await?;

    Ok(Json(OrderResponse {
        order: order.into(),
    }))
}

/// Delete order together with its items
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = state.order_service.delete(id).await?;

    if !deleted {
        return Err(ApiError::not_found("Order not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Attach one item to an order
#[utoipa::path(
    post,
    path = "/orders/{orderId}/items",
    params(
        ("orderId" = Uuid, Path, description = "Order ID")
    ),
    request_body = AddOrderItemRequest,
    responses(
        (status = 201, description = "Item attached", body = OrderItemResponse),
        (status = 400, description = "Missing required fields"),
        (status = 404, description = "Order or product not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Orders"
)]
pub async fn add_order_item(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
    Json(payload): Json<AddOrderItemRequest>,
) -> Result<(StatusCode, Json<OrderItemResponse>), ApiError> {
    // Zero quantity and zero price count as falsy, like the original
    // boundary checks.
    let (Some(product_id), Some(quantity), Some(price)) = (
        payload.product_id,
        payload.quantity.filter(|q| *q != 0),
        payload.price.filter(|p| !p.is_zero()),
    ) else {
        return Err(ApiError::bad_request("Missing required fields"));
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

/// Compute the order total on demand; never persisted
#[utoipa::path(
    get,
    path = "/orders/{orderId}/total",
    params(
        ("orderId" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Computed total", body = OrderTotalResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Orders"
)]
pub async fn get_order_total(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> Result<Json<OrderTotalResponse>, ApiError> {
    let total = state.order_service.calculate_total(order_id).await?;

    Ok(Json(OrderTotalResponse { total }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route(
            "/orders/:id",
            get(get_order).put(update_order).delete(delete_order),
        )
        .route("/orders/:id/items", post(add_order_item))
        .route("/orders/:id/total", get(get_order_total))
}
