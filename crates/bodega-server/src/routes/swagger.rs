//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::errors::ErrorResponse;
use crate::models::{
    AddOrderItemRequest,
    CreateOrderItemRequest,
    // Order models
    CreateOrderRequest,
    // Product models
    CreateProductRequest,
    OrderDto,
    OrderItemDto,
    OrderItemListResponse,
    OrderItemResponse,
    OrderListResponse,
    OrderResponse,
    OrderTotalResponse,
    OrderWithItemsDto,
    OrderWithItemsResponse,
    ProductDto,
    ProductListResponse,
    ProductResponse,
    UpdateOrderRequest,
    UpdateProductRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Product endpoints
        super::products::list_products,
        super::products::get_product,
        super::products::create_product,
        super::products::update_product,
        super::products::delete_product,
        // Order endpoints
        super::orders::list_orders,
        super::orders::get_order,
        super::orders::create_order,
        super::orders::update_order,
        super::orders::delete_order,
        super::orders::add_order_item,
        super::orders::get_order_total,
        // Order item endpoints
        super::order_items::list_order_items,
        super::order_items::create_order_item,
    ),
    info(
        title = "Bodega API",
        version = "0.1.0",
        description = "Bodega - a small dorm storefront.\n\nCatalog, orders and order items over Postgres; totals computed on demand.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Products", description = "Catalog listing, filtering and management"),
        (name = "Orders", description = "Order lifecycle, item attachment and totals"),
        (name = "OrderItems", description = "Flat order-item listing and standalone creation"),
    ),
    components(
        schemas(
            // Products
            ProductDto,
            CreateProductRequest,
            UpdateProductRequest,
            ProductListResponse,
            ProductResponse,
            // Orders
            OrderDto,
            OrderWithItemsDto,
            CreateOrderRequest,
            UpdateOrderRequest,
            OrderListResponse,
            OrderResponse,
            OrderWithItemsResponse,
            // Order items
            OrderItemDto,
            AddOrderItemRequest,
            CreateOrderItemRequest,
            OrderItemResponse,
            OrderItemListResponse,
            OrderTotalResponse,
            // Errors
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;
