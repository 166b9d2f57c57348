//! Product Routes - Catalog management
//!
//! HTTP handlers that delegate to CatalogService for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::models::{
    CreateProductRequest, ProductListQuery, ProductListResponse, ProductResponse,
    UpdateProductRequest,
};
use crate::routes::non_blank;
use crate::AppState;

/// List products with optional category filter and sort
#[utoipa::path(
    get,
    path = "/products",
    params(ProductListQuery),
    responses(
        (status = 200, description = "Filtered product listing", body = ProductListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let filter = query.into_filter();
    let products = state.catalog_service.list(&filter).await?;

    Ok(Json(ProductListResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}

/// Get product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = state
        .catalog_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;

    Ok(Json(ProductResponse {
        product: product.into(),
    }))
}

/// Create new product
#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Missing required product fields"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    // A zero price counts as falsy here, like the rest of the boundary.
    let (Some(name), Some(description), Some(price), Some(image_url), Some(category)) = (
        non_blank(payload.name),
        non_blank(payload.description),
        payload.price.filter(|p| !p.is_zero()),
        non_blank(payload.image_url),
        non_blank(payload.category),
    ) else {
        return Err(ApiError::bad_request("Missing required product fields"));
    };

    let product = state
        .catalog_service
        .create(name, description, price, image_url, category)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ProductResponse {
            product: product.into(),
        }),
    ))
}

/// Update product
#[utoipa::path(
    put,
    path = "/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = state
        .catalog_service
        .update(
            id,
            payload.name,
            payload.description,
            payload.price,
            payload.image_url,
            payload.category,
        )
        .await?;

    Ok(Json(ProductResponse {
        product: product.into(),
    }))
}

/// Delete product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = state.catalog_service.delete(id).await?;

    if !deleted {
        return Err(ApiError::not_found("Product not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}
