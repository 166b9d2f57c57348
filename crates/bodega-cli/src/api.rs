//! Bodega API Client

use anyhow::{bail, Context, Result};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API Client for the Bodega storefront
pub struct StoreClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub customer: String,
    pub dorm: String,
    pub status: String,
    pub total: Decimal,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub price: Decimal,
}

#[derive(Debug, Serialize)]
struct CreateOrderRequest<'a> {
    customer: &'a str,
    dorm: &'a str,
    status: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddItemRequest {
    product_id: Uuid,
    quantity: i32,
    price: Decimal,
}

// Envelopes the API wraps its payloads in
#[derive(Debug, Deserialize)]
struct ProductsEnvelope {
    products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
struct ProductEnvelope {
    product: Product,
}

#[derive(Debug, Deserialize)]
struct OrdersEnvelope {
    orders: Vec<Order>,
}

#[derive(Debug, Deserialize)]
struct OrderEnvelope {
    order: Order,
}

#[derive(Debug, Deserialize)]
struct OrderItemEnvelope {
    #[serde(rename = "orderItem")]
    order_item: OrderItem,
}

#[derive(Debug, Deserialize)]
struct TotalEnvelope {
    total: Decimal,
}

impl StoreClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// List products, optionally filtered and sorted
    pub async fn list_products(
        &self,
        category: Option<&str>,
        sort: Option<&str>,
    ) -> Result<Vec<Product>> {
        let url = format!("{}/products", self.base_url);
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(category) = category {
            query.push(("category", category));
        }
        if let Some(sort) = sort {
            query.push(("sort", sort));
        }

        let resp = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .context("Failed to connect to Bodega API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let envelope: ProductsEnvelope = resp.json().await.context("Failed to parse response")?;

        Ok(envelope.products)
    }

    /// Get a specific product
    pub async fn get_product(&self, product_id: Uuid) -> Result<Product> {
        let url = format!("{}/products/{}", self.base_url, product_id);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Bodega API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let envelope: ProductEnvelope = resp.json().await.context("Failed to parse response")?;

        Ok(envelope.product)
    }

    /// List all orders with their items
    pub async fn list_orders(&self) -> Result<Vec<Order>> {
        let url = format!("{}/orders", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Bodega API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let envelope: OrdersEnvelope = resp.json().await.context("Failed to parse response")?;

        Ok(envelope.orders)
    }

    /// Get a specific order with its items
    pub async fn get_order(&self, order_id: Uuid) -> Result<Order> {
        let url = format!("{}/orders/{}", self.base_url, order_id);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Bodega API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let envelope: OrderEnvelope = resp.json().await.context("Failed to parse response")?;

        Ok(envelope.order)
    }

    /// Create an order; checkout phase one
    pub async fn create_order(&self, customer: &str, dorm: &str) -> Result<Order> {
        let url = format!("{}/orders", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&CreateOrderRequest {
                customer,
                dorm,
                status: "pending",
            })
            .send()
            .await
            .context("Failed to connect to Bodega API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let envelope: OrderEnvelope = resp.json().await.context("Failed to parse response")?;

        Ok(envelope.order)
    }

    /// Attach one item to an order; checkout phase two, one call per product
    pub async fn add_order_item(
        &self,
        order_id: Uuid,
        product_id: Uuid,
        quantity: i32,
        price: Decimal,
    ) -> Result<OrderItem> {
        let url = format!("{}/orders/{}/items", self.base_url, order_id);
        let resp = self
            .client
            .post(&url)
            .json(&AddItemRequest {
                product_id,
                quantity,
                price,
            })
            .send()
            .await
            .context("Failed to connect to Bodega API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let envelope: OrderItemEnvelope = resp.json().await.context("Failed to parse response")?;

        Ok(envelope.order_item)
    }

    /// Fetch the computed (not persisted) total for an order
    pub async fn order_total(&self, order_id: Uuid) -> Result<Decimal> {
        let url = format!("{}/orders/{}/total", self.base_url, order_id);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Bodega API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let envelope: TotalEnvelope = resp.json().await.context("Failed to parse response")?;

        Ok(envelope.total)
    }
}
