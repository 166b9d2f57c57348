//! Product - Catalog entry
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product - a single catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Unit price. Decimal, never binary floating point.
    pub price: Decimal,
    pub image_url: String,
    /// Free-text category, matched case-insensitively when filtering.
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a new Product with generated ID and timestamps
    pub fn new(
        name: String,
        description: String,
        price: Decimal,
        image_url: String,
        category: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            price,
            image_url,
            category,
            created_at: now,
            updated_at: now,
        }
    }
}
