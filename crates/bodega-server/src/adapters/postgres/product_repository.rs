//! PostgreSQL implementation of ProductRepository

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use bodega::{DomainError, Product, ProductFilter, ProductRepository, ProductSort};

/// PostgreSQL implementation of ProductRepository
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    description: String,
    price: Decimal,
    image_url: String,
    category: String,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            image_url: row.image_url,
            category: row.category,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

// Default listing order is insertion order; the sort keys are always
// ascending, mirroring the filter contract.
fn order_clause(sort: Option<ProductSort>) -> &'static str {
    match sort {
        Some(ProductSort::Price) => " ORDER BY price ASC",
        Some(ProductSort::Name) => " ORDER BY name ASC",
        None => " ORDER BY created_at ASC",
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_all(&self, filter: &ProductFilter) -> Result<Vec<Product>, DomainError> {
        let rows = match &filter.category {
            Some(category) => {
                let sql = format!(
                    "SELECT * FROM products WHERE LOWER(category) = LOWER($1){}",
                    order_clause(filter.sort)
                );
                sqlx::query_as::<_, ProductRow>(&sql)
                    .bind(category)
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let sql = format!("SELECT * FROM products{}", order_clause(filter.sort));
                sqlx::query_as::<_, ProductRow>(&sql)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError> {
        let row = sqlx::query_as::<_, ProductRow>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn save(&self, product: &Product) -> Result<Product, DomainError> {
        // Check if exists
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
                .bind(product.id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::Repository(e.to_string()))?;

        let row = if exists {
            // Update
            sqlx::query_as::<_, ProductRow>(
                r#"
                UPDATE products
                SET name = $2, description = $3, price = $4, image_url = $5, category = $6,
                    updated_at = NOW()
                WHERE id = $1
                RETURNING *
                "#,
            )
            .bind(product.id)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(&product.image_url)
            .bind(&product.category)
            .fetch_one(&self.pool)
            .await
        } else {
            // Insert
            sqlx::query_as::<_, ProductRow>(
                r#"
                INSERT INTO products (id, name, description, price, image_url, category)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING *
                "#,
            )
            .bind(product.id)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(&product.image_url)
            .bind(&product.category)
            .fetch_one(&self.pool)
            .await
        }
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
