//! PostgreSQL Repository Implementations

mod order_repository;
mod product_repository;

pub use order_repository::PgOrderRepository;
pub use product_repository::PgProductRepository;
