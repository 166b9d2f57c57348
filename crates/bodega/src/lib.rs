//! Bodega Domain Library
//!
//! Core domain types and interfaces for the Bodega storefront.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Product, Order, OrderItem)
//!   - `value_objects/`: Immutable value types (OrderStatus, ProductFilter)
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use bodega::domain::{Product, Order, OrderItem};
//! use bodega::ports::{ProductRepository, OrderRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    order_total, DomainError, Order, OrderItem, OrderStatus, Product, ProductFilter, ProductSort,
};
pub use ports::{OrderRepository, ProductRepository};
