//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Product: catalog entry offered by the store
//! - Order: a customer's placed request
//! - OrderItem: a line binding a product to an order with a price snapshot

mod order;
mod product;

pub use order::*;
pub use product::*;
