//! Bodega API Models
//!
//! Typed request/response bodies for the HTTP surface:
//! - Product: catalog entries
//! - Order / OrderItem: placed orders and their lines
//!
//! Every request body is an explicit struct with `Option` fields; presence
//! and "falsy" checks happen at the route boundary before domain logic runs.

mod order;
mod product;

pub use order::*;
pub use product::*;
