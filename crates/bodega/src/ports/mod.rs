//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer interacts with
//! external systems. Implementations live in the infrastructure layer;
//! components receive them as explicit injected handles rather than
//! reaching for process-wide state.

pub mod repositories;

// Re-exports
pub use repositories::*;
