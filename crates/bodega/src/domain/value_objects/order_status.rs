//! OrderStatus - Lifecycle label of an order

use serde::{Deserialize, Serialize};

/// Order status label.
///
/// `"pending"` on creation. The API accepts free-form values so operators
/// can introduce their own downstream states without a schema change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderStatus(String);

impl OrderStatus {
    pub const PENDING: &'static str = "pending";

    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_pending(&self) -> bool {
        self.0 == Self::PENDING
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self(Self::PENDING.to_string())
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for OrderStatus {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_pending() {
        assert!(OrderStatus::default().is_pending());
        assert_eq!(OrderStatus::default().as_str(), "pending");
    }

    #[test]
    fn free_form_values_round_trip() {
        let status = OrderStatus::new("delivered");
        assert!(!status.is_pending());
        assert_eq!(status.to_string(), "delivered");
    }
}
