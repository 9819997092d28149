//! Order entity and its identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::product::Product;

/// Unique identifier for an [`Order`].
///
/// Wraps the `i64` primary key assigned by the persistence layer when the
/// order row is first inserted. Immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(i64);

impl OrderId {
    /// Creates an `OrderId` from a raw database identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw `i64` identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for OrderId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<OrderId> for i64 {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

/// An order for a quantity of a single product.
///
/// `id` is `None` until the persistence layer assigns one on the first save.
/// The product reference is not validated against existing products at this
/// layer, and `quantity` carries no range check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Persistence-assigned identifier, absent before the first save.
    pub id: Option<OrderId>,
    /// The ordered product, hydrated from storage on lookups.
    pub product: Product,
    /// Number of units ordered.
    pub quantity: i32,
}

impl Order {
    /// Creates an order that has not been persisted yet.
    #[must_use]
    pub fn new(product: Product, quantity: i32) -> Self {
        Self {
            id: None,
            product,
            quantity,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn display_is_raw_id() {
        let id = OrderId::new(999);
        assert_eq!(format!("{id}"), "999");
    }

    #[test]
    fn serde_is_transparent() {
        let id = OrderId::new(42);
        let Ok(json) = serde_json::to_string(&id) else {
            panic!("serialization failed");
        };
        assert_eq!(json, "42");

        let Ok(back) = serde_json::from_str::<OrderId>(&json) else {
            panic!("deserialization failed");
        };
        assert_eq!(back, id);
    }

    #[test]
    fn new_order_has_no_id() {
        let order = Order::new(Product::new("Test Product", 10.0), 2);
        assert_eq!(order.id, None);
        assert_eq!(order.quantity, 2);
    }
}
