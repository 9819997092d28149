//! Product entity and its identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`Product`].
///
/// Wraps the `i64` primary key assigned by the persistence layer when the
/// product row is first inserted. Immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Creates a `ProductId` from a raw database identifier.
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

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ProductId> for i64 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

/// A product available for ordering.
///
/// `id` is `None` until the persistence layer assigns one on the first save.
/// No validation is enforced on `name` or `price` at this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Persistence-assigned identifier, absent before the first save.
    pub id: Option<ProductId>,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: f64,
}

impl Product {
    /// Creates a product that has not been persisted yet.
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
        }
    }
}
