//! Persistence ports consumed by the service layer.
//!
//! One trait per entity type. `save` covers both inserts (identifier absent)
//! and updates (identifier present); the returned entity always carries its
//! identifier. Failure semantics of `delete` are governed by the
//! implementation, not by the services.

use async_trait::async_trait;

use super::order::{Order, OrderId};
use super::product::{Product, ProductId};
use crate::error::BackendError;

/// Persistence contract for [`Order`] entities.
#[async_trait]
pub trait OrderRepository: std::fmt::Debug + Send + Sync {
    /// Persists the order and returns the stored entity with its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::PersistenceError`] on storage failure.
    async fn save(&self, order: Order) -> Result<Order, BackendError>;

    /// Looks up an order by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::PersistenceError`] on storage failure.
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, BackendError>;

    /// Returns every stored order, in whatever order the store yields.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::PersistenceError`] on storage failure.
    async fn find_all(&self) -> Result<Vec<Order>, BackendError>;

    /// Deletes the given order.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::PersistenceError`] on storage failure.
    async fn delete(&self, order: &Order) -> Result<(), BackendError>;
}

/// Persistence contract for [`Product`] entities.
#[async_trait]
pub trait ProductRepository: std::fmt::Debug + Send + Sync {
    /// Persists the product and returns the stored entity with its
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::PersistenceError`] on storage failure.
    async fn save(&self, product: Product) -> Result<Product, BackendError>;

    /// Looks up a product by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::PersistenceError`] on storage failure.
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, BackendError>;

    /// Returns every stored product, in whatever order the store yields.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::PersistenceError`] on storage failure.
    async fn find_all(&self) -> Result<Vec<Product>, BackendError>;

    /// Deletes the given product.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::PersistenceError`] on storage failure.
    async fn delete(&self, product: &Product) -> Result<(), BackendError>;
}
