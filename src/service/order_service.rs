//! Order service: CRUD operations over [`Order`] entities.

use std::sync::Arc;

use crate::domain::{Order, OrderId, OrderRepository};
use crate::error::BackendError;

/// Business logic for order management.
///
/// Thin coordinator over an injected [`OrderRepository`]: every operation
/// is a single lookup followed by at most one repository call. The service
/// holds no state of its own between calls; isolation is the persistence
/// layer's concern.
#[derive(Debug, Clone)]
pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
}

impl OrderService {
    /// Creates a new `OrderService` over the given repository.
    #[must_use]
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }

    /// Persists a new order unconditionally and returns the stored entity
    /// with its identifier assigned by the persistence layer.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::PersistenceError`] if the save fails.
    pub async fn create_order(&self, order: Order) -> Result<Order, BackendError> {
        let created = self.orders.save(order).await?;
        tracing::info!(id = ?created.id, "order created");
        Ok(created)
    }

    /// Overwrites the mutable fields of an existing order and persists it.
    ///
    /// Only `product` and `quantity` are taken from `details`; every other
    /// field keeps its stored value.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::OrderNotFound`] if no order exists for `id`.
    pub async fn update_order(&self, id: OrderId, details: Order) -> Result<Order, BackendError> {
        let mut order = self
            .orders
            .find_by_id(id)
            .await?
            .ok_or(BackendError::OrderNotFound(id))?;

        order.product = details.product;
        order.quantity = details.quantity;

        self.orders.save(order).await
    }

    /// Deletes an existing order.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::OrderNotFound`] if no order exists for `id`.
    pub async fn delete_order(&self, id: OrderId) -> Result<(), BackendError> {
        let order = self
            .orders
            .find_by_id(id)
            .await?
            .ok_or(BackendError::OrderNotFound(id))?;

        self.orders.delete(&order).await?;
        tracing::info!(%id, "order deleted");
        Ok(())
    }

    /// Returns the order with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::OrderNotFound`] if no order exists for `id`.
    pub async fn find_order_by_id(&self, id: OrderId) -> Result<Order, BackendError> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or(BackendError::OrderNotFound(id))
    }

    /// Returns all orders, in whatever order the repository yields them.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::PersistenceError`] if the lookup fails.
    pub async fn find_all_orders(&self) -> Result<Vec<Order>, BackendError> {
        self.orders.find_all().await
    }
}
