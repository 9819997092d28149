//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::{OrderService, ProductService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Order service for order business logic.
    pub order_service: Arc<OrderService>,
    /// Product service for product business logic.
    pub product_service: Arc<ProductService>,
}
