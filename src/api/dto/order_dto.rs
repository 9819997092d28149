//! Order-related DTOs for create, update, get, and list operations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::common_dto::PaginationMeta;
use super::product_dto::ProductResponse;
use crate::domain::Order;
use crate::error::BackendError;

/// Request body for `POST /orders` and `PUT /orders/{id}`.
///
/// Carries the identifier of the ordered product; the handler resolves it
/// to a full product before invoking the service.
#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderRequest {
    /// Identifier of the ordered product.
    pub product_id: i64,
    /// Number of units ordered.
    pub quantity: i32,
}

/// An order as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    /// Persistence-assigned identifier.
    pub id: i64,
    /// The ordered product.
    pub product: ProductResponse,
    /// Number of units ordered.
    pub quantity: i32,
}

impl TryFrom<Order> for OrderResponse {
    type Error = BackendError;

    fn try_from(order: Order) -> Result<Self, Self::Error> {
        let Some(id) = order.id else {
            return Err(BackendError::PersistenceError(
                "stored order has no identifier".to_string(),
            ));
        };
        Ok(Self {
            id: id.get(),
            product: ProductResponse::try_from(order.product)?,
            quantity: order.quantity,
        })
    }
}

/// Paginated list response for `GET /orders`.
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderListResponse {
    /// Order page contents.
    pub data: Vec<OrderResponse>,
    /// Pagination metadata.
    pub pagination: PaginationMeta,
}
