//! Product-related DTOs for create, update, get, and list operations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::common_dto::PaginationMeta;
use crate::domain::Product;
use crate::error::BackendError;

/// Request body for `POST /products` and `PUT /products/{id}`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductRequest {
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: f64,
}

/// A product as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    /// Persistence-assigned identifier.
    pub id: i64,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: f64,
}

impl TryFrom<Product> for ProductResponse {
    type Error = BackendError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        let Some(id) = product.id else {
            return Err(BackendError::PersistenceError(
                "stored product has no identifier".to_string(),
            ));
        };
        Ok(Self {
            id: id.get(),
            name: product.name,
            price: product.price,
        })
    }
}

/// Paginated list response for `GET /products`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductListResponse {
    /// Product page contents.
    pub data: Vec<ProductResponse>,
    /// Pagination metadata.
    pub pagination: PaginationMeta,
}
