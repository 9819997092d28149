//! Product CRUD handlers: create, list, get, update, delete.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    PaginationMeta, PaginationParams, ProductListResponse, ProductRequest, ProductResponse,
};
use crate::app_state::AppState;
use crate::domain::{Product, ProductId};
use crate::error::{BackendError, ErrorResponse};

/// `POST /products` — Create a new product.
///
/// # Errors
///
/// Returns a [`BackendError`] if the save fails.
#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "Products",
    summary = "Create a product",
    description = "Persists a new product and returns it with its assigned identifier.",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<ProductRequest>,
) -> Result<impl IntoResponse, BackendError> {
    let created = state
        .product_service
        .create_product(Product::new(req.name, req.price))
        .await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::try_from(created)?)))
}

/// `GET /products` — List all products with pagination.
///
/// # Errors
///
/// Returns a [`BackendError`] on persistence failures.
#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Products",
    summary = "List products",
    description = "Returns a paginated list of all products.",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated product list", body = ProductListResponse),
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, BackendError> {
    let params = params.clamped();
    let products = state.product_service.find_all_products().await?;

    let total = products.len() as u32;
    let per_page = params.per_page;
    let page = params.page;
    let total_pages = if total == 0 {
        0
    } else {
        total.div_ceil(per_page)
    };

    let start = ((page - 1) * per_page) as usize;
    let data = products
        .into_iter()
        .skip(start)
        .take(per_page as usize)
        .map(ProductResponse::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(ProductListResponse {
        data,
        pagination: PaginationMeta {
            page,
            per_page,
            total,
            total_pages,
        },
    }))
}

/// `GET /products/:id` — Get a single product.
///
/// # Errors
///
/// Returns [`BackendError::ProductNotFound`] if the product does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "Products",
    summary = "Get a product",
    params(
        ("id" = i64, Path, description = "Product identifier"),
    ),
    responses(
        (status = 200, description = "Product details", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, BackendError> {
    let product = state
        .product_service
        .find_product_by_id(ProductId::new(id))
        .await?;

    Ok(Json(ProductResponse::try_from(product)?))
}

/// `PUT /products/:id` — Update an existing product.
///
/// Overwrites the product's `name` and `price` with the request values.
///
/// # Errors
///
/// Returns [`BackendError::ProductNotFound`] if the product does not exist.
#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    tag = "Products",
    summary = "Update a product",
    params(
        ("id" = i64, Path, description = "Product identifier"),
    ),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Updated product", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<ProductRequest>,
) -> Result<impl IntoResponse, BackendError> {
    let updated = state
        .product_service
        .update_product(ProductId::new(id), Product::new(req.name, req.price))
        .await?;

    Ok(Json(ProductResponse::try_from(updated)?))
}

/// `DELETE /products/:id` — Delete a product.
///
/// # Errors
///
/// Returns [`BackendError::ProductNotFound`] if the product does not exist.
#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    tag = "Products",
    summary = "Delete a product",
    params(
        ("id" = i64, Path, description = "Product identifier"),
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found", body = ErrorResponse),
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, BackendError> {
    state
        .product_service
        .delete_product(ProductId::new(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Product management routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", post(create_product).get(list_products))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}
