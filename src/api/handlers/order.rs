//! Order CRUD handlers: create, list, get, update, delete.
//!
//! Order bodies reference products by identifier; the handlers resolve the
//! product through [`crate::service::ProductService`] before invoking the
//! order service, so a dangling reference surfaces as a product Not-Found.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    OrderListResponse, OrderRequest, OrderResponse, PaginationMeta, PaginationParams,
};
use crate::app_state::AppState;
use crate::domain::{Order, OrderId, ProductId};
use crate::error::{BackendError, ErrorResponse};

/// `POST /orders` — Create a new order.
///
/// # Errors
///
/// Returns [`BackendError::ProductNotFound`] if the referenced product does
/// not exist, or a persistence error if the save fails.
#[utoipa::path(
    post,
    path = "/api/v1/orders",
    tag = "Orders",
    summary = "Create an order",
    description = "Persists a new order for the referenced product and returns it with its assigned identifier.",
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order created", body = OrderResponse),
        (status = 404, description = "Referenced product not found", body = ErrorResponse),
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(req): Json<OrderRequest>,
) -> Result<impl IntoResponse, BackendError> {
    let product = state
        .product_service
        .find_product_by_id(ProductId::new(req.product_id))
        .await?;

    let created = state
        .order_service
        .create_order(Order::new(product, req.quantity))
        .await?;

    Ok((StatusCode::CREATED, Json(OrderResponse::try_from(created)?)))
}

/// `GET /orders` — List all orders with pagination.
///
/// # Errors
///
/// Returns a [`BackendError`] on persistence failures.
#[utoipa::path(
    get,
    path = "/api/v1/orders",
    tag = "Orders",
    summary = "List orders",
    description = "Returns a paginated list of all orders.",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated order list", body = OrderListResponse),
    )
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, BackendError> {
    let params = params.clamped();
    let orders = state.order_service.find_all_orders().await?;

    let total = orders.len() as u32;
    let per_page = params.per_page;
    let page = params.page;
    let total_pages = if total == 0 {
        0
    } else {
        total.div_ceil(per_page)
    };

    let start = ((page - 1) * per_page) as usize;
    let data = orders
        .into_iter()
        .skip(start)
        .take(per_page as usize)
        .map(OrderResponse::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(OrderListResponse {
        data,
        pagination: PaginationMeta {
            page,
            per_page,
            total,
            total_pages,
        },
    }))
}

/// `GET /orders/:id` — Get a single order.
///
/// # Errors
///
/// Returns [`BackendError::OrderNotFound`] if the order does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/orders/{id}",
    tag = "Orders",
    summary = "Get an order",
    params(
        ("id" = i64, Path, description = "Order identifier"),
    ),
    responses(
        (status = 200, description = "Order details", body = OrderResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, BackendError> {
    let order = state
        .order_service
        .find_order_by_id(OrderId::new(id))
        .await?;

    Ok(Json(OrderResponse::try_from(order)?))
}

/// `PUT /orders/:id` — Update an existing order.
///
/// Overwrites the order's `product` and `quantity` with the request values.
///
/// # Errors
///
/// Returns [`BackendError::OrderNotFound`] if the order does not exist, or
/// [`BackendError::ProductNotFound`] if the referenced product does not.
#[utoipa::path(
    put,
    path = "/api/v1/orders/{id}",
    tag = "Orders",
    summary = "Update an order",
    params(
        ("id" = i64, Path, description = "Order identifier"),
    ),
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Updated order", body = OrderResponse),
        (status = 404, description = "Order or referenced product not found", body = ErrorResponse),
    )
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<OrderRequest>,
) -> Result<impl IntoResponse, BackendError> {
    let product = state
        .product_service
        .find_product_by_id(ProductId::new(req.product_id))
        .await?;

    let updated = state
        .order_service
        .update_order(OrderId::new(id), Order::new(product, req.quantity))
        .await?;

    Ok(Json(OrderResponse::try_from(updated)?))
}

/// `DELETE /orders/:id` — Delete an order.
///
/// # Errors
///
/// Returns [`BackendError::OrderNotFound`] if the order does not exist.
#[utoipa::path(
    delete,
    path = "/api/v1/orders/{id}",
    tag = "Orders",
    summary = "Delete an order",
    params(
        ("id" = i64, Path, description = "Order identifier"),
    ),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 404, description = "Order not found", body = ErrorResponse),
    )
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, BackendError> {
    state.order_service.delete_order(OrderId::new(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Order management routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/orders", post(create_order).get(list_orders))
        .route(
            "/orders/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
}
