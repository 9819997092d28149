//! PostgreSQL implementations of the repository traits.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::BackendConfig;
use crate::domain::{Order, OrderId, OrderRepository, Product, ProductId, ProductRepository};
use crate::error::BackendError;

/// Opens a PostgreSQL connection pool using the configured limits.
///
/// # Errors
///
/// Returns a [`BackendError::PersistenceError`] if the database is
/// unreachable.
pub async fn connect(config: &BackendConfig) -> Result<PgPool, BackendError> {
    PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
        .connect(&config.database_url)
        .await
        .map_err(|e| BackendError::PersistenceError(e.to_string()))
}

/// PostgreSQL-backed [`ProductRepository`] using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    /// Creates a new repository with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn save(&self, product: Product) -> Result<Product, BackendError> {
        let id = match product.id {
            Some(id) => {
                sqlx::query("UPDATE products SET name = $1, price = $2 WHERE id = $3")
                    .bind(&product.name)
                    .bind(product.price)
                    .bind(id.get())
                    .execute(&self.pool)
                    .await
                    .map_err(|e| BackendError::PersistenceError(e.to_string()))?;
                id
            }
            None => {
                let id = sqlx::query_scalar::<_, i64>(
                    "INSERT INTO products (name, price) VALUES ($1, $2) RETURNING id",
                )
                .bind(&product.name)
                .bind(product.price)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| BackendError::PersistenceError(e.to_string()))?;
                ProductId::new(id)
            }
        };

        Ok(Product {
            id: Some(id),
            ..product
        })
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, BackendError> {
        let row = sqlx::query_as::<_, (i64, String, f64)>(
            "SELECT id, name, price FROM products WHERE id = $1",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BackendError::PersistenceError(e.to_string()))?;

        Ok(row.map(|(id, name, price)| Product {
            id: Some(ProductId::new(id)),
            name,
            price,
        }))
    }

    async fn find_all(&self) -> Result<Vec<Product>, BackendError> {
        let rows = sqlx::query_as::<_, (i64, String, f64)>(
            "SELECT id, name, price FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BackendError::PersistenceError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(id, name, price)| Product {
                id: Some(ProductId::new(id)),
                name,
                price,
            })
            .collect())
    }

    async fn delete(&self, product: &Product) -> Result<(), BackendError> {
        let Some(id) = product.id else {
            return Err(BackendError::PersistenceError(
                "product has no identifier".to_string(),
            ));
        };

        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| BackendError::PersistenceError(e.to_string()))?;

        Ok(())
    }
}

/// PostgreSQL-backed [`OrderRepository`] using `sqlx::PgPool`.
///
/// Order rows are hydrated with their product via a join, so lookups
/// return fully populated entities.
#[derive(Debug, Clone)]
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    /// Creates a new repository with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Maps a joined order/product row to an [`Order`].
fn order_from_row((id, quantity, product_id, name, price): (i64, i32, i64, String, f64)) -> Order {
    Order {
        id: Some(OrderId::new(id)),
        product: Product {
            id: Some(ProductId::new(product_id)),
            name,
            price,
        },
        quantity,
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn save(&self, order: Order) -> Result<Order, BackendError> {
        let Some(product_id) = order.product.id else {
            return Err(BackendError::PersistenceError(
                "order references an unsaved product".to_string(),
            ));
        };

        let id = match order.id {
            Some(id) => {
                sqlx::query("UPDATE orders SET product_id = $1, quantity = $2 WHERE id = $3")
                    .bind(product_id.get())
                    .bind(order.quantity)
                    .bind(id.get())
                    .execute(&self.pool)
                    .await
                    .map_err(|e| BackendError::PersistenceError(e.to_string()))?;
                id
            }
            None => {
                let id = sqlx::query_scalar::<_, i64>(
                    "INSERT INTO orders (product_id, quantity) VALUES ($1, $2) RETURNING id",
                )
                .bind(product_id.get())
                .bind(order.quantity)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| BackendError::PersistenceError(e.to_string()))?;
                OrderId::new(id)
            }
        };

        Ok(Order {
            id: Some(id),
            ..order
        })
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, BackendError> {
        let row = sqlx::query_as::<_, (i64, i32, i64, String, f64)>(
            "SELECT o.id, o.quantity, p.id, p.name, p.price \
             FROM orders o JOIN products p ON p.id = o.product_id WHERE o.id = $1",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BackendError::PersistenceError(e.to_string()))?;

        Ok(row.map(order_from_row))
    }

    async fn find_all(&self) -> Result<Vec<Order>, BackendError> {
        let rows = sqlx::query_as::<_, (i64, i32, i64, String, f64)>(
            "SELECT o.id, o.quantity, p.id, p.name, p.price \
             FROM orders o JOIN products p ON p.id = o.product_id ORDER BY o.id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BackendError::PersistenceError(e.to_string()))?;

        Ok(rows.into_iter().map(order_from_row).collect())
    }

    async fn delete(&self, order: &Order) -> Result<(), BackendError> {
        let Some(id) = order.id else {
            return Err(BackendError::PersistenceError(
                "order has no identifier".to_string(),
            ));
        };

        sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| BackendError::PersistenceError(e.to_string()))?;

        Ok(())
    }
}
