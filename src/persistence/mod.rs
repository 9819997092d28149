//! Persistence layer: PostgreSQL repositories.
//!
//! Concrete implementations of the repository traits in
//! [`crate::domain::repository`], backed by `sqlx::PgPool`. Schema
//! migrations live under `migrations/` and are applied at startup.

pub mod postgres;

pub use postgres::{PostgresOrderRepository, PostgresProductRepository, connect};
