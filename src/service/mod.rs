//! Service layer: business logic for orders and products.
//!
//! [`OrderService`] and [`ProductService`] expose the CRUD contract
//! consumed by the REST layer, delegating storage to the repository
//! traits in [`crate::domain`].

pub mod order_service;
pub mod product_service;

pub use order_service::OrderService;
pub use product_service::ProductService;
