//! Product service: CRUD operations over [`Product`] entities.

use std::sync::Arc;

use crate::domain::{Product, ProductId, ProductRepository};
use crate::error::BackendError;

/// Business logic for product management.
///
/// Mirrors [`crate::service::OrderService`] over product entities: one
/// lookup, at most one repository call per operation, no state between
/// calls.
#[derive(Debug, Clone)]
pub struct ProductService {
    products: Arc<dyn ProductRepository>,
}

impl ProductService {
    /// Creates a new `ProductService` over the given repository.
    #[must_use]
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    /// Persists a new product unconditionally and returns the stored entity
    /// with its identifier assigned by the persistence layer.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::PersistenceError`] if the save fails.
    pub async fn create_product(&self, product: Product) -> Result<Product, BackendError> {
        let created = self.products.save(product).await?;
        tracing::info!(id = ?created.id, "product created");
        Ok(created)
    }

    /// Overwrites the mutable fields of an existing product and persists it.
    ///
    /// Only `name` and `price` are taken from `details`; every other field
    /// keeps its stored value.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::ProductNotFound`] if no product exists for
    /// `id`.
    pub async fn update_product(
        &self,
        id: ProductId,
        details: Product,
    ) -> Result<Product, BackendError> {
        let mut product = self
            .products
            .find_by_id(id)
            .await?
            .ok_or(BackendError::ProductNotFound(id))?;

        product.name = details.name;
        product.price = details.price;

        self.products.save(product).await
    }

    /// Deletes an existing product.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::ProductNotFound`] if no product exists for
    /// `id`.
    pub async fn delete_product(&self, id: ProductId) -> Result<(), BackendError> {
        let product = self
            .products
            .find_by_id(id)
            .await?
            .ok_or(BackendError::ProductNotFound(id))?;

        self.products.delete(&product).await?;
        tracing::info!(%id, "product deleted");
        Ok(())
    }

    /// Returns the product with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::ProductNotFound`] if no product exists for
    /// `id`.
    pub async fn find_product_by_id(&self, id: ProductId) -> Result<Product, BackendError> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or(BackendError::ProductNotFound(id))
    }

    /// Returns all products, in whatever order the repository yields them.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::PersistenceError`] if the lookup fails.
    pub async fn find_all_products(&self) -> Result<Vec<Product>, BackendError> {
        self.products.find_all().await
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Mutex, MutexGuard};

    use async_trait::async_trait;

    use super::*;

    /// In-memory repository that assigns sequential identifiers on insert
    /// and records every delete call.
    #[derive(Debug, Default)]
    struct InMemoryProducts {
        rows: Mutex<HashMap<i64, Product>>,
        deleted: Mutex<Vec<Product>>,
    }

    impl InMemoryProducts {
        fn seeded(products: Vec<Product>) -> Self {
            let repo = Self::default();
            {
                let mut rows = lock(&repo.rows);
                for product in products {
                    let Some(id) = product.id else {
                        panic!("seeded product needs an id");
                    };
                    rows.insert(id.get(), product);
                }
            }
            repo
        }
    }

    fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
        match mutex.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("mutex poisoned"),
        }
    }

    #[async_trait]
    impl ProductRepository for InMemoryProducts {
        async fn save(&self, mut product: Product) -> Result<Product, BackendError> {
            let mut rows = lock(&self.rows);
            let id = match product.id {
                Some(id) => id,
                None => ProductId::new(rows.keys().max().copied().unwrap_or(0) + 1),
            };
            product.id = Some(id);
            rows.insert(id.get(), product.clone());
            Ok(product)
        }

        async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, BackendError> {
            Ok(lock(&self.rows).get(&id.get()).cloned())
        }

        async fn find_all(&self) -> Result<Vec<Product>, BackendError> {
            Ok(lock(&self.rows).values().cloned().collect())
        }

        async fn delete(&self, product: &Product) -> Result<(), BackendError> {
            if let Some(id) = product.id {
                lock(&self.rows).remove(&id.get());
            }
            lock(&self.deleted).push(product.clone());
            Ok(())
        }
    }

    fn service_over(repo: Arc<InMemoryProducts>) -> ProductService {
        ProductService::new(repo)
    }

    #[tokio::test]
    async fn create_product_returns_persisted_entity() {
        let service = service_over(Arc::new(InMemoryProducts::default()));

        let result = service
            .create_product(Product::new("Test Product", 15.0))
            .await;

        let Ok(created) = result else {
            panic!("create failed");
        };
        assert_eq!(created.id, Some(ProductId::new(1)));
        assert_eq!(created.name, "Test Product");
        assert_eq!(created.price, 15.0);
    }

    #[tokio::test]
    async fn update_product_overwrites_name_and_price() {
        let existing = Product {
            id: Some(ProductId::new(1)),
            name: "Old Name".to_string(),
            price: 25.0,
        };
        let service = service_over(Arc::new(InMemoryProducts::seeded(vec![existing])));

        let result = service
            .update_product(ProductId::new(1), Product::new("New Name", 30.0))
            .await;

        let Ok(updated) = result else {
            panic!("update failed");
        };
        assert_eq!(updated.id, Some(ProductId::new(1)));
        assert_eq!(updated.name, "New Name");
        assert_eq!(updated.price, 30.0);
    }

    #[tokio::test]
    async fn update_missing_product_is_not_found() {
        let service = service_over(Arc::new(InMemoryProducts::default()));

        let result = service
            .update_product(ProductId::new(999), Product::new("New Name", 30.0))
            .await;

        let Err(err) = result else {
            panic!("expected not-found error");
        };
        assert_eq!(err.to_string(), "Product not found for this id :: 999");
    }

    #[tokio::test]
    async fn delete_product_invokes_repository_delete_once() {
        let existing = Product {
            id: Some(ProductId::new(1)),
            name: "Test Product".to_string(),
            price: 15.0,
        };
        let repo = Arc::new(InMemoryProducts::seeded(vec![existing.clone()]));
        let service = service_over(Arc::clone(&repo));

        let result = service.delete_product(ProductId::new(1)).await;
        assert!(result.is_ok());

        let deleted = lock(&repo.deleted);
        assert_eq!(deleted.len(), 1);
        assert_eq!(deleted.first(), Some(&existing));
    }

    #[tokio::test]
    async fn delete_missing_product_is_not_found() {
        let repo = Arc::new(InMemoryProducts::default());
        let service = service_over(Arc::clone(&repo));

        let result = service.delete_product(ProductId::new(999)).await;

        let Err(err) = result else {
            panic!("expected not-found error");
        };
        assert_eq!(err.to_string(), "Product not found for this id :: 999");
        assert!(lock(&repo.deleted).is_empty());
    }

    #[tokio::test]
    async fn find_product_by_id_returns_entity() {
        let existing = Product {
            id: Some(ProductId::new(1)),
            name: "Find Me".to_string(),
            price: 45.0,
        };
        let service = service_over(Arc::new(InMemoryProducts::seeded(vec![existing])));

        let result = service.find_product_by_id(ProductId::new(1)).await;

        let Ok(found) = result else {
            panic!("find failed");
        };
        assert_eq!(found.id, Some(ProductId::new(1)));
        assert_eq!(found.name, "Find Me");
    }

    #[tokio::test]
    async fn find_missing_product_is_not_found() {
        let service = service_over(Arc::new(InMemoryProducts::default()));

        let result = service.find_product_by_id(ProductId::new(999)).await;

        let Err(err) = result else {
            panic!("expected not-found error");
        };
        assert_eq!(err.to_string(), "Product not found for this id :: 999");
    }

    #[tokio::test]
    async fn find_all_products_returns_repository_sequence() {
        let products = vec![
            Product {
                id: Some(ProductId::new(1)),
                name: "A".to_string(),
                price: 1.0,
            },
            Product {
                id: Some(ProductId::new(2)),
                name: "B".to_string(),
                price: 2.0,
            },
        ];
        let service = service_over(Arc::new(InMemoryProducts::seeded(products)));

        let result = service.find_all_products().await;

        let Ok(all) = result else {
            panic!("find_all failed");
        };
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn find_all_products_empty_when_none_exist() {
        let service = service_over(Arc::new(InMemoryProducts::default()));

        let result = service.find_all_products().await;

        let Ok(all) = result else {
            panic!("find_all failed");
        };
        assert!(all.is_empty());
    }
}
