use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};

/// Repository trait for Product persistence
///
/// Implementations: [`PgProductRepository`](crate::postgres::PgProductRepository)
/// over PostgreSQL and [`InMemoryProductRepository`] for development and tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product; storage assigns the id
    async fn create(&self, input: ProductInput) -> ProductResult<Product>;

    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// All products in id order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Overwrite every mutable field of `id`
    async fn update(&self, id: i64, input: ProductInput) -> ProductResult<Product>;

    /// Returns whether a row was removed
    async fn delete(&self, id: i64) -> ProductResult<bool>;

    async fn exists_by_id(&self, id: i64) -> ProductResult<bool>;

    /// Exact, case-sensitive category match
    async fn find_by_category(&self, category: &str) -> ProductResult<Vec<Product>>;

    /// Price within `[min, max]`
    async fn find_by_price_between(&self, min: f64, max: f64) -> ProductResult<Vec<Product>>;

    /// Stock strictly below `threshold`
    async fn find_by_stock_less_than(&self, threshold: i32) -> ProductResult<Vec<Product>>;
}

#[derive(Debug, Default)]
struct Store {
    products: BTreeMap<i64, Product>,
    last_id: i64,
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn filtered<F>(&self, predicate: F) -> Vec<Product>
    where
        F: Fn(&Product) -> bool,
    {
        let store = self.store.read().await;
        store
            .products
            .values()
            .filter(|p| predicate(p))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: ProductInput) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        store.last_id += 1;
        let product = input.into_product(store.last_id);
        store.products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        Ok(self.filtered(|_| true).await)
    }

    async fn update(&self, id: i64, input: ProductInput) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let slot = store.products.get_mut(&id).ok_or(ProductError::NotFound(id))?;
        *slot = input.into_product(id);
        let updated = slot.clone();

        tracing::info!(product_id = id, "Updated product");
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> ProductResult<bool> {
        let mut store = self.store.write().await;

        if store.products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn exists_by_id(&self, id: i64) -> ProductResult<bool> {
        let store = self.store.read().await;
        Ok(store.products.contains_key(&id))
    }

    async fn find_by_category(&self, category: &str) -> ProductResult<Vec<Product>> {
        Ok(self.filtered(|p| p.category == category).await)
    }

    async fn find_by_price_between(&self, min: f64, max: f64) -> ProductResult<Vec<Product>> {
        Ok(self.filtered(|p| min <= p.price && p.price <= max).await)
    }

    async fn find_by_stock_less_than(&self, threshold: i32) -> ProductResult<Vec<Product>> {
        Ok(self.filtered(|p| p.stock < threshold).await)
    }
}
