//! Storage seam for products

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product};

/// Product storage.
///
/// Absence is reported as `None`/`false`, never as an error, so callers can
/// tell "no such row" apart from a failing statement.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, ordered by id
    async fn list(&self) -> ProductResult<Vec<Product>>;

    async fn fetch(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Store a new row and return it with the generated id
    async fn insert(&self, input: NewProduct) -> ProductResult<Product>;

    /// Overwrite every field of the row with `product.id`.
    /// `None` when no row was affected.
    async fn update(&self, product: Product) -> ProductResult<Option<Product>>;

    /// `false` when no row was affected
    async fn remove(&self, id: i64) -> ProductResult<bool>;
}

/// Map-backed repository for development and tests.
///
/// Ids start at 1 and are never reused, deleted ones included.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    state: Arc<RwLock<InMemoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryState {
    rows: BTreeMap<i64, Product>,
    last_id: i64,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let state = self.state.read().await;
        Ok(state.rows.values().cloned().collect())
    }

    async fn fetch(&self, id: i64) -> ProductResult<Option<Product>> {
        let state = self.state.read().await;
        Ok(state.rows.get(&id).cloned())
    }

    async fn insert(&self, input: NewProduct) -> ProductResult<Product> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let product = Product::from_input(state.last_id, input);
        state.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, product: Product) -> ProductResult<Option<Product>> {
        let mut state = self.state.write().await;
        match state.rows.get_mut(&product.id) {
            Some(row) => {
                *row = product.clone();
                Ok(Some(product))
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, id: i64) -> ProductResult<bool> {
        let mut state = self.state.write().await;
        Ok(state.rows.remove(&id).is_some())
    }
}
