//! Product Service - not-found detection over a repository

use std::sync::Arc;
use tracing::{info, instrument};

use crate::error::{ProductError, ProductResult};
use crate::models::{NewProduct, Product};
use crate::repository::ProductRepository;

pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> ProductResult<Product> {
        self.repository
            .fetch(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: NewProduct) -> ProductResult<Product> {
        let product = self.repository.insert(input).await?;
        info!(product_id = product.id, "Product created");
        Ok(product)
    }

    /// Overwrites every field of product `id`; the result is the submitted
    /// entity, not a re-read.
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: i64, input: NewProduct) -> ProductResult<Product> {
        let product = self
            .repository
            .update(Product::from_input(id, input))
            .await?
            .ok_or(ProductError::NotFound(id))?;
        info!(product_id = id, "Product updated");
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> ProductResult<()> {
        if !self.repository.remove(id).await? {
            return Err(ProductError::NotFound(id));
        }
        info!(product_id = id, "Product deleted");
        Ok(())
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
