//! Products Domain
//!
//! CRUD over a single `products` table.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, extractors, not-found policy
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← absence → NotFound, mutation logs
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + PostgreSQL and in-memory implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product, NewProduct
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, NotFoundPolicy, PgProductRepository, ProductService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = sea_orm::Database::connect("postgresql://localhost/products").await?;
//! let service = ProductService::new(PgProductRepository::new(db));
//! let router = handlers::router(service, NotFoundPolicy::Compat);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod policy;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{NewProduct, Product};
pub use policy::{NotFoundPolicy, Operation};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
