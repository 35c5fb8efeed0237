//! PostgreSQL implementation of [`ProductRepository`]

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, FromQueryResult, Statement};
use tracing::{debug, instrument};

use crate::error::ProductResult;
use crate::models::{NewProduct, Product};
use crate::repository::ProductRepository;

const LIST_SQL: &str = "SELECT id, name, quantity, price FROM products ORDER BY id";
const FETCH_SQL: &str = "SELECT id, name, quantity, price FROM products WHERE id = $1";
const INSERT_SQL: &str = r#"
    INSERT INTO products (name, quantity, price)
    VALUES ($1, $2, $3)
    RETURNING id, name, quantity, price
"#;
const UPDATE_SQL: &str = "UPDATE products SET name = $1, quantity = $2, price = $3 WHERE id = $4";
const DELETE_SQL: &str = "DELETE FROM products WHERE id = $1";

#[derive(Debug, FromQueryResult)]
struct ProductRow {
    id: i64,
    name: String,
    quantity: i32,
    price: f64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            quantity: row.quantity,
            price: row.price,
        }
    }
}

/// Raw parameterized statements over a sea-orm connection pool.
/// Every operation is a single statement.
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let stmt = Statement::from_string(DbBackend::Postgres, LIST_SQL.to_owned());
        let rows = ProductRow::find_by_statement(stmt).all(&self.db).await?;
        debug!(count = rows.len(), "Listed products");
        Ok(rows.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self))]
    async fn fetch(&self, id: i64) -> ProductResult<Option<Product>> {
        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, FETCH_SQL, [id.into()]);
        let row = ProductRow::find_by_statement(stmt).one(&self.db).await?;
        Ok(row.map(Product::from))
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn insert(&self, input: NewProduct) -> ProductResult<Product> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            INSERT_SQL,
            [input.name.into(), input.quantity.into(), input.price.into()],
        );
        let row = ProductRow::find_by_statement(stmt)
            .one(&self.db)
            .await?
            .ok_or(sea_orm::DbErr::RecordNotInserted)?;
        Ok(row.into())
    }

    #[instrument(skip(self, product), fields(product_id = product.id))]
    async fn update(&self, product: Product) -> ProductResult<Option<Product>> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            UPDATE_SQL,
            [
                product.name.clone().into(),
                product.quantity.into(),
                product.price.into(),
                product.id.into(),
            ],
        );
        let result = self.db.execute_raw(stmt).await?;
        Ok((result.rows_affected() > 0).then_some(product))
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: i64) -> ProductResult<bool> {
        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, DELETE_SQL, [id.into()]);
        let result = self.db.execute_raw(stmt).await?;
        Ok(result.rows_affected() > 0)
    }
}
