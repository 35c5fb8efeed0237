//! PostgreSQL repository tests
//!
//! Each test starts its own container, so they are ignored by default:
//! `cargo test -p domain_products -- --ignored` with Docker available.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use migration::Migrator;
use serde_json::{json, Value};
use test_utils::assertions::{assert_close, assert_some};
use test_utils::{TestDataBuilder, TestDatabase};
use tower::ServiceExt;

async fn seed(repo: &PgProductRepository) -> Vec<Product> {
    let mut seeded = Vec::new();
    for (name, quantity, price) in [
        ("Producto 1", 10, 99.99),
        ("Producto 2", 20, 199.99),
        ("Producto 3", 30, 299.99),
    ] {
        seeded.push(
            repo.insert(NewProduct::new(name, quantity, price))
                .await
                .unwrap(),
        );
    }
    seeded
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_insert_assigns_distinct_ids() {
    let db = TestDatabase::new::<Migrator>().await;
    let repo = PgProductRepository::new(db.connection());

    let seeded = seed(&repo).await;

    assert!(seeded.iter().all(|p| p.id > 0));
    assert!(seeded[0].id < seeded[1].id && seeded[1].id < seeded[2].id);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_returns_rows_in_id_order() {
    let db = TestDatabase::new::<Migrator>().await;
    let repo = PgProductRepository::new(db.connection());
    let seeded = seed(&repo).await;

    let listed = repo.list().await.unwrap();

    assert_eq!(listed, seeded);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_fetch_missing_is_none() {
    let db = TestDatabase::new::<Migrator>().await;
    let repo = PgProductRepository::new(db.connection());

    assert_eq!(repo.fetch(999).await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_empty_after_truncate() {
    let db = TestDatabase::new::<Migrator>().await;
    let repo = PgProductRepository::new(db.connection());
    seed(&repo).await;

    db.truncate("products").await;

    assert!(repo.list().await.unwrap().is_empty());
    let next = repo.insert(NewProduct::new("fresh", 0, 0.0)).await.unwrap();
    assert_eq!(next.id, 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_quotes_round_trip_unchanged() {
    let db = TestDatabase::new::<Migrator>().await;
    let repo = PgProductRepository::new(db.connection());
    let name = r#"O'Brien's "best"; DROP TABLE products; --"#;

    let created = repo.insert(NewProduct::new(name, 1, 0.5)).await.unwrap();
    let fetched = assert_some(repo.fetch(created.id).await.unwrap(), "fetch after insert");

    assert_eq!(fetched.name, name);
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_and_remove_report_affected_rows() {
    let db = TestDatabase::new::<Migrator>().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_update_remove");
    let created = repo
        .insert(NewProduct::new(builder.name("product", "before"), 1, 1.0))
        .await
        .unwrap();

    let changed = Product::from_input(
        created.id,
        NewProduct::new(builder.name("product", "after"), builder.quantity(), builder.price()),
    );
    assert_eq!(repo.update(changed.clone()).await.unwrap(), Some(changed.clone()));

    let stored = assert_some(repo.fetch(created.id).await.unwrap(), "fetch after update");
    assert_eq!(stored.name, changed.name);
    assert_eq!(stored.quantity, changed.quantity);
    assert_close(stored.price, changed.price, "price after update");

    let ghost = Product::from_input(created.id + 1000, NewProduct::new("ghost", 0, 0.0));
    assert_eq!(repo.update(ghost).await.unwrap(), None);

    assert!(repo.remove(created.id).await.unwrap());
    assert!(!repo.remove(created.id).await.unwrap());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_storage_error_surfaces_as_500_with_driver_text() {
    let db = TestDatabase::new::<Migrator>().await;
    let app = handlers::router(
        ProductService::new(PgProductRepository::new(db.connection())),
        NotFoundPolicy::Compat,
    );
    sea_orm::ConnectionTrait::execute_unprepared(&db.connection, "DROP TABLE products")
        .await
        .unwrap();

    let response = app
        .oneshot(Request::builder().uri("/products").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].as_str().unwrap().contains("products"));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_overlong_name_is_rejected_by_the_column() {
    let db = TestDatabase::new::<Migrator>().await;
    let app = handlers::router(
        ProductService::new(PgProductRepository::new(db.connection())),
        NotFoundPolicy::Compat,
    );

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/product")
                .body(Body::from(json!({ "name": "x".repeat(256) }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].as_str().unwrap().contains("too long"));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_handlers_end_to_end() {
    let db = TestDatabase::new::<Migrator>().await;
    let app = handlers::router(
        ProductService::new(PgProductRepository::new(db.connection())),
        NotFoundPolicy::Compat,
    );

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/product")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({ "name": "Producto 1", "quantity": 10, "price": 99.99 }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let created: Product = serde_json::from_slice(&bytes).unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/product/999999")
                .body(Body::from(json!({ "name": "x" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/product/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
