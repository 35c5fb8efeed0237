//! HTTP handlers for the products API

use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
    routing::{get, post, put},
    Router,
};
use axum_helpers::{
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
    json_response, AppError, ErrorResponse, MessageResponse,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::extract::{ProductId, ProductJson};
use crate::models::{NewProduct, Product};
use crate::policy::{NotFoundPolicy, Operation};
use crate::repository::ProductRepository;
use crate::service::ProductService;

pub const DELETED_MESSAGE: &str = "Successful deletion";

/// OpenAPI documentation for the products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        get_product,
        create_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, NewProduct, ErrorResponse, MessageResponse),
        responses(BadRequestResponse, NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

struct ProductsState<R: ProductRepository> {
    service: ProductService<R>,
    not_found: NotFoundPolicy,
}

type SharedState<R> = Arc<ProductsState<R>>;

/// Products routes, mounted at the service root:
///
/// - `GET /products`, `GET /products/{id}`
/// - `POST /product`, `PUT /product/{id}`, `DELETE /product/{id}`
pub fn router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    not_found: NotFoundPolicy,
) -> Router {
    let state = Arc::new(ProductsState { service, not_found });

    Router::new()
        .route("/products", get(list_products))
        .route("/products/{id}", get(get_product))
        .route("/product", post(create_product))
        .route("/product/{id}", put(update_product).delete(delete_product))
        .with_state(state)
}

/// List all products
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "All products, ordered by id", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(state): State<SharedState<R>>,
) -> Result<Response, AppError> {
    let products = state.service.list_products().await?;
    Ok(json_response(StatusCode::OK, &products))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 204, description = "No such product (compat policy); body still carries the error", body = ErrorResponse),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(state): State<SharedState<R>>,
    ProductId(id): ProductId,
) -> Result<Response, AppError> {
    let product = state
        .service
        .get_product(id)
        .await
        .map_err(|e| state.not_found.map_error(Operation::Get, e))?;
    Ok(json_response(StatusCode::OK, &product))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/product",
    tag = "Products",
    request_body = NewProduct,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(state): State<SharedState<R>>,
    ProductJson(input): ProductJson<NewProduct>,
) -> Result<Response, AppError> {
    let product = state.service.create_product(input).await?;
    Ok(json_response(StatusCode::CREATED, &product))
}

/// Replace every field of a product
#[utoipa::path(
    put,
    path = "/product/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product id")),
    request_body = NewProduct,
    responses(
        (status = 200, description = "Product updated; the submitted entity", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, description = "Storage failure, or no such product (compat policy)", body = ErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(state): State<SharedState<R>>,
    ProductId(id): ProductId,
    ProductJson(input): ProductJson<NewProduct>,
) -> Result<Response, AppError> {
    let product = state
        .service
        .update_product(id, input)
        .await
        .map_err(|e| state.not_found.map_error(Operation::Update, e))?;
    Ok(json_response(StatusCode::OK, &product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/product/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted", body = MessageResponse),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(state): State<SharedState<R>>,
    ProductId(id): ProductId,
) -> Result<Response, AppError> {
    state
        .service
        .delete_product(id)
        .await
        .map_err(|e| state.not_found.map_error(Operation::Delete, e))?;
    Ok(json_response(
        StatusCode::NO_CONTENT,
        &MessageResponse::new(DELETED_MESSAGE),
    ))
}
