//! Product CRUD handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CreateProductInput, Product, ProductResponse};
use crate::errors::{AppError, AppResult};
use crate::types::ListQuery;

/// Create product routes (mounted behind the auth middleware)
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// A malformed path id is a client error, never "not found".
fn parse_id(id: &str) -> AppResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| AppError::bad_request("malformed product id"))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = CreateProductInput,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Product created"),
        (status = 400, description = "Malformed body or validation error"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Storage error")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProductInput>,
) -> AppResult<StatusCode> {
    let product = Product::new(payload.name, payload.price)?;
    state.products.create(&product).await?;

    Ok(StatusCode::CREATED)
}

/// List products
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    params(ListQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Product list", body = [ProductResponse]),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Storage error")
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<ProductResponse>>> {
    let products = state
        .products
        .find_all(query.page(), query.limit(), query.sort())
        .await?;

    Ok(Json(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 400, description = "Malformed id"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Storage error")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProductResponse>> {
    let id = parse_id(&id)?;

    let product = state
        .products
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(ProductResponse::from(product)))
}

/// Update a product (full-record replacement)
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product id")),
    request_body = CreateProductInput,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Product updated"),
        (status = 400, description = "Malformed id, body, or validation error"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Storage error")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<CreateProductInput>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;

    // Existence check before mutating, so a missing record maps to 404
    // rather than a storage failure.
    let mut product = state
        .products
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    product.replace(payload.name, payload.price)?;
    state.products.update(&product).await?;

    Ok(StatusCode::OK)
}

/// Delete a product by id
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, description = "Malformed id"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Storage error")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;

    // Same existence-before-mutation rule as update
    state
        .products
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    state.products.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
