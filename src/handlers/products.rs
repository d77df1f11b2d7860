//! Product dispatcher: HTTP verbs on `/products` paths mapped to store operations.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::Response,
};

use crate::error::{AppError, AppResult};
use crate::handlers::http::AppState;
use crate::handlers::json::{json_response, JsonBody};
use crate::models::Product;

/// Path ids are positional indexes; anything that is not one is "not found".
fn parse_id(raw: &str) -> AppResult<usize> {
    raw.parse::<usize>().map_err(|_| AppError::NotFound)
}

/// Same as `parse_id`, for a segment axum could not decode (e.g. invalid UTF-8).
fn path_id(path: Result<Path<String>, PathRejection>) -> AppResult<usize> {
    let Path(raw) = path.map_err(|_| AppError::NotFound)?;
    parse_id(&raw)
}

/// GET /products
pub async fn list_products(State(state): State<AppState>) -> AppResult<Response> {
    let products = state.product_service().list().await;
    json_response(StatusCode::OK, &products)
}

/// GET /products/:id
pub async fn get_product(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Response> {
    let id = path_id(path)?;
    let product = state.product_service().get(id).await?;
    json_response(StatusCode::OK, &product)
}

/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    body: AppResult<JsonBody<Product>>,
) -> AppResult<Response> {
    let JsonBody(product) = body?;
    let created = state.product_service().create(product).await;
    json_response(StatusCode::CREATED, &created)
}

/// PUT | PATCH /products/:id — sparse patch, answers 201.
pub async fn update_product(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: AppResult<JsonBody<Product>>,
) -> AppResult<Response> {
    let id = path_id(path)?;
    let JsonBody(patch) = body?;
    let updated = state.product_service().update(id, patch).await?;
    json_response(StatusCode::CREATED, &updated)
}

/// DELETE /products/:id
pub async fn delete_product(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = path_id(path)?;
    state.product_service().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT | PATCH | DELETE /products — an absent id is treated like an unknown one.
pub async fn missing_id() -> AppError {
    AppError::NotFound
}

/// Fallback for any other method on the product routes.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
