//! Shared state plus the root and health handlers.

use axum::{http::StatusCode, Json};
use serde_json::json;

use crate::auth::JwtSecret;
use crate::services::ProductService;

/// Shared application state for all routes.
#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
    pub jwt_secret: JwtSecret,
}

impl AppState {
    pub fn product_service(&self) -> &ProductService {
        &self.product_service
    }
    pub fn jwt_secret(&self) -> &JwtSecret {
        &self.jwt_secret
    }
}

/// GET /
pub async fn hello() -> &'static str {
    "Hello World"
}

/// GET /health — liveness probe.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "storefront" })),
    )
}
