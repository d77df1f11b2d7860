//! In-memory product CRUD service, with a JWT login demo and a SQL example.
//!
//! The product store is an ordered list behind one exclusive lock; products
//! are addressed by their position in that list.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::AppError;
pub use handlers::http::AppState;
pub use models::Product;
pub use services::product::ProductService;

use axum::routing::get;
use handlers::{http, products};
use tower_http::trace::TraceLayer;

/// Build the router (products, token demo, health). Used by main and by integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    // `get` would also answer HEAD; only the listed verbs are served here.
    let collection = get(products::list_products)
        .post(products::create_product)
        .put(products::missing_id)
        .patch(products::missing_id)
        .delete(products::missing_id)
        .head(products::method_not_allowed)
        .fallback(products::method_not_allowed);
    let item = get(products::get_product)
        .put(products::update_product)
        .patch(products::update_product)
        .delete(products::delete_product)
        .head(products::method_not_allowed)
        .fallback(products::method_not_allowed);

    let auth_routes = axum::Router::new()
        .route("/login", get(auth::login))
        .route(
            "/home",
            get(auth::home).route_layer(axum::middleware::from_fn_with_state(
                state.clone(),
                middleware::is_authorized,
            )),
        );

    axum::Router::new()
        .route("/", get(http::hello))
        .route("/health", get(http::health))
        .route("/products", collection.clone())
        .route("/products/", collection)
        .route("/products/:id", item)
        .nest("/auth", auth_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
