//! Token demo HTTP handlers: login and the gated homepage.

use axum::extract::State;
use tracing::{error, info};

use crate::handlers::http::AppState;

pub const HOMEPAGE_TEXT: &str = "Welcome to homepage, You must be authorized to see this.";

/// GET /auth/login — hands out a fresh token as plain text.
///
/// No credentials are checked. A signing failure is written back as text.
pub async fn login(State(state): State<AppState>) -> String {
    match state.jwt_secret().issue() {
        Ok(token) => {
            info!("token issued");
            token
        }
        Err(e) => {
            error!(error = %e, "token signing failed");
            e.to_string()
        }
    }
}

/// GET /auth/home — reachable only through `middleware::auth::is_authorized`.
pub async fn home() -> &'static str {
    HOMEPAGE_TEXT
}
