//! Token gate for the demo homepage: raw JWT in the `Token` header.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::handlers::http::AppState;

pub const HEADER_TOKEN: &str = "token";
pub const NOT_AUTHORIZED: &str = "Not Authorized";

/// Middleware: run the inner handler only when `Token` carries a valid JWT.
///
/// Rejections are plain-text 200 responses carrying the reason, not 401s.
pub async fn is_authorized(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let token = match request.headers().get(HEADER_TOKEN) {
        Some(value) => value.to_str().unwrap_or("").to_string(),
        None => {
            debug!("rejected request: missing Token header");
            return NOT_AUTHORIZED.into_response();
        }
    };

    match state.jwt_secret().validate(&token) {
        Ok(claims) => {
            debug!(user = %claims.user, "token accepted");
            next.run(request).await
        }
        Err(e) => {
            debug!(error = %e, "rejected request: invalid token");
            e.to_string().into_response()
        }
    }
}
