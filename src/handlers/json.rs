//! JSON request extraction and response encoding with the store's error mapping.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{AppError, AppResult};

const JSON_MEDIA_TYPE: &str = "application/json";

/// Body extractor for a JSON object. Reports the body read, media type, and
/// parse failures as `AppError`, in that order.
///
/// Arrays and scalars are rejected even when `T` could be read from them.
pub struct JsonBody<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let declared_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(is_json_media_type)
            .unwrap_or(false);

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BodyRead(e.body_text()))?;

        if !declared_json {
            return Err(AppError::UnsupportedMediaType);
        }

        let value: serde_json::Value =
            serde_json::from_slice(&body).map_err(|e| AppError::InvalidBody(e.to_string()))?;
        if !value.is_object() {
            return Err(AppError::InvalidBody(format!(
                "expected a JSON object, got {}",
                json_kind(&value)
            )));
        }
        let parsed =
            serde_json::from_value(value).map_err(|e| AppError::InvalidBody(e.to_string()))?;
        Ok(JsonBody(parsed))
    }
}

/// `application/json`, optionally followed by parameters such as `charset`.
fn is_json_media_type(value: &str) -> bool {
    value
        .split(';')
        .next()
        .map(|essence| essence.trim().eq_ignore_ascii_case(JSON_MEDIA_TYPE))
        .unwrap_or(false)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Encode `value` as the JSON body of a `status` response.
pub fn json_response<T: Serialize>(status: StatusCode, value: &T) -> AppResult<Response> {
    let body = serde_json::to_vec(value)?;
    Ok((status, [(CONTENT_TYPE, JSON_MEDIA_TYPE)], body).into_response())
}
