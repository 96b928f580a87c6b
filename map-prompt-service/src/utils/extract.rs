use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::dtos::ErrorResponse;

/// JSON extractor that rewrites body rejections into this service's error
/// shape. Deserialization errors (missing field, wrong type) become 422
/// with the field-level detail; syntax errors and every other body
/// rejection become 400.
pub struct AppJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned + 'static,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            let (status, error) = match &e {
                JsonRejection::JsonDataError(_) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    format!("Validation error: {}", e.body_text()),
                ),
                _ => (
                    StatusCode::BAD_REQUEST,
                    format!("Json parse error: {}", e.body_text()),
                ),
            };
            (status, Json(ErrorResponse { error })).into_response()
        })?;

        Ok(AppJson(value))
    }
}
