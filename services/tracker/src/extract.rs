//! Request body extractor accepting JSON or URL-encoded forms

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Deserializes the body as JSON when the request says so, as a form otherwise
#[derive(Debug, Clone)]
pub struct JsonOrForm<T>(pub T);

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| {
            let essence = essence.trim();
            essence.eq_ignore_ascii_case("application/json")
                || (essence.starts_with("application/") && essence.ends_with("+json"))
        })
}

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let Json(payload) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
            Ok(Self(payload))
        } else {
            let Form(payload) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
            Ok(Self(payload))
        }
    }
}
