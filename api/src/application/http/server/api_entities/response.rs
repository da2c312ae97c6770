use axum::{
    Json,
    http::{HeaderName, HeaderValue, StatusCode},
    response::IntoResponse,
};
use larder_core::domain::common::entities::outcome::Outcome;
use serde::Serialize;

/// Set on responses whose body was produced by a deterministic fallback
/// instead of the provider.
pub const PROVIDER_FALLBACK_HEADER: HeaderName = HeaderName::from_static("x-provider-fallback");

#[derive(Debug, PartialEq)]
pub enum Response<T: Serialize> {
    OK(T),
    Fallback(T),
}

impl<T: Serialize> From<Outcome<T>> for Response<T> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Live(value) => Response::OK(value),
            Outcome::Fallback { value, reason } => {
                tracing::warn!(reason = %reason, "Serving fallback response");
                Response::Fallback(value)
            }
        }
    }
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::OK(data) => (StatusCode::OK, Json(data)).into_response(),
            Response::Fallback(data) => (
                StatusCode::OK,
                [(PROVIDER_FALLBACK_HEADER, HeaderValue::from_static("true"))],
                Json(data),
            )
                .into_response(),
        }
    }
}
